mod app;
mod components;
mod storage;

use app::App;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document
        .get_element_by_id(MOUNT_ID)
    });

  match mount {
    | Some(root) => {
      tracing::info!(
        mount = MOUNT_ID,
        "starting task tracker"
      );
      yew::Renderer::<App>::with_root(
        root
      )
      .render();
    }
    | None => {
      tracing::warn!(
        mount = MOUNT_ID,
        "mount element missing; \
         rendering into body"
      );
      yew::Renderer::<App>::new()
        .render();
    }
  }
}
