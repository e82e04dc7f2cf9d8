use anyhow::anyhow;
use taskdeck_core::{
  KeyValueSlot,
  TrackerConfig
};

const TRACKER_CONFIG_TOML: &str =
  include_str!(
    "../assets/taskdeck.toml"
  );

/// `window.localStorage` as a task
/// store slot.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct LocalStorageSlot;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| {
      anyhow!("no browser window")
    })?
    .local_storage()
    .map_err(|err| {
      anyhow!(
        "local storage unavailable: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "local storage disabled"
      )
    })
}

impl KeyValueSlot for LocalStorageSlot {
  fn read(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "failed reading {key}: \
           {err:?}"
        )
      })
  }

  fn write(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "failed writing {key}: \
           {err:?}"
        )
      })
  }
}

pub fn load_tracker_config()
-> TrackerConfig {
  match TrackerConfig::from_toml_str(
    TRACKER_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed parsing embedded \
         tracker config; using \
         defaults"
      );
      TrackerConfig::default()
    }
  }
}
