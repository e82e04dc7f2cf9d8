use chrono::Utc;
use gloo::dialogs::alert;
use taskdeck_core::datetime::min_selectable_deadline;
use taskdeck_core::forms::{
  FormState,
  TaskDraft
};
use taskdeck_core::{
  Action,
  Outcome,
  TaskStore,
  dispatch,
  view
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::components::{
  NewTaskForm,
  TaskList
};
use crate::storage::{
  LocalStorageSlot,
  load_tracker_config
};

#[function_component(App)]
pub fn app() -> Html {
  let store = use_mut_ref(|| {
    TaskStore::open(
      LocalStorageSlot,
      load_tracker_config()
    )
  });
  let forms =
    use_state(FormState::default);
  let new_task =
    use_state(TaskDraft::default);
  let revision =
    use_state(|| 0_u64);

  {
    let store = store.clone();
    use_effect_with((), move |_| {
      let store = store.borrow();
      tracing::debug!(
        key = %store.config().storage_key,
        tasks = store.len(),
        "frontend mounted"
      );
      || ()
    });
  }

  let on_action = {
    let store = store.clone();
    let forms = forms.clone();
    let new_task = new_task.clone();
    let revision = revision.clone();
    Callback::from(
      move |action: Action| {
        let is_create = matches!(
          action,
          Action::AddTask(_)
        );
        let result = dispatch(
          &mut *store.borrow_mut(),
          action,
          Utc::now()
        );

        match result {
          | Ok(outcome) => {
            if outcome
              == Outcome::Unchanged
            {
              tracing::debug!(
                "action target no \
                 longer exists"
              );
            }
            if is_create {
              new_task.set(
                TaskDraft::default()
              );
            }
            forms.set(
              FormState::default()
            );
            revision.set(
              (*revision)
                .wrapping_add(1)
            );
          }
          | Err(error) => {
            tracing::warn!(
              %error,
              "rejected user input"
            );
            alert(&error.to_string());
          }
        }
      }
    )
  };

  let on_create = {
    let on_action = on_action.clone();
    Callback::from(
      move |draft: TaskDraft| {
        on_action.emit(Action::AddTask(
          draft.to_fields()
        ));
      }
    )
  };

  let tasks =
    store.borrow().tasks().to_vec();
  let list = view::render(&tasks);
  let min_deadline =
    min_selectable_deadline(Utc::now());

  html! {
      <div class="container">
          <h1>{ "Task Tracker" }</h1>
          <NewTaskForm
              draft={new_task.clone()}
              min_deadline={min_deadline}
              on_submit={on_create}
          />
          <TaskList
              list={list}
              tasks={tasks}
              forms={forms.clone()}
              on_action={on_action}
          />
      </div>
  }
}
