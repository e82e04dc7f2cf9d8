use taskdeck_core::forms::TaskDraft;
use web_sys::InputEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  input_value,
  textarea_value
};

#[derive(Properties, PartialEq)]
pub struct TaskEditFormProps {
  pub draft:     TaskDraft,
  pub on_change: Callback<TaskDraft>,
  pub on_save:   Callback<TaskDraft>,
  pub on_cancel: Callback<()>
}

#[function_component(TaskEditForm)]
pub fn task_edit_form(
  props: &TaskEditFormProps
) -> Html {
  let update =
    |apply: fn(&mut TaskDraft, String),
     multiline: bool| {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let value = if multiline {
          textarea_value(&e)
        } else {
          input_value(&e)
        };
        let mut next = draft.clone();
        apply(&mut next, value);
        on_change.emit(next);
      }
    )
  };

  let on_save = {
    let draft = props.draft.clone();
    let on_save = props.on_save.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_save.emit(draft.clone());
      }
    )
  };
  let on_cancel = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(());
      }
    )
  };

  html! {
      <div class="edit-fields">
          <input
              type="text"
              class="edit-title"
              value={props.draft.title.clone()}
              oninput={update(|d, v| d.title = v, false)}
          />
          <textarea
              class="edit-desc"
              value={props.draft.description.clone()}
              oninput={update(|d, v| d.description = v, true)}
          />
          <input
              type="datetime-local"
              class="edit-deadline"
              value={props.draft.deadline.clone()}
              oninput={update(|d, v| d.deadline = v, false)}
          />
          <textarea
              class="edit-notes"
              value={props.draft.notes.clone()}
              oninput={update(|d, v| d.notes = v, true)}
          />
          <div class="edit-actions">
              <button class="save-edit" onclick={on_save}>{ "Save" }</button>
              <button class="cancel-edit" onclick={on_cancel}>{ "Cancel" }</button>
          </div>
      </div>
  }
}
