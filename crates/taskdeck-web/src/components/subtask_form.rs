use taskdeck_core::forms::SubtaskDraft;
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

/// Title + description editor shared by
/// the add-subtask form and the inline
/// subtask edit form.
#[derive(Properties, PartialEq)]
pub struct SubtaskFormProps {
  pub draft:     SubtaskDraft,
  pub editing:   bool,
  pub on_change: Callback<SubtaskDraft>,
  pub on_save:   Callback<SubtaskDraft>,
  pub on_cancel: Callback<()>
}

#[function_component(SubtaskForm)]
pub fn subtask_form(
  props: &SubtaskFormProps
) -> Html {
  let on_title = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let mut next = draft.clone();
        next.title = input_value(&e);
        on_change.emit(next);
      }
    )
  };
  let on_description = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let mut next = draft.clone();
        next.description =
          textarea_value(&e);
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

  if props.editing {
    html! {
        <div class="edit-fields">
            <input
                type="text"
                class="edit-sub-title"
                value={props.draft.title.clone()}
                oninput={on_title}
            />
            <textarea
                class="edit-sub-desc"
                value={props.draft.description.clone()}
                oninput={on_description}
            />
            <div class="edit-actions">
                <button class="save-edit-sub" onclick={on_save}>{ "Save" }</button>
                <button class="cancel-edit-sub" onclick={on_cancel}>{ "Cancel" }</button>
            </div>
        </div>
    }
  } else {
    html! {
        <div class="subtask-form">
            <input
                type="text"
                class="subtask-input-title"
                placeholder="Subtask Title"
                value={props.draft.title.clone()}
                oninput={on_title}
            />
            <textarea
                class="subtask-input-desc"
                placeholder="Subtask Description"
                value={props.draft.description.clone()}
                oninput={on_description}
            />
            <div class="subtask-buttons">
                <button class="save-subtask" onclick={on_save}>{ "Save" }</button>
                <button class="cancel-subtask" onclick={on_cancel}>{ "Cancel" }</button>
            </div>
        </div>
    }
  }
}
