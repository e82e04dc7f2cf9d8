use taskdeck_core::forms::TaskDraft;
use web_sys::InputEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseStateHandle,
  function_component,
  html
};

use super::{
  input_value,
  textarea_value
};

#[derive(Properties, PartialEq)]
pub struct NewTaskFormProps {
  pub draft:
    UseStateHandle<TaskDraft>,
  pub min_deadline: String,
  pub on_submit:    Callback<TaskDraft>
}

#[function_component(NewTaskForm)]
pub fn new_task_form(
  props: &NewTaskFormProps
) -> Html {
  let update =
    |apply: fn(&mut TaskDraft, String),
     multiline: bool| {
    let draft = props.draft.clone();
    Callback::from(
      move |e: InputEvent| {
        let value = if multiline {
          textarea_value(&e)
        } else {
          input_value(&e)
        };
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
      }
    )
  };

  let on_title = update(
    |d, v| d.title = v,
    false
  );
  let on_description = update(
    |d, v| d.description = v,
    true
  );
  let on_deadline = update(
    |d, v| d.deadline = v,
    false
  );
  let on_notes =
    update(|d, v| d.notes = v, true);

  let on_add = {
    let draft = props.draft.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit
          .emit((*draft).clone());
      }
    )
  };

  html! {
      <div class="task-form">
          <input
              id="taskTitle"
              type="text"
              placeholder="Task Title"
              value={props.draft.title.clone()}
              oninput={on_title}
          />
          <textarea
              id="taskDescription"
              placeholder="Task Description"
              value={props.draft.description.clone()}
              oninput={on_description}
          />
          <input
              id="taskDeadline"
              type="datetime-local"
              min={props.min_deadline.clone()}
              value={props.draft.deadline.clone()}
              oninput={on_deadline}
          />
          <textarea
              id="extraNotes"
              placeholder="Extra Notes"
              value={props.draft.notes.clone()}
              oninput={on_notes}
          />
          <button id="addTaskBtn" onclick={on_add}>{ "Add Task" }</button>
      </div>
  }
}
