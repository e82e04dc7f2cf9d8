use taskdeck_core::forms::{
  FormState,
  RowForm,
  SubtaskDraft
};
use taskdeck_core::view::{
  RowAction,
  SubtaskRowView
};
use taskdeck_core::{
  Action,
  ItemId,
  Subtask
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseStateHandle,
  function_component,
  html
};

use super::SubtaskForm;

#[derive(Properties, PartialEq)]
pub struct SubtaskRowProps {
  pub task_id:   ItemId,
  pub row:       SubtaskRowView,
  pub subtask:   Subtask,
  pub forms:
    UseStateHandle<FormState>,
  pub on_action: Callback<Action>
}

#[function_component(SubtaskRow)]
pub fn subtask_row(
  props: &SubtaskRowProps
) -> Html {
  let task_id = &props.task_id;
  let subtask_id = &props.row.id;

  let action_button = |action: RowAction| {
    let (class, onclick) = match action {
      | RowAction::Edit => {
        let forms = props.forms.clone();
        let subtask =
          props.subtask.clone();
        let task_id = task_id.clone();
        (
          "btn-edit-sub",
          Callback::from(
            move |_: MouseEvent| {
              let mut next =
                (*forms).clone();
              if next.open_subtask_edit(
                &task_id, &subtask
              ) {
                forms.set(next);
              }
            }
          )
        )
      }
      | RowAction::Delete => {
        let on_action =
          props.on_action.clone();
        let task_id = task_id.clone();
        let subtask_id = subtask_id.clone();
        (
          "btn-delete-sub",
          Callback::from(
            move |_: MouseEvent| {
              on_action.emit(
                Action::DeleteSubtask {
                  task_id: task_id.clone(),
                  subtask_id: subtask_id
                    .clone()
                }
              );
            }
          )
        )
      }
    };

    html! {
        <button class={class} onclick={onclick}>{ action.label() }</button>
    }
  };

  let edit_form = match props
    .forms
    .row(task_id, subtask_id)
  {
    | RowForm::Editing(draft) => {
      let on_change = {
        let forms = props.forms.clone();
        let task_id = task_id.clone();
        let subtask_id = subtask_id.clone();
        Callback::from(
          move |next_draft: SubtaskDraft| {
            let mut next =
              (*forms).clone();
            next.update_subtask_draft(
              &task_id,
              &subtask_id,
              |d| *d = next_draft
            );
            forms.set(next);
          }
        )
      };
      let on_save = {
        let on_action =
          props.on_action.clone();
        let task_id = task_id.clone();
        let subtask_id = subtask_id.clone();
        Callback::from(
          move |draft: SubtaskDraft| {
            on_action.emit(
              Action::EditSubtask {
                task_id: task_id.clone(),
                subtask_id: subtask_id
                  .clone(),
                fields: draft.to_fields()
              }
            );
          }
        )
      };
      let on_cancel = {
        let forms = props.forms.clone();
        let task_id = task_id.clone();
        let subtask_id = subtask_id.clone();
        Callback::from(move |()| {
          let mut next =
            (*forms).clone();
          next.close_row(
            &task_id,
            &subtask_id
          );
          forms.set(next);
        })
      };
      html! {
          <SubtaskForm
              draft={draft.clone()}
              editing={true}
              on_change={on_change}
              on_save={on_save}
              on_cancel={on_cancel}
          />
      }
    }
    | RowForm::Idle => html! {}
  };

  html! {
      <div class="subtask-item">
          <div class="subtask-title">{ &props.row.title }</div>
          {
              match &props.row.description {
                  Some(description) => html! { <div class="subtask-description">{ description }</div> },
                  None => html! {},
              }
          }
          <div class="subtask-buttons">
              { for props.row.actions.iter().copied().map(action_button) }
          </div>
          { edit_form }
      </div>
  }
}
