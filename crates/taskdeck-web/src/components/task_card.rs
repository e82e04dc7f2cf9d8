use taskdeck_core::forms::{
  CardForm,
  FormState,
  SubtaskDraft,
  TaskDraft
};
use taskdeck_core::view::{
  CardAction,
  TaskCardView
};
use taskdeck_core::{
  Action,
  ItemId,
  Task
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseStateHandle,
  classes,
  function_component,
  html
};

use super::{
  SubtaskForm,
  SubtaskRow,
  TaskEditForm
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub card:      TaskCardView,
  pub task:      Task,
  pub forms:
    UseStateHandle<FormState>,
  pub on_action: Callback<Action>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let card = &props.card;
  let id: &ItemId = &card.id;
  let class = classes!(
    "task-card",
    card
      .completed
      .then_some("completed")
  );
  let card_form =
    props.forms.card(id).clone();

  let action_button =
    |action: CardAction| {
      let (class, onclick) = match action
      {
        | CardAction::AddSubtask => {
          let forms = props.forms.clone();
          let id = id.clone();
          (
            "btn-add-subtask",
            Callback::from(
              move |_: MouseEvent| {
                let mut next =
                  (*forms).clone();
                if next
                  .open_add_subtask(&id)
                {
                  forms.set(next);
                }
              }
            )
          )
        }
        | CardAction::Edit => {
          let forms = props.forms.clone();
          let task = props.task.clone();
          (
            "btn-edit-task",
            Callback::from(
              move |_: MouseEvent| {
                let mut next =
                  (*forms).clone();
                if next
                  .open_task_edit(&task)
                {
                  forms.set(next);
                }
              }
            )
          )
        }
        | CardAction::Delete => {
          let on_action =
            props.on_action.clone();
          let id = id.clone();
          (
            "btn-delete-task",
            Callback::from(
              move |_: MouseEvent| {
                on_action.emit(
                  Action::DeleteTask {
                    id: id.clone()
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

  let on_cancel = {
    let forms = props.forms.clone();
    let id = id.clone();
    Callback::from(move |()| {
      let mut next = (*forms).clone();
      next.close_card(&id);
      forms.set(next);
    })
  };

  let edit_form = match &card_form {
    | CardForm::Editing(draft) => {
      let on_change = {
        let forms = props.forms.clone();
        let id = id.clone();
        Callback::from(
          move |next_draft: TaskDraft| {
            let mut next =
              (*forms).clone();
            next.update_task_draft(
              &id,
              |d| *d = next_draft
            );
            forms.set(next);
          }
        )
      };
      let on_save = {
        let on_action =
          props.on_action.clone();
        let id = id.clone();
        Callback::from(
          move |draft: TaskDraft| {
            on_action.emit(
              Action::EditTask {
                id: id.clone(),
                fields: draft
                  .to_fields()
              }
            );
          }
        )
      };
      html! {
          <TaskEditForm
              draft={draft.clone()}
              on_change={on_change}
              on_save={on_save}
              on_cancel={on_cancel.clone()}
          />
      }
    }
    | _ => html! {}
  };

  let subtask_form = match &card_form {
    | CardForm::AddingSubtask(draft) => {
      let on_change = {
        let forms = props.forms.clone();
        let id = id.clone();
        Callback::from(
          move |next_draft: SubtaskDraft| {
            let mut next =
              (*forms).clone();
            next.update_new_subtask_draft(
              &id,
              |d| *d = next_draft
            );
            forms.set(next);
          }
        )
      };
      let on_save = {
        let on_action =
          props.on_action.clone();
        let id = id.clone();
        Callback::from(
          move |draft: SubtaskDraft| {
            on_action.emit(
              Action::AddSubtask {
                task_id: id.clone(),
                fields:  draft
                  .to_fields()
              }
            );
          }
        )
      };
      html! {
          <SubtaskForm
              draft={draft.clone()}
              editing={false}
              on_change={on_change}
              on_save={on_save}
              on_cancel={on_cancel}
          />
      }
    }
    | _ => html! {}
  };

  html! {
      <div class={class}>
          <div class="task-number">{ &card.position_label }</div>
          <div class="task-title">{ &card.title }</div>
          {
              match &card.description {
                  Some(description) => html! { <div class="task-description">{ description }</div> },
                  None => html! {},
              }
          }
          {
              match card.notes_line() {
                  Some(notes) => html! { <div class="task-notes">{ notes }</div> },
                  None => html! {},
              }
          }
          <div class="task-info">{ card.info_line() }</div>
          { edit_form }
          <div class="task-buttons">
              { for card.actions.iter().copied().map(action_button) }
          </div>
          <div class="subtasks">
              {
                  if card.show_subtask_heading() {
                      html! { <div class="subtasks-heading">{ "Subtasks" }</div> }
                  } else {
                      html! {}
                  }
              }
              {
                  for card.subtasks.iter().filter_map(|row| {
                      let subtask = props.task.subtask(&row.id)?.clone();
                      Some(html! {
                          <SubtaskRow
                              key={row.id.to_string()}
                              task_id={id.clone()}
                              row={row.clone()}
                              subtask={subtask}
                              forms={props.forms.clone()}
                              on_action={props.on_action.clone()}
                          />
                      })
                  })
              }
              { subtask_form }
          </div>
      </div>
  }
}
