use taskdeck_core::forms::FormState;
use taskdeck_core::view::TaskListView;
use taskdeck_core::{
  Action,
  Task
};
use yew::{
  Callback,
  Html,
  Properties,
  UseStateHandle,
  function_component,
  html
};

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub list:      TaskListView,
  pub tasks:     Vec<Task>,
  pub forms:
    UseStateHandle<FormState>,
  pub on_action: Callback<Action>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <>
          {
              if props.list.show_heading {
                  html! { <h2 id="allTasksHeading">{ "All Tasks" }</h2> }
              } else {
                  html! {}
              }
          }
          <div id="taskList">
              {
                  for props.list.cards.iter().zip(props.tasks.iter()).map(|(card, task)| html! {
                      <TaskCard
                          key={card.id.to_string()}
                          card={card.clone()}
                          task={task.clone()}
                          forms={props.forms.clone()}
                          on_action={props.on_action.clone()}
                      />
                  })
              }
          </div>
      </>
  }
}
