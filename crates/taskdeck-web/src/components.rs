mod new_task_form;
mod subtask_form;
mod subtask_row;
mod task_card;
mod task_edit_form;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use subtask_form::SubtaskForm;
pub use subtask_row::SubtaskRow;
pub use task_card::TaskCard;
pub use task_edit_form::TaskEditForm;
pub use task_list::TaskList;

use web_sys::InputEvent;
use yew::TargetCast;

fn input_value(
  e: &InputEvent
) -> String {
  let input: web_sys::HtmlInputElement =
    e.target_unchecked_into();
  input.value()
}

fn textarea_value(
  e: &InputEvent
) -> String {
  let area: web_sys::HtmlTextAreaElement =
    e.target_unchecked_into();
  area.value()
}
