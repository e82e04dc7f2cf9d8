//! View models for the task list.
//!
//! [`render`] is pure: it rebuilds the whole presentation from the task list
//! every time. Frontends turn these structs into markup and bind one handler
//! per action.

use crate::datetime::format_datetime;
use crate::task::{ItemId, Subtask, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    AddSubtask,
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

pub const CARD_ACTIONS: [CardAction; 3] =
    [CardAction::AddSubtask, CardAction::Edit, CardAction::Delete];
pub const ROW_ACTIONS: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    /// The "All Tasks" heading is hidden for an empty list.
    pub show_heading: bool,
    pub cards: Vec<TaskCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCardView {
    pub id: ItemId,
    pub position_label: String,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created: String,
    pub deadline: Option<String>,
    pub completed: bool,
    pub actions: Vec<CardAction>,
    pub subtasks: Vec<SubtaskRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskRowView {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub actions: Vec<RowAction>,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::AddSubtask => "Add Subtask",
            CardAction::Edit => "Edit",
            CardAction::Delete => "Delete",
        }
    }
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

impl TaskCardView {
    pub fn show_subtask_heading(&self) -> bool {
        !self.subtasks.is_empty()
    }

    pub fn notes_line(&self) -> Option<String> {
        self.notes.as_ref().map(|notes| format!("Notes: {notes}"))
    }

    pub fn info_line(&self) -> String {
        match &self.deadline {
            Some(deadline) => format!("Created: {} | Deadline: {deadline}", self.created),
            None => format!("Created: {}", self.created),
        }
    }
}

#[tracing::instrument(skip(tasks), fields(count = tasks.len()))]
pub fn render(tasks: &[Task]) -> TaskListView {
    TaskListView {
        show_heading: !tasks.is_empty(),
        cards: tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| card(idx, task))
            .collect(),
    }
}

fn card(idx: usize, task: &Task) -> TaskCardView {
    TaskCardView {
        id: task.id.clone(),
        position_label: format!("Task {}", idx + 1),
        title: task.title.clone(),
        description: non_empty(&task.description),
        notes: non_empty(&task.notes),
        created: format_datetime(task.created_at),
        deadline: task.deadline.map(format_datetime),
        completed: task.completed,
        actions: CARD_ACTIONS.to_vec(),
        subtasks: task.subtasks.iter().map(row).collect(),
    }
}

fn row(subtask: &Subtask) -> SubtaskRowView {
    SubtaskRowView {
        id: subtask.id.clone(),
        title: subtask.title.clone(),
        description: non_empty(&subtask.description),
        actions: ROW_ACTIONS.to_vec(),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{CardAction, RowAction, render};
    use crate::datetime::format_datetime;
    use crate::task::{Subtask, Task};

    #[test]
    fn empty_list_hides_heading() {
        let view = render(&[]);
        assert!(!view.show_heading);
        assert!(view.cards.is_empty());
    }

    #[test]
    fn cards_carry_positions_and_optional_fields() {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
            .single()
            .expect("valid now");
        let first = Task::new("One".into(), String::new(), String::new(), now, now);
        let mut second = Task::new("Two".into(), "desc".into(), "remember".into(), now, now);
        second.deadline = None;
        second.subtasks.push(Subtask::new("Child".into(), String::new()));

        let view = render(&[first, second]);
        assert!(view.show_heading);
        assert_eq!(view.cards.len(), 2);

        let one = &view.cards[0];
        assert_eq!(one.position_label, "Task 1");
        assert_eq!(one.description, None);
        assert_eq!(one.notes_line(), None);
        assert!(!one.show_subtask_heading());
        assert_eq!(
            one.actions,
            vec![CardAction::AddSubtask, CardAction::Edit, CardAction::Delete]
        );
        assert_eq!(
            one.info_line(),
            format!(
                "Created: {} | Deadline: {}",
                format_datetime(now),
                format_datetime(now)
            )
        );

        let two = &view.cards[1];
        assert_eq!(two.position_label, "Task 2");
        assert_eq!(two.description.as_deref(), Some("desc"));
        assert_eq!(two.notes_line().as_deref(), Some("Notes: remember"));
        assert_eq!(two.info_line(), format!("Created: {}", format_datetime(now)));
        assert!(two.show_subtask_heading());
        assert_eq!(two.subtasks[0].title, "Child");
        assert_eq!(two.subtasks[0].description, None);
        assert_eq!(two.subtasks[0].actions, vec![RowAction::Edit, RowAction::Delete]);
    }
}
