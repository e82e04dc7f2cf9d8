//! Inline form state for task cards and subtask rows.
//!
//! Nothing here is persisted. Every successful mutation re-renders the list
//! and throws all open forms away via [`FormState::reset`].

use std::collections::HashMap;

use crate::datetime::to_input_value;
use crate::task::{ItemId, Subtask, SubtaskFields, Task, TaskFields};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `datetime-local` input value; blank keeps the stored deadline.
    pub deadline: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtaskDraft {
    pub title: String,
    pub description: String,
}

/// The single form a task card may show. Edit and add-subtask exclude each
/// other: opening one while the other is up is refused until it is saved or
/// cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardForm {
    #[default]
    Idle,
    Editing(TaskDraft),
    AddingSubtask(SubtaskDraft),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowForm {
    #[default]
    Idle,
    Editing(SubtaskDraft),
}

static IDLE_CARD: CardForm = CardForm::Idle;
static IDLE_ROW: RowForm = RowForm::Idle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    cards: HashMap<ItemId, CardForm>,
    rows: HashMap<(ItemId, ItemId), RowForm>,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.map(to_input_value).unwrap_or_default(),
            notes: task.notes.clone(),
        }
    }

    pub fn to_fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            notes: self.notes.clone(),
            deadline: Some(self.deadline.clone()),
        }
    }
}

impl SubtaskDraft {
    pub fn from_subtask(subtask: &Subtask) -> Self {
        Self {
            title: subtask.title.clone(),
            description: subtask.description.clone(),
        }
    }

    pub fn to_fields(&self) -> SubtaskFields {
        SubtaskFields::new(self.title.clone(), self.description.clone())
    }
}

impl FormState {
    pub fn card(&self, task_id: &ItemId) -> &CardForm {
        self.cards.get(task_id).unwrap_or(&IDLE_CARD)
    }

    pub fn row(&self, task_id: &ItemId, subtask_id: &ItemId) -> &RowForm {
        self.rows
            .get(&(task_id.clone(), subtask_id.clone()))
            .unwrap_or(&IDLE_ROW)
    }

    pub fn is_idle(&self) -> bool {
        self.cards.is_empty() && self.rows.is_empty()
    }

    /// Opens the edit form prefilled from `task`. No-op while the card
    /// already shows a form.
    pub fn open_task_edit(&mut self, task: &Task) -> bool {
        self.open_card(&task.id, CardForm::Editing(TaskDraft::from_task(task)))
    }

    pub fn open_add_subtask(&mut self, task_id: &ItemId) -> bool {
        self.open_card(task_id, CardForm::AddingSubtask(SubtaskDraft::default()))
    }

    pub fn open_subtask_edit(&mut self, task_id: &ItemId, subtask: &Subtask) -> bool {
        let key = (task_id.clone(), subtask.id.clone());
        if self.rows.contains_key(&key) {
            return false;
        }
        self.rows
            .insert(key, RowForm::Editing(SubtaskDraft::from_subtask(subtask)));
        true
    }

    pub fn update_task_draft(&mut self, task_id: &ItemId, edit: impl FnOnce(&mut TaskDraft)) {
        if let Some(CardForm::Editing(draft)) = self.cards.get_mut(task_id) {
            edit(draft);
        }
    }

    pub fn update_new_subtask_draft(
        &mut self,
        task_id: &ItemId,
        edit: impl FnOnce(&mut SubtaskDraft),
    ) {
        if let Some(CardForm::AddingSubtask(draft)) = self.cards.get_mut(task_id) {
            edit(draft);
        }
    }

    pub fn update_subtask_draft(
        &mut self,
        task_id: &ItemId,
        subtask_id: &ItemId,
        edit: impl FnOnce(&mut SubtaskDraft),
    ) {
        let key = (task_id.clone(), subtask_id.clone());
        if let Some(RowForm::Editing(draft)) = self.rows.get_mut(&key) {
            edit(draft);
        }
    }

    /// Cancel on a card form.
    pub fn close_card(&mut self, task_id: &ItemId) {
        self.cards.remove(task_id);
    }

    pub fn close_row(&mut self, task_id: &ItemId, subtask_id: &ItemId) {
        self.rows.remove(&(task_id.clone(), subtask_id.clone()));
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.rows.clear();
    }

    fn open_card(&mut self, task_id: &ItemId, form: CardForm) -> bool {
        if self.cards.contains_key(task_id) {
            return false;
        }
        self.cards.insert(task_id.clone(), form);
        true
    }
}
