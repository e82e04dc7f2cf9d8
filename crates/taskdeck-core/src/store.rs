use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::config::TrackerConfig;
use crate::datetime::{is_valid_deadline_year, parse_timestamp, to_storage_precision};
use crate::error::{Result, ValidationError};
use crate::slot::KeyValueSlot;
use crate::task::{ItemId, Subtask, SubtaskFields, Task, TaskFields};

/// The in-memory task list, mirrored to a single slot after every change.
#[derive(Debug)]
pub struct TaskStore<S> {
    slot: S,
    config: TrackerConfig,
    tasks: Vec<Task>,
}

impl<S: KeyValueSlot> TaskStore<S> {
    #[tracing::instrument(skip(slot, config), fields(key = %config.storage_key))]
    pub fn open(slot: S, config: TrackerConfig) -> Self {
        let tasks = load_tasks(&slot, &config.storage_key);
        info!(count = tasks.len(), "opened task store");
        Self {
            slot,
            config,
            tasks,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &ItemId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Writes the full list. Failures are logged, never surfaced.
    pub fn save(&mut self) {
        if let Err(err) = save_tasks(&mut self.slot, &self.config.storage_key, &self.tasks) {
            error!(error = %format!("{err:#}"), "failed to persist tasks");
        }
    }

    /// Timestamps are kept at millisecond precision so a reload yields the
    /// same values.
    #[tracing::instrument(skip(self, fields, now), fields(title = %fields.title))]
    pub fn add_task(&mut self, fields: TaskFields, now: DateTime<Utc>) -> Result<&Task> {
        let now = to_storage_precision(now);
        let title = fields.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTaskTitle);
        }

        let deadline = match fields.supplied_deadline() {
            Some(raw) => self.check_deadline(raw)?,
            None => now + self.config.default_deadline_offset(),
        };

        let task = Task::new(
            title.to_string(),
            fields.description.trim().to_string(),
            fields.notes.trim().to_string(),
            deadline,
            now,
        );
        debug!(id = %task.id, %deadline, "adding task");
        self.tasks.push(task);
        self.save();

        let idx = self.tasks.len() - 1;
        Ok(&self.tasks[idx])
    }

    /// Full overwrite of the editable fields. An invalid deadline aborts the
    /// whole edit. Returns `false` when `id` is unknown.
    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    pub fn edit_task(&mut self, id: &ItemId, fields: TaskFields) -> Result<bool> {
        let deadline = match fields.supplied_deadline() {
            Some(raw) => Some(self.check_deadline(raw)?),
            None => None,
        };

        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            debug!("edit target not found");
            return Ok(false);
        };

        if let Some(deadline) = deadline {
            task.deadline = Some(deadline);
        }
        task.title = fields.title.trim().to_string();
        task.description = fields.description.trim().to_string();
        task.notes = fields.notes.trim().to_string();

        self.save();
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn delete_task(&mut self, id: &ItemId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            debug!("delete target not found");
            return false;
        }

        self.save();
        true
    }

    /// Returns the new subtask id, or `None` when the parent is unknown.
    #[tracing::instrument(skip(self, fields), fields(task_id = %task_id))]
    pub fn add_subtask(
        &mut self,
        task_id: &ItemId,
        fields: SubtaskFields,
    ) -> Result<Option<ItemId>> {
        let title = fields.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptySubtaskTitle);
        }

        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == task_id) else {
            debug!("parent task not found");
            return Ok(None);
        };

        let subtask = Subtask::new(title.to_string(), fields.description.trim().to_string());
        let id = subtask.id.clone();
        task.subtasks.push(subtask);

        self.save();
        Ok(Some(id))
    }

    /// Creation requires a title; editing deliberately does not re-check it.
    #[tracing::instrument(skip(self, fields), fields(task_id = %task_id, subtask_id = %subtask_id))]
    pub fn edit_subtask(
        &mut self,
        task_id: &ItemId,
        subtask_id: &ItemId,
        fields: SubtaskFields,
    ) -> bool {
        let Some(subtask) = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == task_id)
            .and_then(|t| t.subtask_mut(subtask_id))
        else {
            debug!("subtask not found");
            return false;
        };

        subtask.title = fields.title.trim().to_string();
        subtask.description = fields.description.trim().to_string();

        self.save();
        true
    }

    #[tracing::instrument(skip(self), fields(task_id = %task_id, subtask_id = %subtask_id))]
    pub fn delete_subtask(&mut self, task_id: &ItemId, subtask_id: &ItemId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == task_id) else {
            debug!("parent task not found");
            return false;
        };

        let before = task.subtasks.len();
        task.subtasks.retain(|s| &s.id != subtask_id);
        if task.subtasks.len() == before {
            debug!("subtask not found");
            return false;
        }

        self.save();
        true
    }

    fn check_deadline(&self, raw: &str) -> Result<DateTime<Utc>> {
        let years = self.config.deadline_years();
        let out_of_range = ValidationError::DeadlineYearOutOfRange {
            min: *years.start(),
            max: *years.end(),
        };
        if !is_valid_deadline_year(raw, &years) {
            return Err(out_of_range);
        }

        parse_timestamp(raw)
            .map(to_storage_precision)
            .ok_or(out_of_range)
    }
}

/// Reads the task list stored under `key`. Missing or unreadable data is an
/// empty list.
#[tracing::instrument(skip(slot))]
pub fn load_tasks<S: KeyValueSlot + ?Sized>(slot: &S, key: &str) -> Vec<Task> {
    let raw = match slot.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored tasks");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "failed reading stored tasks; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => {
            debug!(count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(err) => {
            warn!(error = %err, "discarding malformed stored tasks");
            Vec::new()
        }
    }
}

#[tracing::instrument(skip(slot, tasks), fields(count = tasks.len()))]
pub fn save_tasks<S: KeyValueSlot + ?Sized>(
    slot: &mut S,
    key: &str,
    tasks: &[Task],
) -> anyhow::Result<()> {
    let serialized = serde_json::to_string(tasks).context("failed to serialize tasks")?;
    slot.write(key, &serialized)
        .with_context(|| format!("failed to write slot {key}"))
}
