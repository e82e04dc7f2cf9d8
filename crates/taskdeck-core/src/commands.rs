use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::slot::KeyValueSlot;
use crate::store::TaskStore;
use crate::task::{ItemId, SubtaskFields, TaskFields};

/// One user interaction that mutates the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(TaskFields),
    EditTask {
        id: ItemId,
        fields: TaskFields,
    },
    DeleteTask {
        id: ItemId,
    },
    AddSubtask {
        task_id: ItemId,
        fields: SubtaskFields,
    },
    EditSubtask {
        task_id: ItemId,
        subtask_id: ItemId,
        fields: SubtaskFields,
    },
    DeleteSubtask {
        task_id: ItemId,
        subtask_id: ItemId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed and was persisted; re-render.
    Changed,
    /// The target id no longer exists.
    Unchanged,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddTask(_) => "add-task",
            Action::EditTask { .. } => "edit-task",
            Action::DeleteTask { .. } => "delete-task",
            Action::AddSubtask { .. } => "add-subtask",
            Action::EditSubtask { .. } => "edit-subtask",
            Action::DeleteSubtask { .. } => "delete-subtask",
        }
    }
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

#[tracing::instrument(skip(store, action, now), fields(action = action.name()))]
pub fn dispatch<S: KeyValueSlot>(
    store: &mut TaskStore<S>,
    action: Action,
    now: DateTime<Utc>,
) -> Result<Outcome> {
    let outcome = match action {
        Action::AddTask(fields) => {
            let task = store.add_task(fields, now)?;
            info!(id = %task.id, "task created");
            Outcome::Changed
        }
        Action::EditTask { id, fields } => store.edit_task(&id, fields)?.into(),
        Action::DeleteTask { id } => store.delete_task(&id).into(),
        Action::AddSubtask { task_id, fields } => {
            store.add_subtask(&task_id, fields)?.is_some().into()
        }
        Action::EditSubtask {
            task_id,
            subtask_id,
            fields,
        } => store.edit_subtask(&task_id, &subtask_id, fields).into(),
        Action::DeleteSubtask {
            task_id,
            subtask_id,
        } => store.delete_subtask(&task_id, &subtask_id).into(),
    };

    debug!(?outcome, tasks = store.len(), "dispatched");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{Action, Outcome, dispatch};
    use crate::config::TrackerConfig;
    use crate::error::ValidationError;
    use crate::slot::MemorySlot;
    use crate::store::TaskStore;
    use crate::task::{ItemId, SubtaskFields, TaskFields};

    #[test]
    fn routes_actions_and_reports_misses() {
        let now = Utc
            .with_ymd_and_hms(2025, 3, 3, 12, 0, 0)
            .single()
            .expect("valid now");
        let mut store = TaskStore::open(MemorySlot::new(), TrackerConfig::default());

        let outcome = dispatch(&mut store, Action::AddTask(TaskFields::new("Read")), now)
            .expect("add task");
        assert_eq!(outcome, Outcome::Changed);
        let id = store.tasks()[0].id.clone();

        let outcome = dispatch(
            &mut store,
            Action::AddSubtask {
                task_id: ItemId::from("t_missing"),
                fields: SubtaskFields::new("Chapter 1", ""),
            },
            now,
        )
        .expect("unknown parent is not an error");
        assert_eq!(outcome, Outcome::Unchanged);

        let err = dispatch(
            &mut store,
            Action::AddSubtask {
                task_id: id.clone(),
                fields: SubtaskFields::new("", ""),
            },
            now,
        )
        .expect_err("empty subtask title");
        assert_eq!(err, ValidationError::EmptySubtaskTitle);

        let outcome =
            dispatch(&mut store, Action::DeleteTask { id }, now).expect("delete task");
        assert_eq!(outcome, Outcome::Changed);
        assert!(store.is_empty());
    }
}
