use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::datetime::timestamp_serde;

/// Opaque task/subtask identifier.
///
/// New records get a random UUID, but any string read back from storage is
/// accepted as-is (older lists use `t_<millis>` and `s_<millis>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: ItemId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: ItemId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default, with = "timestamp_serde::option")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(with = "timestamp_serde")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Raw values from the task create/edit form. Text is trimmed when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub notes: String,
    /// A blank value means "not supplied".
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtaskFields {
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(
        title: String,
        description: String,
        notes: String,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            title,
            description,
            notes,
            deadline: Some(deadline),
            created_at: now,
            completed: false,
            subtasks: vec![],
        }
    }

    pub fn subtask(&self, id: &ItemId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    pub fn subtask_mut(&mut self, id: &ItemId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| &s.id == id)
    }
}

impl Subtask {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: ItemId::generate(),
            title,
            description,
            completed: false,
        }
    }
}

impl TaskFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// The deadline input, if the user actually typed one.
    pub fn supplied_deadline(&self) -> Option<&str> {
        self.deadline
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
    }
}

impl SubtaskFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
