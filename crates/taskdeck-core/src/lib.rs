pub mod commands;
pub mod config;
pub mod datetime;
pub mod error;
pub mod forms;
pub mod slot;
pub mod store;
pub mod task;
pub mod view;

pub use commands::{Action, Outcome, dispatch};
pub use config::TrackerConfig;
pub use error::ValidationError;
pub use slot::{KeyValueSlot, MemorySlot};
pub use store::TaskStore;
pub use task::{ItemId, Subtask, SubtaskFields, Task, TaskFields};
