//! Persistence layer for chorelog.
//!
//! SQLite storage for tasks and their completion log, with a versioned
//! migration system. The task manager talks to storage only through the
//! [`TaskStore`] trait, so the core never sees SQL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chorelog::db::{tasks::Tasks, TaskStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = Tasks::open("chorelog.db")?;
//! for row in store.get_all_tasks()? {
//!     println!("{} due {}", row.name, row.due_date);
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{CompletionLogEntry, Task, TaskRow};
use anyhow::Result;
use chrono::NaiveDate;

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Completion log queries.
pub mod completions;

/// SQLite implementation of [`TaskStore`].
pub mod tasks;

/// Storage contract consumed by the task manager.
///
/// Mutations that touch both tables (`mark_complete`, `delete_task`,
/// `undo_last_completion`) must succeed or fail as one unit.
pub trait TaskStore {
    /// Every stored task in id order, dates unparsed.
    fn get_all_tasks(&self) -> Result<Vec<TaskRow>>;

    /// Single task row, if present.
    fn get_task(&self, id: i64) -> Result<Option<TaskRow>>;

    /// Inserts a new task; the id is supplied by the caller.
    fn add_task(&mut self, task: &Task) -> Result<()>;

    /// Sets `completed` and appends a log entry atomically.
    fn mark_complete(&mut self, id: i64, completion_date: NaiveDate, comment: &str) -> Result<()>;

    fn update_due_date(&mut self, id: i64, new_due_date: NaiveDate) -> Result<()>;

    /// Removes the task and its log entries. Returns rows removed from `tasks`.
    fn delete_task(&mut self, id: i64) -> Result<usize>;

    /// Latest completion date logged for the task.
    fn last_completed_date(&self, id: i64) -> Result<Option<NaiveDate>>;

    /// Removes the globally most recent log entry, reopens its task and
    /// returns the task id; `None` when the log is empty.
    fn undo_last_completion(&mut self) -> Result<Option<i64>>;

    /// All log entries in insertion order.
    fn completion_log(&self) -> Result<Vec<CompletionLogEntry>>;
}
