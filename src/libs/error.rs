//! Domain error types for task scheduling.
//!
//! Store and file-system failures travel as `anyhow::Error`; the variants here
//! are the per-task failures the core can name precisely. They are `Clone` so a
//! listing can carry them next to the task row that produced them.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the recurrence engine and the task lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Recurrence tag outside `one-time`, `daily`, `weekly`, `monthly`.
    #[error("Invalid recurrence: '{0}' (expected one-time, daily, weekly or monthly)")]
    InvalidRecurrence(String),

    /// A date string that does not parse as `YYYY-MM-DD`.
    #[error("Invalid date in field '{field}': '{value}'")]
    InvalidDate { field: &'static str, value: String },

    /// Operation referenced an id that is not in the store.
    #[error("Task with ID {0} not found")]
    TaskNotFound(i64),

    /// Explicit id already used by another task.
    #[error("Task ID {0} is already in use")]
    DuplicateId(i64),

    /// Next-occurrence computation requested for a one-time task.
    #[error("Task {id} is one-time and has no next occurrence")]
    RecurrenceMismatch { id: i64 },

    /// Explicit due date earlier than the start date.
    #[error("Due date {due} is earlier than start date {start}")]
    DueBeforeStart { start: NaiveDate, due: NaiveDate },

    /// Calendar arithmetic left chrono's representable range.
    #[error("Date out of range after advancing from {0}")]
    DateOutOfRange(NaiveDate),
}

/// Parses a `YYYY-MM-DD` string, naming `field` on failure.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, TaskError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TaskError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
