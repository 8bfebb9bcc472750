//! Task records as stored, created and displayed.

use super::error::{parse_date, TaskError};
use super::recurrence::Recurrence;
use super::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked task with its current due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub recurrence: Recurrence,
    /// Anchor for recurrence computation.
    pub start_date: NaiveDate,
    /// Next (or only) date the task is due; advanced by rollover.
    pub due_date: NaiveDate,
    /// The current due-date instance has been completed.
    pub completed: bool,
    pub notes: String,
}

/// A task row exactly as the store returned it, dates still unparsed.
///
/// Parsing happens in the core so a corrupt row surfaces as a per-task error
/// instead of failing the whole query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub name: String,
    pub recurrence: String,
    pub start_date: String,
    pub due_date: String,
    pub completed: bool,
    pub notes: String,
}

impl TryFrom<&TaskRow> for Task {
    type Error = TaskError;

    fn try_from(row: &TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: row.id,
            name: row.name.clone(),
            recurrence: row.recurrence.parse()?,
            start_date: parse_date("start_date", &row.start_date)?,
            due_date: parse_date("due_date", &row.due_date)?,
            completed: row.completed,
            notes: row.notes.clone(),
        })
    }
}

/// Input for creating a task, from the seed file or an interactive add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Explicit id from a seed entry; assigned by the manager when absent.
    pub id: Option<i64>,
    pub name: String,
    pub recurrence: Recurrence,
    /// Defaults to today.
    pub start_date: Option<NaiveDate>,
    /// Only meaningful for one-time tasks.
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewTask {
    pub fn new(name: &str, recurrence: Recurrence) -> Self {
        NewTask {
            name: name.to_string(),
            recurrence,
            ..Default::default()
        }
    }

    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Recurring tasks always start due on their start date, so an explicit
    /// due date has no effect.
    pub fn ignores_due_date(&self) -> bool {
        self.due_date.is_some() && self.recurrence.is_recurring()
    }
}

/// A valid task with its status for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedTask {
    pub task: Task,
    pub status: Status,
    pub last_completed: Option<NaiveDate>,
}

/// A stored task that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTask {
    pub id: i64,
    pub name: String,
    pub notes: String,
    pub error: TaskError,
}

/// One line of a task listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEntry {
    Valid(ClassifiedTask),
    Invalid(InvalidTask),
}

impl TaskEntry {
    pub fn id(&self) -> i64 {
        match self {
            TaskEntry::Valid(classified) => classified.task.id,
            TaskEntry::Invalid(invalid) => invalid.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TaskEntry::Valid(classified) => &classified.task.name,
            TaskEntry::Invalid(invalid) => &invalid.name,
        }
    }

    pub fn as_valid(&self) -> Option<&ClassifiedTask> {
        match self {
            TaskEntry::Valid(classified) => Some(classified),
            TaskEntry::Invalid(_) => None,
        }
    }
}

/// Append-only completion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionLogEntry {
    pub id: i64,
    pub task_id: i64,
    pub completion_date: String,
    pub comment: String,
}

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent log entry was removed and its task reopened.
    Reverted { task_id: i64 },
    NothingToUndo,
}
