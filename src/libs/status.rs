//! Display status of a task relative to a given day.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Derived status; only the `completed` flag is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Completed,
    /// Past due and not completed, `days` whole days late (always >= 1).
    Overdue { days: i64 },
    DueToday,
    /// Due tomorrow.
    Upcoming,
    /// Due after tomorrow.
    Pending,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Overdue { .. } => "Overdue",
            Status::DueToday => "Due Today",
            Status::Upcoming => "Upcoming",
            Status::Pending => "Pending",
        }
    }

    pub fn days_overdue(&self) -> Option<i64> {
        match self {
            Status::Overdue { days } => Some(*days),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Overdue { days } => write!(f, "{} ({} {})", self.label(), days, if *days == 1 { "day" } else { "days" }),
            _ => f.write_str(self.label()),
        }
    }
}

/// Classifies a task. Rules apply in order: completed, past due, today,
/// tomorrow, later.
pub fn classify(due_date: NaiveDate, completed: bool, today: NaiveDate) -> Status {
    if completed {
        return Status::Completed;
    }

    if due_date < today {
        Status::Overdue {
            days: (today - due_date).num_days(),
        }
    } else if due_date == today {
        Status::DueToday
    } else if today.checked_add_signed(Duration::days(1)) == Some(due_date) {
        Status::Upcoming
    } else {
        Status::Pending
    }
}
