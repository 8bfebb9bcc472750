//! Recurrence rules and due-date arithmetic.
//!
//! Pure functions only: the initial due date of a new task, and the next
//! occurrence of a recurring task after its current due date. Monthly
//! recurrence is anchored on the start date's day of month and clamped to the
//! last day of shorter months, so a task anchored on the 31st lands on
//! Feb 28/29, Mar 31, Apr 30 and so on without drifting.
//!
//! ## Usage
//!
//! ```rust
//! use chorelog::libs::recurrence::{compute_next_due_date, Recurrence};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let next = compute_next_due_date(Recurrence::Monthly, start, start).unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```

use super::error::TaskError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    /// Due once; the due date never moves.
    #[default]
    OneTime,
    Daily,
    Weekly,
    /// Same day of month as the start date, clamped to the month's last day.
    Monthly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 4] = [Recurrence::OneTime, Recurrence::Daily, Recurrence::Weekly, Recurrence::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::OneTime => "one-time",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::OneTime)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "one-time" | "onetime" | "one_time" => Ok(Recurrence::OneTime),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            _ => Err(TaskError::InvalidRecurrence(s.to_string())),
        }
    }
}

/// Due date of a freshly created task.
///
/// One-time tasks use the explicit due date when given and fall back to the
/// start date; recurring tasks are first due on their start date.
pub fn compute_initial_due_date(recurrence: Recurrence, start_date: NaiveDate, explicit_due_date: Option<NaiveDate>) -> NaiveDate {
    match recurrence {
        Recurrence::OneTime => explicit_due_date.unwrap_or(start_date),
        Recurrence::Daily | Recurrence::Weekly | Recurrence::Monthly => start_date,
    }
}

/// Next occurrence strictly after `current_due_date`.
///
/// # Errors
///
/// `RecurrenceMismatch` for one-time tasks (id reported as 0; callers that know
/// the id should use [`next_due_date_for`]), `DateOutOfRange` when the result
/// is not representable.
pub fn compute_next_due_date(recurrence: Recurrence, start_date: NaiveDate, current_due_date: NaiveDate) -> Result<NaiveDate, TaskError> {
    next_due_date_for(0, recurrence, start_date, current_due_date)
}

/// [`compute_next_due_date`] reporting `id` on a recurrence mismatch.
pub fn next_due_date_for(id: i64, recurrence: Recurrence, start_date: NaiveDate, current_due_date: NaiveDate) -> Result<NaiveDate, TaskError> {
    let next = match recurrence {
        Recurrence::OneTime => return Err(TaskError::RecurrenceMismatch { id }),
        Recurrence::Daily => current_due_date.checked_add_signed(Duration::days(1)),
        Recurrence::Weekly => current_due_date.checked_add_signed(Duration::weeks(1)),
        Recurrence::Monthly => add_month_anchored(current_due_date, start_date.day()),
    };

    next.ok_or(TaskError::DateOutOfRange(current_due_date))
}

/// One calendar month after `date`, on `anchor_day` or the month's last day.
fn add_month_anchored(date: NaiveDate, anchor_day: u32) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 { (date.year().checked_add(1)?, 1) } else { (date.year(), date.month() + 1) };
    let day = anchor_day.min(days_in_month(year, month)?);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of days in the given month, from the first day of the following one.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    first_of_next.pred_opt().map(|last| last.day())
}
