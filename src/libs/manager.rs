//! Task lifecycle orchestration.
//!
//! The [`TaskManager`] owns the task lifecycle on top of a [`TaskStore`]:
//! creation with initial due dates, completion with log entries, global undo,
//! deletion, and lazy rollover of overdue recurring tasks whenever the task
//! list is queried. There is no timer; a listing is the only thing that moves
//! due dates.
//!
//! ## Rollover
//!
//! On each [`TaskManager::get_tasks_on`] call, every task that is recurring,
//! not completed and due before `today` is advanced by exactly one occurrence
//! and the new due date is persisted. A task several periods behind therefore
//! catches up over successive listings while still showing as overdue.
//!
//! ## Usage
//!
//! ```rust
//! use chorelog::db::tasks::Tasks;
//! use chorelog::libs::manager::TaskManager;
//! use chorelog::libs::recurrence::Recurrence;
//! use chorelog::libs::task::NewTask;
//! use chrono::NaiveDate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let mut manager = TaskManager::new(Tasks::open_in_memory()?);
//! let task = manager.add_on(NewTask::new("Water plants", Recurrence::Weekly), today)?;
//! manager.complete_on(task.id, "done", today)?;
//! assert_eq!(manager.last_completed_date(task.id)?, Some(today));
//! # Ok(())
//! # }
//! ```

use super::error::TaskError;
use super::export::Exporter;
use super::recurrence::{compute_initial_due_date, next_due_date_for};
use super::status::classify;
use super::task::{ClassifiedTask, CompletionLogEntry, InvalidTask, NewTask, Task, TaskEntry, TaskRow, UndoOutcome};
use crate::db::TaskStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Outcome of seeding from a declarative task list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    /// Entries rejected by the core, by task name.
    pub skipped: Vec<(String, TaskError)>,
}

pub struct TaskManager<S: TaskStore> {
    store: S,
    /// Highest id handed out this session; ids are never reused after delete.
    highest_issued_id: i64,
}

impl<S: TaskStore> TaskManager<S> {
    pub fn new(store: S) -> Self {
        TaskManager {
            store,
            highest_issued_id: 0,
        }
    }

    /// True when the store holds no tasks, i.e. on first use.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.get_all_tasks()?.is_empty())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_tasks(&mut self) -> Result<Vec<TaskEntry>> {
        self.get_tasks_on(local_today())
    }

    /// Rolls over overdue recurring tasks, then classifies every task for `today`.
    ///
    /// Rows that fail to parse or roll over become [`TaskEntry::Invalid`];
    /// store failures abort the listing.
    pub fn get_tasks_on(&mut self, today: NaiveDate) -> Result<Vec<TaskEntry>> {
        let rows = self.store.get_all_tasks()?;
        let mut entries = Vec::with_capacity(rows.len());

        for row in &rows {
            let entry = match self.refresh_row(row, today) {
                Ok(classified) => TaskEntry::Valid(classified),
                Err(e) => match e.downcast::<TaskError>() {
                    Ok(error) => {
                        tracing::warn!(task_id = row.id, %error, "task skipped in listing");
                        TaskEntry::Invalid(InvalidTask {
                            id: row.id,
                            name: row.name.clone(),
                            notes: row.notes.clone(),
                            error,
                        })
                    }
                    Err(e) => return Err(e),
                },
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    fn refresh_row(&mut self, row: &TaskRow, today: NaiveDate) -> Result<ClassifiedTask> {
        let mut task = Task::try_from(row)?;

        if !task.completed && task.recurrence.is_recurring() && task.due_date < today {
            let next = next_due_date_for(task.id, task.recurrence, task.start_date, task.due_date)?;
            self.store.update_due_date(task.id, next)?;
            tracing::debug!(task_id = task.id, from = %task.due_date, to = %next, "rolled over");
            task.due_date = next;
        }

        let status = classify(task.due_date, task.completed, today);
        let last_completed = self.store.last_completed_date(task.id)?;

        Ok(ClassifiedTask { task, status, last_completed })
    }

    /// Parsed task by id.
    pub fn get_task(&self, id: i64) -> Result<Task> {
        let row = self.store.get_task(id)?.ok_or(TaskError::TaskNotFound(id))?;
        Ok(Task::try_from(&row)?)
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.store.get_task(id)?.is_some())
    }

    /// Name of a stored task, readable even when its other fields are not.
    pub fn task_name(&self, id: i64) -> Result<Option<String>> {
        Ok(self.store.get_task(id)?.map(|row| row.name))
    }

    pub fn add(&mut self, new_task: NewTask) -> Result<Task> {
        self.add_on(new_task, local_today())
    }

    /// Creates a task; the start date defaults to `today`.
    ///
    /// # Errors
    ///
    /// `DueBeforeStart` if an explicit due date precedes the start date,
    /// `DuplicateId` if an explicit id is already taken.
    pub fn add_on(&mut self, new_task: NewTask, today: NaiveDate) -> Result<Task> {
        let start_date = new_task.start_date.unwrap_or(today);
        let due_date = compute_initial_due_date(new_task.recurrence, start_date, new_task.due_date);
        if due_date < start_date {
            return Err(TaskError::DueBeforeStart { start: start_date, due: due_date }.into());
        }

        let id = match new_task.id {
            Some(id) if self.store.get_task(id)?.is_some() => return Err(TaskError::DuplicateId(id).into()),
            Some(id) => id,
            None => self.next_id()?,
        };

        let task = Task {
            id,
            name: new_task.name.trim().to_string(),
            recurrence: new_task.recurrence,
            start_date,
            due_date,
            completed: false,
            notes: new_task.notes.unwrap_or_default(),
        };

        self.store.add_task(&task)?;
        self.highest_issued_id = self.highest_issued_id.max(id);
        tracing::debug!(task_id = id, recurrence = %task.recurrence, due = %task.due_date, "task added");

        Ok(task)
    }

    /// `max(existing ids, highest id issued this session) + 1`.
    fn next_id(&self) -> Result<i64> {
        let max_stored = self.store.get_all_tasks()?.iter().map(|row| row.id).max().unwrap_or(0);
        Ok(max_stored.max(self.highest_issued_id) + 1)
    }

    /// Adds each seed entry, collecting rejected ones instead of stopping.
    pub fn seed(&mut self, seeds: &[NewTask], today: NaiveDate) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for seed in seeds {
            match self.add_on(seed.clone(), today) {
                Ok(_) => report.added += 1,
                Err(e) => match e.downcast::<TaskError>() {
                    Ok(error) => {
                        tracing::warn!(name = %seed.name, %error, "seed entry skipped");
                        report.skipped.push((seed.name.clone(), error));
                    }
                    Err(e) => return Err(e),
                },
            }
        }

        Ok(report)
    }

    /// Seeds only when the store holds no tasks yet.
    pub fn seed_if_empty(&mut self, seeds: &[NewTask], today: NaiveDate) -> Result<Option<SeedReport>> {
        if !self.is_empty()? {
            return Ok(None);
        }

        self.seed(seeds, today).map(Some)
    }

    pub fn complete(&mut self, id: i64, comment: &str) -> Result<()> {
        self.complete_on(id, comment, local_today())
    }

    /// Marks the task completed and logs the completion dated `today`.
    ///
    /// Completing an already completed task is allowed and logs a second entry.
    pub fn complete_on(&mut self, id: i64, comment: &str, today: NaiveDate) -> Result<()> {
        let row = self.store.get_task(id)?.ok_or(TaskError::TaskNotFound(id))?;
        if row.completed {
            tracing::warn!(task_id = id, "task already completed; logging another completion");
        }

        self.store.mark_complete(id, today, comment)?;
        tracing::debug!(task_id = id, date = %today, "task completed");

        Ok(())
    }

    /// Reverts the most recent completion in the whole log.
    pub fn undo(&mut self) -> Result<UndoOutcome> {
        match self.store.undo_last_completion()? {
            Some(task_id) => {
                tracing::debug!(task_id, "completion undone");
                Ok(UndoOutcome::Reverted { task_id })
            }
            None => Ok(UndoOutcome::NothingToUndo),
        }
    }

    /// Deletes the task and its log entries. Unknown ids are a no-op and
    /// return `false`.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let deleted = self.store.delete_task(id)? > 0;
        if deleted {
            tracing::debug!(task_id = id, "task deleted");
            self.highest_issued_id = self.highest_issued_id.max(id);
        }

        Ok(deleted)
    }

    pub fn last_completed_date(&self, id: i64) -> Result<Option<NaiveDate>> {
        self.store.last_completed_date(id)
    }

    pub fn completion_log(&self) -> Result<Vec<CompletionLogEntry>> {
        self.store.completion_log()
    }

    /// Writes the completion log with `exporter`, returning the output path.
    pub fn export(&self, exporter: &Exporter) -> Result<PathBuf> {
        let entries = self.store.completion_log()?;
        exporter.export(&entries)?;
        Ok(exporter.output_path().to_path_buf())
    }
}
