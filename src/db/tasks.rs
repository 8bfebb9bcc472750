//! SQLite-backed task storage.
//!
//! Implements [`TaskStore`] over the `tasks` and `completion_log` tables.
//! Dates are written through rusqlite's chrono support (`YYYY-MM-DD` text)
//! and read back as raw strings for the core to validate.

use super::completions;
use super::db::Db;
use super::TaskStore;
use crate::libs::error::TaskError;
use crate::libs::task::{CompletionLogEntry, Task, TaskRow};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const TASK_COLUMNS: &str = "id, name, recurrence, start_date, due_date, completed, notes";
const INSERT_TASK: &str = "INSERT INTO tasks (id, name, recurrence, start_date, due_date, completed, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_DUE_DATE: &str = "UPDATE tasks SET due_date = ?2 WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Store in the platform data directory.
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn open_in_memory() -> Result<Tasks> {
        Ok(Self::from_db(Db::open_in_memory()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<TaskRow> {
        Ok(TaskRow {
            id: row.get(0)?,
            name: row.get(1)?,
            recurrence: row.get(2)?,
            start_date: row.get(3)?,
            due_date: row.get(4)?,
            completed: row.get(5)?,
            notes: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        })
    }
}

impl TaskStore for Tasks {
    fn get_all_tasks(&self) -> Result<Vec<TaskRow>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))?;
        let rows = stmt.query_map([], Self::map_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn get_task(&self, id: i64) -> Result<Option<TaskRow>> {
        let row = self
            .conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], Self::map_row)
            .optional()?;

        Ok(row)
    }

    fn add_task(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.id,
                task.name,
                task.recurrence.as_str(),
                task.start_date,
                task.due_date,
                task.completed,
                task.notes
            ],
        )?;

        Ok(())
    }

    fn mark_complete(&mut self, id: i64, completion_date: NaiveDate, comment: &str) -> Result<()> {
        let tx = self.conn.transaction()?;

        if tx.execute(UPDATE_COMPLETED, params![id, true])? == 0 {
            return Err(TaskError::TaskNotFound(id).into());
        }
        completions::append(&tx, id, completion_date, comment)?;

        tx.commit()?;
        Ok(())
    }

    fn update_due_date(&mut self, id: i64, new_due_date: NaiveDate) -> Result<()> {
        if self.conn.execute(UPDATE_DUE_DATE, params![id, new_due_date])? == 0 {
            return Err(TaskError::TaskNotFound(id).into());
        }

        Ok(())
    }

    fn delete_task(&mut self, id: i64) -> Result<usize> {
        let tx = self.conn.transaction()?;

        // Explicit even with ON DELETE CASCADE, for databases opened without the pragma
        completions::remove_for_task(&tx, id)?;
        let affected = tx.execute(DELETE_TASK, params![id])?;

        tx.commit()?;
        Ok(affected)
    }

    fn last_completed_date(&self, id: i64) -> Result<Option<NaiveDate>> {
        completions::last_completed_date(&self.conn, id)
    }

    fn undo_last_completion(&mut self) -> Result<Option<i64>> {
        let tx = self.conn.transaction()?;

        let task_id = completions::remove_latest(&tx)?;
        if let Some(task_id) = task_id {
            tx.execute(UPDATE_COMPLETED, params![task_id, false])?;
        }

        tx.commit()?;
        Ok(task_id)
    }

    fn completion_log(&self) -> Result<Vec<CompletionLogEntry>> {
        completions::fetch_all(&self.conn)
    }
}
