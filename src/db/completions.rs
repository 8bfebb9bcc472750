//! Completion log rows.
//!
//! Every function takes a plain `&Connection`; callers pass a `Transaction`
//! (which derefs to one) when the log change must commit together with a
//! task update.

use crate::libs::error::parse_date;
use crate::libs::task::CompletionLogEntry;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_COMPLETION: &str = "INSERT INTO completion_log (task_id, completion_date, comment) VALUES (?1, ?2, ?3)";
const SELECT_LOG: &str = "SELECT log_id, task_id, completion_date, comment FROM completion_log ORDER BY log_id";
const SELECT_LAST_FOR_TASK: &str = "SELECT completion_date FROM completion_log WHERE task_id = ?1 ORDER BY completion_date DESC, log_id DESC LIMIT 1";
const SELECT_LATEST: &str = "SELECT log_id, task_id FROM completion_log ORDER BY log_id DESC LIMIT 1";
const DELETE_BY_LOG_ID: &str = "DELETE FROM completion_log WHERE log_id = ?1";
const DELETE_FOR_TASK: &str = "DELETE FROM completion_log WHERE task_id = ?1";

pub fn append(conn: &Connection, task_id: i64, completion_date: NaiveDate, comment: &str) -> Result<i64> {
    conn.execute(INSERT_COMPLETION, params![task_id, completion_date, comment])?;
    Ok(conn.last_insert_rowid())
}

pub fn fetch_all(conn: &Connection) -> Result<Vec<CompletionLogEntry>> {
    let mut stmt = conn.prepare(SELECT_LOG)?;
    let entries = stmt
        .query_map([], |row| {
            Ok(CompletionLogEntry {
                id: row.get(0)?,
                task_id: row.get(1)?,
                completion_date: row.get(2)?,
                comment: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

pub fn last_completed_date(conn: &Connection, task_id: i64) -> Result<Option<NaiveDate>> {
    let date: Option<String> = conn.query_row(SELECT_LAST_FOR_TASK, params![task_id], |row| row.get(0)).optional()?;

    match date {
        Some(value) => Ok(Some(parse_date("completion_date", &value)?)),
        None => Ok(None),
    }
}

/// Removes the newest entry in the whole log, returning its task id.
pub fn remove_latest(conn: &Connection) -> Result<Option<i64>> {
    let latest: Option<(i64, i64)> = conn.query_row(SELECT_LATEST, [], |row| Ok((row.get(0)?, row.get(1)?))).optional()?;

    match latest {
        Some((log_id, task_id)) => {
            conn.execute(DELETE_BY_LOG_ID, params![log_id])?;
            Ok(Some(task_id))
        }
        None => Ok(None),
    }
}

pub fn remove_for_task(conn: &Connection, task_id: i64) -> Result<usize> {
    Ok(conn.execute(DELETE_FOR_TASK, params![task_id])?)
}
