//! Declarative task list used to seed an empty database.
//!
//! The seed file is TOML with one `[[tasks]]` table per task:
//!
//! ```toml
//! [[tasks]]
//! name = "Pay rent"
//! recurrence = "monthly"
//! start_date = "2024-01-31"
//!
//! [[tasks]]
//! id = 10
//! name = "Renew passport"
//! due_date = 2024-06-01
//! notes = "Bring two photos"
//! ```
//!
//! `recurrence` defaults to `one-time`, `start_date` to the day of seeding and
//! `notes` to empty. Dates may be quoted strings or bare TOML dates. Entries
//! are converted independently: a bad date or recurrence rejects that entry
//! only.

use super::error::{parse_date, TaskError};
use super::recurrence::Recurrence;
use super::task::NewTask;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    tasks: Vec<SeedEntry>,
}

/// Text of a date field written either as `"2024-01-31"` or as a TOML date.
fn date_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        toml::Value::Datetime(datetime) => datetime.to_string(),
        other => other.to_string(),
    }
}

/// One `[[tasks]]` table, as written.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub id: Option<i64>,
    pub name: String,
    pub recurrence: Option<String>,
    start_date: Option<toml::Value>,
    due_date: Option<toml::Value>,
    pub notes: Option<String>,
}

impl SeedEntry {
    pub fn to_new_task(&self) -> Result<NewTask, TaskError> {
        let recurrence = match &self.recurrence {
            Some(tag) => tag.parse::<Recurrence>()?,
            None => Recurrence::default(),
        };
        let start_date = self.start_date.as_ref().map(|d| parse_date("start_date", &date_text(d))).transpose()?;
        let due_date = self.due_date.as_ref().map(|d| parse_date("due_date", &date_text(d))).transpose()?;

        Ok(NewTask {
            id: self.id,
            name: self.name.clone(),
            recurrence,
            start_date,
            due_date,
            notes: Some(self.notes.clone().unwrap_or_default()),
        })
    }
}

/// Parsed seed file: accepted tasks plus rejected entries by name.
#[derive(Debug, Default, Clone)]
pub struct SeedList {
    pub tasks: Vec<NewTask>,
    pub rejected: Vec<(String, TaskError)>,
}

impl SeedList {
    pub fn parse(content: &str) -> Result<SeedList> {
        let file: SeedFile = toml::from_str(content)?;
        let mut list = SeedList::default();

        for entry in file.tasks {
            match entry.to_new_task() {
                Ok(task) => list.tasks.push(task),
                Err(error) => {
                    tracing::warn!(name = %entry.name, %error, "seed entry rejected");
                    list.rejected.push((entry.name, error));
                }
            }
        }

        Ok(list)
    }

    /// Loads `path`; a missing file is an empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SeedList> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no seed file");
            return Ok(SeedList::default());
        }

        Self::parse(&fs::read_to_string(path)?)
    }
}
