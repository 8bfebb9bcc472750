//! Completion log export.
//!
//! Writes the completion log to CSV (header `id,task_id,completion_date,comment`)
//! or to a pretty-printed JSON array. Without an explicit output path the file
//! is `task_logs.csv` / `task_logs.json` in the working directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chorelog::libs::export::{ExportFormat, Exporter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&[])?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::CompletionLogEntry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_STEM: &str = "task_logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, one row per completion
    #[default]
    Csv,

    /// JSON array of completion records
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_EXPORT_STEM, format.extension())));

        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `entries` to the output path, replacing any existing file.
    pub fn export(&self, entries: &[CompletionLogEntry]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(entries),
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(entries)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
                Ok(())
            }
        }
    }

    fn export_csv(&self, entries: &[CompletionLogEntry]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;

        // serialize() only emits the header alongside the first record
        if entries.is_empty() {
            writer.write_record(["id", "task_id", "completion_date", "comment"])?;
        }
        for entry in entries {
            writer.serialize(entry)?;
        }

        writer.flush()?;
        Ok(())
    }
}
