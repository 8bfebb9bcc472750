//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory. Every field is optional; missing values fall back
//! to the data directory (database, seed file) or the working directory
//! (export file).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chorelog::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! println!("database: {}", config.database_path()?.display());
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use super::export::{ExportFormat, Exporter};
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const SEED_FILE_NAME: &str = "tasks.toml";

fn default_color() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// SQLite database file. Defaults to `chorelog.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Declarative task list used to seed an empty database.
    /// Defaults to `tasks.toml` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Completion log export target. Defaults to `task_logs.<ext>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,

    #[serde(default)]
    pub export_format: ExportFormat,

    /// Colored status column in task tables.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Directory used for defaults; not serialized.
    #[serde(skip)]
    storage: Option<DataStorage>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            seed_file: None,
            export_path: None,
            export_format: ExportFormat::default(),
            color: default_color(),
            storage: None,
        }
    }
}

impl Config {
    /// Reads `config.json` from the data directory, or defaults when absent.
    pub fn read() -> Result<Config> {
        Self::read_in(DataStorage::new())
    }

    /// Reads the configuration kept in `storage`.
    pub fn read_in(storage: DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(&config_file_path)?;
            serde_json::from_str::<Config>(&config_str)?
        } else {
            Config::default()
        };

        config.storage = Some(storage);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = self.storage().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; returns whether one existed.
    pub fn delete(&self) -> Result<bool> {
        let config_file_path = self.storage().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn storage(&self) -> DataStorage {
        self.storage.clone().unwrap_or_default()
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => self.storage().get_path(DB_FILE_NAME),
        }
    }

    pub fn seed_file_path(&self) -> Result<PathBuf> {
        match &self.seed_file {
            Some(path) => Ok(path.clone()),
            None => self.storage().get_path(SEED_FILE_NAME),
        }
    }

    /// Exporter from configured defaults, with optional per-call overrides.
    pub fn exporter(&self, format: Option<ExportFormat>, output: Option<PathBuf>) -> Exporter {
        let format = format.unwrap_or(self.export_format);
        let output = output.or_else(|| {
            self.export_path
                .as_ref()
                .filter(|path| path.extension().map(|ext| ext == format.extension()).unwrap_or(true))
                .cloned()
        });
        Exporter::new(format, output)
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        config.database = Some(PathBuf::from(
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabasePath.to_string())
                .default(path_string(&config.database_path()?))
                .interact_text()?,
        ));

        config.seed_file = Some(PathBuf::from(
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSeedFile.to_string())
                .default(path_string(&config.seed_file_path()?))
                .interact_text()?,
        ));

        let formats = [ExportFormat::Csv, ExportFormat::Json];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportFormat.to_string())
            .items(&formats.iter().map(|f| f.extension()).collect::<Vec<_>>())
            .default(formats.iter().position(|f| *f == config.export_format).unwrap_or(0))
            .interact()?;
        config.export_format = formats[selected];

        let export_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportPath.to_string())
            .allow_empty(true)
            .default(config.export_path.as_deref().map(path_string).unwrap_or_default())
            .interact_text()?;
        config.export_path = if export_path.trim().is_empty() { None } else { Some(PathBuf::from(export_path.trim())) };

        config.color = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUseColor.to_string())
            .default(config.color)
            .interact()?;

        Ok(config)
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}
