//! Per-invocation application context.
//!
//! Built once by the CLI entry point and handed to every command: the loaded
//! configuration, the task manager over the configured database, and the
//! renderer. Nothing here is global.

use super::config::Config;
use super::manager::{local_today, SeedReport, TaskManager};
use super::messages::Message;
use super::seed::SeedList;
use super::view::View;
use crate::db::tasks::Tasks;
use crate::{msg_info, msg_warning};
use anyhow::Result;

pub struct AppContext {
    pub config: Config,
    pub manager: TaskManager<Tasks>,
    pub view: View,
}

impl AppContext {
    /// Context from the configuration in the platform data directory.
    pub fn load() -> Result<Self> {
        Self::new(Config::read()?)
    }

    /// Opens the configured database and seeds it on first use.
    ///
    /// The seed file is only read while the database is empty, so its
    /// problems are reported once rather than on every command.
    pub fn new(config: Config) -> Result<Self> {
        let mut manager = TaskManager::new(Tasks::open(config.database_path()?)?);

        if manager.is_empty()? {
            let seeds = load_seed_list(&config)?;
            let report = manager.seed(&seeds.tasks, local_today())?;
            for (name, reason) in seed_issues(&seeds, &report) {
                msg_warning!(Message::SeedEntrySkipped(name, reason));
            }
            if report.added > 0 {
                msg_info!(Message::SeedApplied(report.added));
            }
        }

        Ok(AppContext {
            view: View::new(config.color),
            config,
            manager,
        })
    }
}

/// Reads the configured seed file.
///
/// A malformed file is reported and treated as empty so that it never blocks
/// the other commands.
pub fn load_seed_list(config: &Config) -> Result<SeedList> {
    let path = config.seed_file_path()?;
    match SeedList::load(&path) {
        Ok(seeds) => Ok(seeds),
        Err(e) => {
            msg_warning!(Message::SeedFileUnreadable(e.to_string()));
            Ok(SeedList::default())
        }
    }
}

/// Entries left out of a seeding run, as `(name, reason)`: those rejected
/// while parsing the file followed by those the manager refused.
pub fn seed_issues(seeds: &SeedList, report: &SeedReport) -> Vec<(String, String)> {
    seeds
        .rejected
        .iter()
        .chain(report.skipped.iter())
        .map(|(name, error)| (name.clone(), error.to_string()))
        .collect()
}
