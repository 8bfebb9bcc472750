//! Seed command.
//!
//! An empty database is seeded automatically on first use. This command
//! loads the list on demand, from the configured file or one given with
//! `--file`. When tasks already exist nothing is added unless `--force` is
//! passed; forced entries take fresh ids when their declared id is taken.

use crate::{
    libs::{context::AppContext, manager::local_today, messages::Message, seed::SeedList},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Seed file to load instead of the configured one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Add the entries even when tasks already exist
    #[arg(long)]
    force: bool,
}

pub fn cmd(ctx: &mut AppContext, args: SeedArgs) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => ctx.config.seed_file_path()?,
    };

    let seeds = SeedList::load(&path)?;
    for (name, error) in &seeds.rejected {
        msg_warning!(Message::SeedEntrySkipped(name.clone(), error.to_string()));
    }
    if seeds.tasks.is_empty() {
        msg_info!(Message::SeedFileEmpty(path.display().to_string()));
        return Ok(());
    }

    let today = local_today();
    let report = if args.force {
        let mut tasks = seeds.tasks.clone();
        for task in tasks.iter_mut() {
            if let Some(id) = task.id {
                if ctx.manager.exists(id)? {
                    task.id = None;
                }
            }
        }
        ctx.manager.seed(&tasks, today)?
    } else {
        match ctx.manager.seed_if_empty(&seeds.tasks, today)? {
            Some(report) => report,
            None => {
                msg_info!(Message::SeedStoreNotEmpty);
                return Ok(());
            }
        }
    };

    for (name, error) in &report.skipped {
        msg_warning!(Message::SeedEntrySkipped(name.clone(), error.to_string()));
    }
    msg_success!(Message::SeedApplied(report.added));
    Ok(())
}
