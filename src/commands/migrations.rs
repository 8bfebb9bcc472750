//! Schema inspection command.
//!
//! Opens the configured database without migrating it, so `status` reports
//! the version as found on disk.

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::open_without_migrations(Config::read()?.database_path()?)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            msg_print!(Message::DatabaseVersion(version));

            if version > manager.latest_version() {
                msg_warning!(Message::DatabaseNewerThanApp(version, manager.latest_version()));
            } else if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
