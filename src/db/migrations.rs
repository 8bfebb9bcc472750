//! Database schema migration management and versioning.
//!
//! Keeps a `migrations` table recording every applied schema version and
//! applies pending versions in order when a database is opened.
//!
//! ## Features
//!
//! - **Version Tracking**: Maintains records of applied migrations
//! - **Automatic Application**: Runs pending migrations during database initialization
//! - **Transaction Safety**: All pending migrations run within one transaction
//! - **History Tracking**: Audit trail of schema changes
//!
//! ## Usage
//!
//! ```rust
//! use chorelog::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    /// Creates a manager with all registered migrations.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all schema versions in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: tasks and the completion log
        self.add_migration(1, "create_tasks_and_completion_log", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        due_date TEXT NOT NULL,
        recurrence TEXT NOT NULL DEFAULT 'one-time',
        start_date TEXT NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        notes TEXT NOT NULL DEFAULT ''
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS completion_log (
        log_id INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id INTEGER NOT NULL,
        completion_date TEXT NOT NULL,
        comment TEXT NOT NULL DEFAULT '',
        FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
    )",
                [],
            )?;

            Ok(())
        });

        // Version 2: per-task log lookups (last completion, cascade deletes)
        self.add_migration(2, "index_completion_log_task_id", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_completion_log_task_id ON completion_log(task_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    ///
    /// All pending migrations share one transaction; a failure rolls back the
    /// whole batch and leaves the previous version in place. A database
    /// written by a newer release is refused rather than touched.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        if current_version > self.latest_version() {
            msg_bail_anyhow!(Message::DatabaseNewerThanApp(current_version, self.latest_version()));
        }
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 for a fresh database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Applied migrations as (version, name, applied_at), ordered by version.
    /// Empty for a database that has never been migrated.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if self.get_current_version(conn)? == 0 {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Highest registered version.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version of `conn`.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// Whether `conn` is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
