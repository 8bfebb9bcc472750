use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "chorelog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (creating if needed) the database at `path` and applies migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Self::prepare(conn)
    }

    /// Opens the database at `path` as-is, for inspecting its schema version.
    pub fn open_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Db> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Db> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
