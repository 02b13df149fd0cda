//! Database schema initialization

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{MaintenanceStore, SCHEMA_VERSION};
use crate::core::error::{StoreError, StoreResult};

impl MaintenanceStore {
    /// Create tables if missing and check the schema version
    pub(super) fn init_schema(&mut self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            -- Schema version tracking
            CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            );

            -- AUTOINCREMENT keeps deleted ids from being handed out again
            CREATE TABLE IF NOT EXISTS maintenance_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                car TEXT NOT NULL,
                date TEXT NOT NULL,
                mileage INTEGER NOT NULL,
                type TEXT NOT NULL,
                cost REAL NOT NULL DEFAULT 0,
                notes TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_records_car ON maintenance_records(car);
            CREATE INDEX IF NOT EXISTS idx_records_date ON maintenance_records(date);
            "#,
        )?;

        let current: Option<i32> = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .optional()?
            .flatten();

        match current {
            None => {
                debug!(version = SCHEMA_VERSION, "initialized new schema");
                self.conn.execute(
                    "INSERT INTO schema_version (version) VALUES (?1)",
                    params![SCHEMA_VERSION],
                )?;
            }
            Some(v) if v > SCHEMA_VERSION => {
                return Err(StoreError::Storage(format!(
                    "database schema version {} is newer than supported version {}",
                    v, SCHEMA_VERSION
                )));
            }
            Some(v) => debug!(version = v, "schema up to date"),
        }

        Ok(())
    }
}
