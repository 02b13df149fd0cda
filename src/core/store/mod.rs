//! SQLite-backed maintenance record store
//!
//! The store is the single source of truth for maintenance records:
//! - Assigns ids on insert (never reused, even after deletion)
//! - Persists every change immediately, no batching
//! - Assumes a single writer; concurrent processes are not coordinated

mod queries;
mod schema;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::core::error::{StoreError, StoreResult};
use crate::core::record::{normalize_cost, MaintenanceRecord, NewRecord, RecordUpdate, DATE_FORMAT};

/// Current schema version; newer databases are refused
const SCHEMA_VERSION: i32 = 1;

/// How long to wait on a lock held by another process
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Column list shared by every record query
const RECORD_COLUMNS: &str =
    "id, car, date, mileage, type, cost, notes, created_at, updated_at";

/// The maintenance record store backed by SQLite
pub struct MaintenanceStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl MaintenanceStore {
    /// Open or create the store at the given database path
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        let mut store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.init_schema()?;

        debug!(path = %path.display(), "opened maintenance store");
        Ok(store)
    }

    /// Open a throwaway store that lives only in memory
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn, path: None };
        store.init_schema()?;
        Ok(store)
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a new record and return it with its assigned id
    pub fn add(&mut self, record: &NewRecord) -> StoreResult<MaintenanceRecord> {
        record.validate()?;

        let date = record.date.unwrap_or_else(|| Local::now().date_naive());
        let now = format_timestamp(Utc::now());

        self.conn.execute(
            "INSERT INTO maintenance_records (car, date, mileage, type, cost, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                record.car,
                date.format(DATE_FORMAT).to_string(),
                record.mileage,
                record.kind,
                normalize_cost(record.cost),
                record.notes,
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        info!(id, car = %record.car, kind = %record.kind, "added maintenance record");
        self.get(id)
    }

    /// Fetch a single record by id
    pub fn get(&self, id: i64) -> StoreResult<MaintenanceRecord> {
        self.find(id)?.ok_or(StoreError::NotFound { id })
    }

    /// Fetch a single record by id, `None` if it does not exist
    pub fn find(&self, id: i64) -> StoreResult<Option<MaintenanceRecord>> {
        let sql = format!(
            "SELECT {} FROM maintenance_records WHERE id = ?1",
            RECORD_COLUMNS
        );
        let record = self
            .conn
            .query_row(&sql, params![id], record_from_row)
            .optional()?;
        Ok(record)
    }

    /// Apply a partial update to an existing record
    ///
    /// Fields left as `None` keep their stored values. Nothing is written
    /// when the record is missing or the update fails validation.
    pub fn edit(&mut self, id: i64, update: &RecordUpdate) -> StoreResult<MaintenanceRecord> {
        let mut record = self.get(id)?;

        if update.is_empty() {
            return Err(StoreError::validation("no changes provided"));
        }
        update.validate()?;

        update.apply_to(&mut record);
        let now = format_timestamp(Utc::now());

        self.conn.execute(
            "UPDATE maintenance_records
             SET car = ?1, date = ?2, mileage = ?3, type = ?4, cost = ?5, notes = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                record.car,
                record.date.format(DATE_FORMAT).to_string(),
                record.mileage,
                record.kind,
                normalize_cost(record.cost),
                record.notes,
                now,
                id,
            ],
        )?;

        info!(id, "updated maintenance record");
        self.get(id)
    }

    /// Delete every existing id and report the ones that were missing
    ///
    /// Missing ids do not stop the others from being removed. Repeated ids
    /// are handled once.
    pub fn delete(&mut self, ids: &[i64]) -> StoreResult<DeleteReport> {
        let mut report = DeleteReport::default();
        let tx = self.conn.transaction()?;

        for &id in ids {
            if report.deleted.contains(&id) || report.not_found.contains(&id) {
                continue;
            }
            let removed = tx.execute("DELETE FROM maintenance_records WHERE id = ?1", params![id])?;
            if removed == 0 {
                report.not_found.push(id);
            } else {
                report.deleted.push(id);
            }
        }

        tx.commit()?;

        info!(
            deleted = report.deleted.len(),
            not_found = report.not_found.len(),
            "deleted maintenance records"
        );
        Ok(report)
    }

    /// Number of stored records
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM maintenance_records", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

/// Map a row selected with `RECORD_COLUMNS` into a record
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<MaintenanceRecord> {
    Ok(MaintenanceRecord {
        id: row.get(0)?,
        car: row.get(1)?,
        date: parse_date_column(2, row.get(2)?)?,
        mileage: row.get(3)?,
        kind: row.get(4)?,
        cost: row.get(5)?,
        notes: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        created_at: parse_datetime(row.get(7)?),
        updated_at: parse_datetime(row.get(8)?),
    })
}

fn parse_date_column(idx: usize, s: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&s, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored RFC 3339 timestamp, falling back to the epoch
fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}
