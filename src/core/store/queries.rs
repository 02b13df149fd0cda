//! Read-only queries over stored records

use rusqlite::ToSql;
use tracing::debug;

use super::{record_from_row, MaintenanceStore, RecordFilter, SearchQuery, RECORD_COLUMNS};
use crate::core::error::StoreResult;
use crate::core::record::{MaintenanceRecord, DATE_FORMAT};

impl MaintenanceStore {
    /// List records, optionally limited to one car
    ///
    /// Ordered by ascending id unless the filter asks for another sort.
    pub fn list(&self, filter: &RecordFilter) -> StoreResult<Vec<MaintenanceRecord>> {
        let mut sql = format!("SELECT {} FROM maintenance_records WHERE 1=1", RECORD_COLUMNS);
        let mut params_vec: Vec<Box<dyn ToSql>> = vec![];

        if let Some(ref car) = filter.car {
            sql.push_str(" AND car = ?");
            params_vec.push(Box::new(car.clone()));
        }

        sql.push_str(" ORDER BY ");
        sql.push_str(&filter.sort.order_by(filter.reverse));

        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        self.query_records(&sql, params_vec)
    }

    /// Find records matching every supplied search criterion
    ///
    /// Ordered by service date, then id.
    pub fn search(&self, query: &SearchQuery) -> StoreResult<Vec<MaintenanceRecord>> {
        let mut sql = format!("SELECT {} FROM maintenance_records WHERE 1=1", RECORD_COLUMNS);
        let mut params_vec: Vec<Box<dyn ToSql>> = vec![];

        if let Some(min) = query.min_mileage {
            sql.push_str(" AND mileage >= ?");
            params_vec.push(Box::new(min));
        }

        if let Some(max) = query.max_mileage {
            sql.push_str(" AND mileage <= ?");
            params_vec.push(Box::new(max));
        }

        // ISO dates compare correctly as text
        if let Some(after) = query.after {
            sql.push_str(" AND date > ?");
            params_vec.push(Box::new(after.format(DATE_FORMAT).to_string()));
        }

        if let Some(before) = query.before {
            sql.push_str(" AND date < ?");
            params_vec.push(Box::new(before.format(DATE_FORMAT).to_string()));
        }

        sql.push_str(" ORDER BY date ASC, id ASC");

        // SQLite's lower() only folds ASCII, so text criteria are matched here
        let car = query.car.as_deref().map(str::to_lowercase);
        let kind = query.kind.as_deref().map(str::to_lowercase);
        let notes = query.notes_contains.as_deref().map(str::to_lowercase);

        let mut records = self.query_records(&sql, params_vec)?;
        records.retain(|r| {
            contains_folded(&r.car, car.as_deref())
                && contains_folded(&r.kind, kind.as_deref())
                && contains_folded(&r.notes, notes.as_deref())
        });
        Ok(records)
    }

    /// Every record ordered by service date, then id
    pub fn all_by_date(&self) -> StoreResult<Vec<MaintenanceRecord>> {
        let sql = format!(
            "SELECT {} FROM maintenance_records ORDER BY date ASC, id ASC",
            RECORD_COLUMNS
        );
        self.query_records(&sql, vec![])
    }

    fn query_records(
        &self,
        sql: &str,
        params_vec: Vec<Box<dyn ToSql>>,
    ) -> StoreResult<Vec<MaintenanceRecord>> {
        debug!(sql, params = params_vec.len(), "querying records");

        let mut stmt = self.conn.prepare(sql)?;
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();

        let records = stmt
            .query_map(params_refs.as_slice(), record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}

/// Case-insensitive substring match; `None` matches everything
fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}
