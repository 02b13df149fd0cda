//! Store query and result types

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// Column used to order list output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Insertion order
    #[default]
    Id,
    Date,
    Mileage,
    Cost,
}

impl SortKey {
    /// SQL ORDER BY clause for this key; `id` breaks ties
    pub(super) fn order_by(&self, reverse: bool) -> String {
        let dir = if reverse { "DESC" } else { "ASC" };
        match self {
            SortKey::Id => format!("id {}", dir),
            SortKey::Date => format!("date {dir}, id {dir}"),
            SortKey::Mileage => format!("mileage {dir}, id {dir}"),
            SortKey::Cost => format!("cost {dir}, id {dir}"),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::Date => write!(f, "date"),
            SortKey::Mileage => write!(f, "mileage"),
            SortKey::Cost => write!(f, "cost"),
        }
    }
}

/// Filter for listing records
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    /// Exact, case-sensitive match on the car label
    pub car: Option<String>,
    pub sort: SortKey,
    pub reverse: bool,
    pub limit: Option<usize>,
}

impl RecordFilter {
    /// Filter that only keeps records for one car
    pub fn for_car(car: impl Into<String>) -> Self {
        Self {
            car: Some(car.into()),
            ..Default::default()
        }
    }
}

/// Criteria for `search`; every supplied criterion must match
#[derive(Debug, Default, Clone)]
pub struct SearchQuery {
    /// Case-insensitive substring of the car label
    pub car: Option<String>,
    /// Case-insensitive substring of the service type
    pub kind: Option<String>,
    /// Inclusive lower bound
    pub min_mileage: Option<i64>,
    /// Inclusive upper bound
    pub max_mileage: Option<i64>,
    /// Only records strictly after this date
    pub after: Option<NaiveDate>,
    /// Only records strictly before this date
    pub before: Option<NaiveDate>,
    /// Case-insensitive substring of the notes
    pub notes_contains: Option<String>,
}

/// Outcome of a multi-id delete
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    /// IDs that existed and were removed
    pub deleted: Vec<i64>,
    /// IDs that did not exist
    pub not_found: Vec<i64>,
}

impl DeleteReport {
    /// True when every requested id was removed
    pub fn is_complete(&self) -> bool {
        self.not_found.is_empty()
    }
}
