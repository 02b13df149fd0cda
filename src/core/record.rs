//! Maintenance record model and field validation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{StoreError, StoreResult};

/// Date format accepted on input and used in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single maintenance event tied to a car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Store-assigned identifier, never reused
    pub id: i64,

    /// Free-text vehicle label (e.g. "2025 BRZ")
    pub car: String,

    /// Date the service was performed
    pub date: NaiveDate,

    /// Odometer reading at time of service
    pub mileage: i64,

    /// Service category (e.g. "Oil change")
    #[serde(rename = "type")]
    pub kind: String,

    /// Cost of the service
    pub cost: f64,

    /// Free-form notes, possibly empty
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a record that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub car: String,
    /// Defaults to today's local date when `None`
    pub date: Option<NaiveDate>,
    pub mileage: i64,
    pub kind: String,
    pub cost: f64,
    pub notes: String,
}

impl NewRecord {
    /// Create a new record with the required fields, no notes and today's date
    pub fn new(car: impl Into<String>, mileage: i64, kind: impl Into<String>, cost: f64) -> Self {
        Self {
            car: car.into(),
            date: None,
            mileage,
            kind: kind.into(),
            cost,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check every required field
    pub fn validate(&self) -> StoreResult<()> {
        validate_text("car", &self.car)?;
        validate_text("type", &self.kind)?;
        validate_mileage(self.mileage)?;
        validate_cost(self.cost)?;
        Ok(())
    }
}

/// A partial update: only `Some` fields are changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub car: Option<String>,
    pub date: Option<NaiveDate>,
    pub mileage: Option<i64>,
    pub kind: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

impl RecordUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.car.is_none()
            && self.date.is_none()
            && self.mileage.is_none()
            && self.kind.is_none()
            && self.cost.is_none()
            && self.notes.is_none()
    }

    /// Check the supplied fields against the same rules as a new record
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(ref car) = self.car {
            validate_text("car", car)?;
        }
        if let Some(ref kind) = self.kind {
            validate_text("type", kind)?;
        }
        if let Some(mileage) = self.mileage {
            validate_mileage(mileage)?;
        }
        if let Some(cost) = self.cost {
            validate_cost(cost)?;
        }
        Ok(())
    }

    /// Apply the supplied fields to a record, leaving the rest untouched
    pub fn apply_to(&self, record: &mut MaintenanceRecord) {
        if let Some(ref car) = self.car {
            record.car = car.clone();
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(mileage) = self.mileage {
            record.mileage = mileage;
        }
        if let Some(ref kind) = self.kind {
            record.kind = kind.clone();
        }
        if let Some(cost) = self.cost {
            record.cost = cost;
        }
        if let Some(ref notes) = self.notes {
            record.notes = notes.clone();
        }
    }
}

fn validate_text(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn validate_mileage(mileage: i64) -> StoreResult<()> {
    if mileage < 0 {
        return Err(StoreError::validation(format!(
            "mileage must be non-negative, got {}",
            mileage
        )));
    }
    Ok(())
}

fn validate_cost(cost: f64) -> StoreResult<()> {
    if !cost.is_finite() {
        return Err(StoreError::validation(format!("cost must be a number, got {}", cost)));
    }
    if cost < 0.0 {
        return Err(StoreError::validation(format!(
            "cost must be non-negative, got {}",
            cost
        )));
    }
    Ok(())
}

/// Map negative zero to zero so it never renders as `-0.00`
pub fn normalize_cost(cost: f64) -> f64 {
    cost + 0.0
}

/// Parse an odometer reading such as `4500` or `45,000`
///
/// Commas are only accepted as thousands separators.
pub fn parse_mileage(s: &str) -> StoreResult<i64> {
    let trimmed = s.trim();
    let invalid = || StoreError::validation(format!("mileage must be a whole number, got '{}'", s));

    let cleaned = if trimmed.contains(',') {
        let mut groups = trimmed.split(',');
        let head = groups.next().unwrap_or_default();
        let head_digits = head.strip_prefix('-').unwrap_or(head);
        let well_formed = (1..=3).contains(&head_digits.len())
            && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(invalid());
        }
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    };

    let mileage: i64 = cleaned.parse().map_err(|_| invalid())?;
    validate_mileage(mileage)?;
    Ok(mileage)
}

/// Parse a cost such as `89.99` or `$89.99`
pub fn parse_cost(s: &str) -> StoreResult<f64> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cost: f64 = trimmed
        .parse()
        .map_err(|_| StoreError::validation(format!("cost must be a decimal number, got '{}'", s)))?;
    validate_cost(cost)?;
    Ok(normalize_cost(cost))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        StoreError::validation(format!("invalid date format '{}'. Use YYYY-MM-DD", s))
    })
}
