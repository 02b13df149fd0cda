//! Core module - record model, storage and configuration

pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use record::{MaintenanceRecord, NewRecord, RecordUpdate};
pub use store::{DeleteReport, MaintenanceStore, RecordFilter, SearchQuery, SortKey};
