//! VinSight: vehicle maintenance tracker
//!
//! A small CLI for recording maintenance events (car, date, mileage, type,
//! cost, notes) in a local SQLite database.

pub mod cli;
pub mod core;
