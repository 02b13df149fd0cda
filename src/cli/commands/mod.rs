//! CLI command implementations

pub mod utils;

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod search;
pub mod show;
