//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs, completions::CompletionsArgs, config::ConfigCommands, delete::DeleteArgs,
    edit::EditArgs, export::ExportArgs, list::ListArgs, search::SearchArgs, show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "vinsight")]
#[command(author, version, about = "VinSight Maintenance Tracker")]
#[command(long_about = "Record vehicle maintenance events (car, date, mileage, type, cost, notes) in a local SQLite database.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Database file (default: platform data directory)
    #[arg(long, global = true, env = "VINSIGHT_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a maintenance record
    Add(AddArgs),

    /// List maintenance records
    List(ListArgs),

    /// Show a single record
    Show(ShowArgs),

    /// Edit a record by ID
    Edit(EditArgs),

    /// Delete one or more records by ID
    Delete(DeleteArgs),

    /// Search/filter maintenance records
    Search(SearchArgs),

    /// Export all records to CSV
    Export(ExportArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Use the configured default, otherwise pretty
    #[default]
    Auto,
    /// Human-readable layout
    Pretty,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

impl OutputFormat {
    /// Replace `Auto` with the configured default, falling back to pretty
    pub fn resolve(self, configured: Option<&str>) -> OutputFormat {
        if self != OutputFormat::Auto {
            return self;
        }
        configured
            .and_then(|s| OutputFormat::from_str(s, true).ok())
            .filter(|f| *f != OutputFormat::Auto)
            .unwrap_or(OutputFormat::Pretty)
    }
}
