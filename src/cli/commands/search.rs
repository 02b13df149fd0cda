//! `vinsight search` command - Search records by several criteria
//!
//! Text criteria are case-insensitive substring matches; all criteria must
//! match for a record to be shown.

use chrono::NaiveDate;
use miette::Result;

use crate::cli::commands::utils::{open_store, resolve_format};
use crate::cli::output::print_records;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::record::{parse_date, parse_mileage};
use crate::core::{SearchQuery, StoreError};

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Filter by car substring
    #[arg(long)]
    pub car: Option<String>,

    /// Filter by maintenance type substring
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Minimum mileage (inclusive)
    #[arg(long, value_parser = parse_mileage)]
    pub min_mileage: Option<i64>,

    /// Maximum mileage (inclusive)
    #[arg(long, value_parser = parse_mileage)]
    pub max_mileage: Option<i64>,

    /// Only show records after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub after: Option<NaiveDate>,

    /// Only show records before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub before: Option<NaiveDate>,

    /// Filter by text in notes
    #[arg(long)]
    pub notes_contains: Option<String>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

impl SearchArgs {
    fn to_query(&self) -> Result<SearchQuery, StoreError> {
        if let (Some(min), Some(max)) = (self.min_mileage, self.max_mileage) {
            if min > max {
                return Err(StoreError::validation(format!(
                    "--min-mileage ({}) is greater than --max-mileage ({})",
                    min, max
                )));
            }
        }

        Ok(SearchQuery {
            car: self.car.clone(),
            kind: self.kind.clone(),
            min_mileage: self.min_mileage,
            max_mileage: self.max_mileage,
            after: self.after,
            before: self.before,
            notes_contains: self.notes_contains.clone(),
        })
    }
}

pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let query = args.to_query()?;
    let (store, config) = open_store(global)?;

    let results = store.search(&query)?;

    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    let format = resolve_format(global, &config);

    if results.is_empty() && format == OutputFormat::Pretty {
        println!("No records matched your search.");
        return Ok(());
    }

    let summary = format!("Found {} matching record(s):", results.len());
    print_records(&results, format, &config, &summary)
}
