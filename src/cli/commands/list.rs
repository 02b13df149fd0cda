//! `vinsight list` command - List maintenance records

use miette::Result;

use crate::cli::commands::utils::{open_store, resolve_format};
use crate::cli::output::print_records;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{RecordFilter, SortKey};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only show records for this car (exact, case-sensitive)
    #[arg(long)]
    pub car: Option<String>,

    /// Sort by field
    #[arg(long, default_value = "id")]
    pub sort: SortKey,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (store, config) = open_store(global)?;

    let filter = RecordFilter {
        car: args.car,
        sort: args.sort,
        reverse: args.reverse,
        limit: args.limit,
    };
    let records = store.list(&filter)?;

    if args.count {
        println!("{}", records.len());
        return Ok(());
    }

    let format = resolve_format(global, &config);

    if records.is_empty() && format == OutputFormat::Pretty {
        println!("No maintenance records found.");
        return Ok(());
    }

    let summary = format!("Showing {} maintenance record(s):", records.len());
    print_records(&records, format, &config, &summary)
}
