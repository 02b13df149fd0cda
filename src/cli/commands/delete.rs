//! `vinsight delete` command - Remove records by ID

use console::style;
use miette::Result;
use tracing::debug;

use crate::cli::commands::utils::open_store;
use crate::cli::GlobalOpts;
use crate::core::StoreError;

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Record ID(s) to delete
    #[arg(long = "id", value_name = "ID", num_args = 1.., required = true)]
    pub ids: Vec<i64>,
}

pub fn run(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let (mut store, _config) = open_store(global)?;

    let report = store.delete(&args.ids)?;

    if report.deleted.is_empty() {
        let err = if let [id] = report.not_found[..] {
            StoreError::NotFound { id }
        } else {
            StoreError::NotFoundMany {
                ids: report.not_found,
            }
        };
        return Err(err.into());
    }

    if !report.is_complete() {
        debug!(ids = ?report.not_found, "some records were not found");
    }

    if !global.quiet {
        for id in &report.deleted {
            println!(
                "{} Deleted record {}",
                style("✓").green(),
                style(format!("#{}", id)).cyan()
            );
        }
    }

    // Missing ids are part of the result, so they print even in quiet mode
    for id in &report.not_found {
        println!("{} No record found with ID {}", style("!").yellow(), id);
    }

    Ok(())
}
