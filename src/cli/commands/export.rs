//! `vinsight export` command - Write all records to a CSV file

use console::style;
use miette::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use crate::cli::commands::utils::open_store;
use crate::cli::output::write_csv;
use crate::cli::GlobalOpts;
use crate::core::StoreError;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file name
    #[arg(long, default_value = "maintenance_export.csv")]
    pub file: PathBuf,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let (store, _config) = open_store(global)?;

    let records = store.all_by_date()?;
    if records.is_empty() {
        println!("No records to export.");
        return Ok(());
    }

    let file = File::create(&args.file).map_err(StoreError::from)?;
    write_csv(&records, BufWriter::new(file))?;

    info!(path = %args.file.display(), count = records.len(), "exported records");

    if !global.quiet {
        println!(
            "{} Exported {} record(s) to {}",
            style("✓").green(),
            records.len(),
            style(args.file.display()).cyan()
        );
    }

    Ok(())
}
