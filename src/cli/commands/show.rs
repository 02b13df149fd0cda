//! `vinsight show` command - Show a single record

use miette::Result;

use crate::cli::commands::utils::{open_store, resolve_format};
use crate::cli::output::print_record_detail;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Record ID
    pub id: i64,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (store, config) = open_store(global)?;
    let record = store.get(args.id)?;
    print_record_detail(&record, resolve_format(global, &config), &config)
}
