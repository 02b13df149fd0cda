//! `vinsight edit` command - Update fields of an existing record

use chrono::NaiveDate;
use console::style;
use miette::Result;

use crate::cli::commands::utils::open_store;
use crate::cli::GlobalOpts;
use crate::core::record::{parse_cost, parse_date, parse_mileage, RecordUpdate};

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Record ID to edit
    #[arg(long)]
    pub id: i64,

    /// New car name
    #[arg(long)]
    pub car: Option<String>,

    /// New mileage
    #[arg(long, value_parser = parse_mileage, allow_hyphen_values = true)]
    pub mileage: Option<i64>,

    /// New service type
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// New cost
    #[arg(long, value_parser = parse_cost, allow_hyphen_values = true)]
    pub cost: Option<f64>,

    /// New date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New notes (pass "" to clear)
    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn to_update(&self) -> RecordUpdate {
        RecordUpdate {
            car: self.car.clone(),
            date: self.date,
            mileage: self.mileage,
            kind: self.kind.clone(),
            cost: self.cost,
            notes: self.notes.clone(),
        }
    }
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let (mut store, _config) = open_store(global)?;

    let record = store.edit(args.id, &args.to_update())?;

    if !global.quiet {
        println!(
            "{} Updated record {}",
            style("✓").green(),
            style(format!("#{}", record.id)).cyan()
        );
    }

    Ok(())
}
