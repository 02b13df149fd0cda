//! `vinsight add` command - Record a maintenance event

use chrono::NaiveDate;
use console::style;
use miette::Result;

use crate::cli::commands::utils::open_store;
use crate::cli::helpers::{format_cost, format_mileage};
use crate::cli::GlobalOpts;
use crate::core::record::{parse_cost, parse_date, parse_mileage, NewRecord, DATE_FORMAT};

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Vehicle label (e.g. "2025 BRZ")
    #[arg(long)]
    pub car: String,

    /// Odometer reading at time of service
    #[arg(long, value_parser = parse_mileage, allow_hyphen_values = true)]
    pub mileage: i64,

    /// Service type (e.g. "Oil change")
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: String,

    /// Cost of the service
    #[arg(long, value_parser = parse_cost, allow_hyphen_values = true)]
    pub cost: f64,

    /// Free-form notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Service date in YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let (mut store, config) = open_store(global)?;

    let mut new_record = NewRecord::new(args.car, args.mileage, args.kind, args.cost)
        .with_notes(args.notes);
    if let Some(date) = args.date {
        new_record = new_record.with_date(date);
    }

    let record = store.add(&new_record)?;

    if global.quiet {
        println!("{}", record.id);
        return Ok(());
    }

    println!(
        "{} Added maintenance record {}",
        style("✓").green(),
        style(format!("#{}", record.id)).cyan()
    );
    println!("   Date: {}", record.date.format(DATE_FORMAT));
    println!("   Car: {}", style(&record.car).yellow());
    println!("   Mileage: {}", format_mileage(record.mileage, config.distance_unit()));
    println!("   Type: {}", record.kind);
    println!("   Cost: {}", format_cost(record.cost, config.currency_symbol()));
    if !record.notes.is_empty() {
        println!("   Notes: {}", record.notes);
    }

    Ok(())
}
