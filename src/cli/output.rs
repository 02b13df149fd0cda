//! Record rendering for list, search and show output

use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_cost, format_mileage, truncate_str};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::StoreResult;
use crate::core::record::{MaintenanceRecord, DATE_FORMAT};

/// CSV header shared by `--format csv` and `export`
pub const CSV_HEADER: [&str; 7] = ["id", "date", "car", "mileage", "type", "cost", "notes"];

/// Write records as CSV with a header row
pub fn write_csv<W: Write>(records: &[MaintenanceRecord], writer: W) -> StoreResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        wtr.write_record([
            r.id.to_string(),
            r.date.format(DATE_FORMAT).to_string(),
            r.car.clone(),
            r.mileage.to_string(),
            r.kind.clone(),
            format!("{:.2}", r.cost),
            r.notes.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a list of records in the requested format
///
/// `summary` is the pretty-format heading, e.g. "Showing 3 maintenance record(s):".
pub fn print_records(
    records: &[MaintenanceRecord],
    format: OutputFormat,
    config: &Config,
    summary: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&records).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            write_csv(records, io::stdout().lock())?;
        }
        OutputFormat::Tsv => {
            println!("{}", CSV_HEADER.join("\t"));
            for r in records {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
                    r.id,
                    r.date.format(DATE_FORMAT),
                    r.car,
                    r.mileage,
                    r.kind,
                    r.cost,
                    r.notes.replace(['\t', '\n'], " ")
                );
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["ID", "Date", "Car", "Mileage", "Type", "Cost", "Notes"]);
            for r in records {
                builder.push_record([
                    r.id.to_string(),
                    r.date.format(DATE_FORMAT).to_string(),
                    r.car.clone(),
                    format_mileage(r.mileage, config.distance_unit()),
                    r.kind.clone(),
                    format_cost(r.cost, config.currency_symbol()),
                    truncate_str(&r.notes, 40),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Id => {
            for r in records {
                println!("{}", r.id);
            }
        }
        OutputFormat::Pretty | OutputFormat::Auto => {
            println!("{}", style(summary).bold());
            for r in records {
                print_record_line(r, config);
            }
        }
    }

    Ok(())
}

/// Compact multi-line layout used by `list` and `search`
fn print_record_line(r: &MaintenanceRecord, config: &Config) {
    let id_str = format!("#{}", r.id);
    println!(
        "{} | {} | {} | {}",
        style(format!("{:<4}", id_str)).cyan(),
        r.date.format(DATE_FORMAT),
        style(&r.car).yellow(),
        format_mileage(r.mileage, config.distance_unit())
    );
    println!(
        "     {} - {}",
        r.kind,
        format_cost(r.cost, config.currency_symbol())
    );
    if !r.notes.is_empty() {
        println!("     Notes: {}", r.notes);
    }
    println!();
}

/// Render one record in full
pub fn print_record_detail(r: &MaintenanceRecord, format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(r).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(r).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            println!("{}", r.id);
        }
        OutputFormat::Csv | OutputFormat::Tsv | OutputFormat::Md => {
            print_records(std::slice::from_ref(r), format, config, "")?;
        }
        OutputFormat::Pretty | OutputFormat::Auto => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(r.id).cyan());
            println!("{}: {}", style("Car").bold(), style(&r.car).yellow());
            println!("{}: {}", style("Date").bold(), r.date.format(DATE_FORMAT));
            println!(
                "{}: {}",
                style("Mileage").bold(),
                format_mileage(r.mileage, config.distance_unit())
            );
            println!("{}: {}", style("Type").bold(), r.kind);
            println!(
                "{}: {}",
                style("Cost").bold(),
                format_cost(r.cost, config.currency_symbol())
            );
            println!("{}", style("─".repeat(60)).dim());

            if !r.notes.is_empty() {
                println!();
                println!("{}", style("Notes:").bold());
                println!("{}", r.notes);
                println!("{}", style("─".repeat(60)).dim());
            }

            println!(
                "{}: {} | {}: {}",
                style("Created").dim(),
                r.created_at.format("%Y-%m-%d %H:%M"),
                style("Updated").dim(),
                r.updated_at.format("%Y-%m-%d %H:%M")
            );
        }
    }

    Ok(())
}
