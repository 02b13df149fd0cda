//! `vinsight config` command - Configuration management
//!
//! View and modify the user configuration file.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::core::config::{CONFIG_ENV_VAR, DB_ENV_VAR};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset (remove) a configuration value
    Unset(UnsetArgs),

    /// Show paths to the config file and database
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g., database, distance_unit)
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("database", "Path to the SQLite database file"),
    (
        "default_format",
        "Default output format (pretty, json, yaml, tsv, csv, md, id)",
    ),
    ("distance_unit", "Unit shown after mileage values (default: mi)"),
    ("currency_symbol", "Symbol shown before costs (default: $)"),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Unset(args) => run_unset(args),
        ConfigCommands::Path => run_path(global),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = Config::load();

    if let Some(key) = &args.key {
        check_key(key)?;
        return match get_config_value(&config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    for (key, _) in VALID_KEYS {
        let value = get_config_value(&config, key)
            .map(|v| style(v).yellow().to_string())
            .unwrap_or_else(|| style("(not set)").dim().to_string());
        println!("{}: {}", style(key).bold(), value);
    }

    Ok(())
}

fn run_set(args: SetArgs) -> Result<()> {
    check_key(&args.key)?;
    let path = config_file_path()?;
    let mut config = read_config_file(&path)?;

    match args.key.as_str() {
        "database" => config.database = Some(PathBuf::from(&args.value)),
        "default_format" => config.default_format = Some(args.value.clone()),
        "distance_unit" => config.distance_unit = Some(args.value.clone()),
        "currency_symbol" => config.currency_symbol = Some(args.value.clone()),
        _ => unreachable!("key checked above"),
    }

    write_config_file(&path, &config)?;
    println!(
        "{} Set {} = {}",
        style("✓").green(),
        style(&args.key).cyan(),
        style(&args.value).yellow()
    );
    Ok(())
}

fn run_unset(args: UnsetArgs) -> Result<()> {
    check_key(&args.key)?;
    let path = config_file_path()?;
    let mut config = read_config_file(&path)?;

    match args.key.as_str() {
        "database" => config.database = None,
        "default_format" => config.default_format = None,
        "distance_unit" => config.distance_unit = None,
        "currency_symbol" => config.currency_symbol = None,
        _ => unreachable!("key checked above"),
    }

    write_config_file(&path, &config)?;
    println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unavailable)".to_string());
    println!("{}: {}", style("Config").bold(), config_path);
    println!(
        "{}: {}",
        style("Database").bold(),
        config.database_path(global.db.as_deref()).display()
    );
    println!();
    println!(
        "{}",
        style(format!(
            "Override with --db, ${} or ${}",
            DB_ENV_VAR, CONFIG_ENV_VAR
        ))
        .dim()
    );
    Ok(())
}

fn run_keys() -> Result<()> {
    for (key, description) in VALID_KEYS {
        println!("{:<18} {}", style(key).cyan(), description);
    }
    Ok(())
}

fn check_key(key: &str) -> Result<()> {
    if VALID_KEYS.iter().any(|(k, _)| *k == key) {
        Ok(())
    } else {
        Err(miette::miette!(
            help = "run `vinsight config keys` to list valid keys",
            "Unknown configuration key '{}'",
            key
        ))
    }
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "database" => config.database.as_ref().map(|p| p.display().to_string()),
        "default_format" => config.default_format.clone(),
        "distance_unit" => config.distance_unit.clone(),
        "currency_symbol" => config.currency_symbol.clone(),
        _ => None,
    }
}

fn config_file_path() -> Result<PathBuf> {
    Config::config_path().ok_or_else(|| miette::miette!("Could not determine config directory"))
}

fn read_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).into_diagnostic()?;
    serde_yml::from_str(&contents).into_diagnostic()
}

fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(config).into_diagnostic()?;
    fs::write(path, yaml).into_diagnostic()?;
    Ok(())
}
