//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the database location
pub const DB_ENV_VAR: &str = "VINSIGHT_DB";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "VINSIGHT_CONFIG";

/// Database file name used when nothing else is configured
const DEFAULT_DB_FILE: &str = "maintenance.db";

/// VinSight configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Default output format for list/search/show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Unit shown after mileage values (e.g. "mi", "km")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<String>,

    /// Symbol shown before costs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. User config file (~/.config/vinsight/config.yaml or $VINSIGHT_CONFIG)
        if let Some(path) = Self::config_path() {
            if let Some(file_config) = Self::load_file(&path) {
                config.merge(file_config);
            }
        }

        // 3. Environment variables
        if let Ok(db) = std::env::var(DB_ENV_VAR) {
            if !db.is_empty() {
                config.database = Some(PathBuf::from(db));
            }
        }

        config
    }

    /// Read one config file; missing or broken files are skipped
    fn load_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config file, ignoring it");
                return None;
            }
        };

        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config file, ignoring it");
                None
            }
        }
    }

    /// Get the path to the user config file
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        directories::ProjectDirs::from("", "", "vinsight")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.distance_unit.is_some() {
            self.distance_unit = other.distance_unit;
        }
        if other.currency_symbol.is_some() {
            self.currency_symbol = other.currency_symbol;
        }
    }

    /// Resolve the database path, preferring an explicit override
    pub fn database_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(ref path) = self.database {
            return path.clone();
        }
        directories::ProjectDirs::from("", "", "vinsight")
            .map(|dirs| dirs.data_dir().join(DEFAULT_DB_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Get the distance unit label
    pub fn distance_unit(&self) -> &str {
        self.distance_unit.as_deref().unwrap_or("mi")
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.distance_unit(), "mi");
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            distance_unit: Some("mi".to_string()),
            currency_symbol: Some("$".to_string()),
            ..Default::default()
        };
        base.merge(Config {
            distance_unit: Some("km".to_string()),
            ..Default::default()
        });
        assert_eq!(base.distance_unit(), "km");
        assert_eq!(base.currency_symbol(), "$");
    }

    #[test]
    fn test_database_path_precedence() {
        let config = Config {
            database: Some(PathBuf::from("/from/config.db")),
            ..Default::default()
        };
        assert_eq!(
            config.database_path(Some(Path::new("/from/flag.db"))),
            PathBuf::from("/from/flag.db")
        );
        assert_eq!(config.database_path(None), PathBuf::from("/from/config.db"));

        let fallback = Config::default().database_path(None);
        assert!(fallback.ends_with(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_load_file_reads_yaml() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "distance_unit: km\ncurrency_symbol: \"€\"\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.distance_unit(), "km");
        assert_eq!(config.currency_symbol(), "€");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_load_file_skips_invalid_yaml() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "distance_unit: [unclosed").unwrap();
        assert!(Config::load_file(&path).is_none());
        assert!(Config::load_file(&tmp.path().join("missing.yaml")).is_none());
    }
}
