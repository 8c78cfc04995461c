//! Configuration loading and database path resolution
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or malformed config file is never fatal: it is logged and the
//! compiled defaults apply.

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the venue database file
pub const DATABASE_ENV: &str = "FOODPICK_DATABASE";

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5730;

/// Maximum venues returned by the list endpoint
pub const DEFAULT_LIST_CAP: usize = 1000;

/// Entries in the statistics top-rated list
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub list_cap: Option<usize>,
    pub page_size: Option<usize>,
    pub top_limit: Option<usize>,
    pub exclude_unrated_from_mean: Option<bool>,
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Load the explicit file, else the platform default file, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => path,
            None => {
                info!("No config directory on this platform, using defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            if explicit.is_some() {
                warn!("Config file not found: {}, using defaults", path.display());
            } else {
                info!("No config file at {}, using defaults", path.display());
            }
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config file: {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Query-behaviour settings with compiled defaults filled in
    pub fn service_settings(&self) -> ServiceSettings {
        let defaults = ServiceSettings::default();
        ServiceSettings {
            list_cap: self.list_cap.unwrap_or(defaults.list_cap),
            page_size: self.page_size.unwrap_or(defaults.page_size).max(1),
            top_limit: self.top_limit.unwrap_or(defaults.top_limit),
            exclude_unrated_from_mean: self
                .exclude_unrated_from_mean
                .unwrap_or(defaults.exclude_unrated_from_mean),
        }
    }
}

/// Tunables for the query endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Maximum venues returned by the list endpoint
    pub list_cap: usize,
    /// Page size of the explore view
    pub page_size: usize,
    /// Entries in the statistics top-rated list
    pub top_limit: usize,
    /// Skip zero ratings when averaging (for datasets where 0 means "unrated")
    pub exclude_unrated_from_mean: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            list_cap: DEFAULT_LIST_CAP,
            page_size: DEFAULT_PAGE_SIZE,
            top_limit: DEFAULT_TOP_LIMIT,
            exclude_unrated_from_mean: false,
        }
    }
}

/// Resolve the venue database file
pub fn resolve_database_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.database {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_database_path()
}

/// Platform config file location: `<config_dir>/foodpick/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("foodpick").join("config.toml"))
}

/// Platform database location: `<data_local_dir>/foodpick/venues.db`
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("foodpick"))
        .unwrap_or_else(|| PathBuf::from("./foodpick_data"))
        .join("venues.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_settings_defaults() {
        let settings = TomlConfig::default().service_settings();
        assert_eq!(settings.list_cap, 1000);
        assert_eq!(settings.page_size, 12);
        assert_eq!(settings.top_limit, 10);
        assert!(!settings.exclude_unrated_from_mean);
    }

    #[test]
    fn test_service_settings_page_size_never_zero() {
        let config = TomlConfig {
            page_size: Some(0),
            ..TomlConfig::default()
        };
        assert_eq!(config.service_settings().page_size, 1);
    }

    #[test]
    fn test_default_database_path_file_name() {
        let path = default_database_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("venues.db"));
    }
}
