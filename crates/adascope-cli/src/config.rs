//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system
//! directory). Values from the file provide defaults; command-line
//! flags override them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Analyzer defaults loadable from a TOML file.
///
/// Every field is optional: anything absent falls back to the built-in
/// default or to a command-line flag.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Identifier length above which the lexer warns.
    pub max_identifier_length: Option<usize>,
    /// Default for `--stop-on-error`.
    pub stop_on_error: Option<bool>,
    /// Default for `--panic-recover`.
    pub panic_mode_recover: Option<bool>,
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (adascope/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("adascope/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "adascope", "adascope") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            "max_identifier_length = 8\nstop_on_error = true\npanic_mode_recover = false\n",
        )
        .unwrap();
        assert_eq!(config.max_identifier_length, Some(8));
        assert_eq!(config.stop_on_error, Some(true));
        assert_eq!(config.panic_mode_recover, Some(false));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("max_ident_len = 8\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_config(Some("/nonexistent/adascope.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_identifier_length = 5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.max_identifier_length, Some(5));
        assert_eq!(config.stop_on_error, None);
    }
}
