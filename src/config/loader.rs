//! Configuration loading.
//!
//! Environment-first: `PORT` and `APP_ENV` come from the process
//! environment with documented fallbacks. `STEWARD_CONFIG` may point at a
//! TOML file supplying the full schema; environment values win over file
//! values.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ServerConfig, DEFAULT_PORT};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from the process environment.
///
/// Reads the optional `STEWARD_CONFIG` TOML file first, then applies
/// `PORT` and `APP_ENV` on top.
pub fn from_env() -> Result<ServerConfig, ConfigError> {
    let mut config = match env::var("STEWARD_CONFIG") {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => ServerConfig::default(),
    };

    apply_env(
        &mut config,
        env::var("PORT").ok().as_deref(),
        env::var("APP_ENV").ok().as_deref(),
    );

    Ok(config)
}

/// Load and parse a TOML config file.
pub fn load_file(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

fn apply_env(config: &mut ServerConfig, port: Option<&str>, environment: Option<&str>) {
    if port.is_some() {
        config.port = resolve_port(port);
    }
    if let Some(label) = environment {
        if !label.is_empty() {
            config.environment = label.to_string();
        }
    }
}

/// Resolve a raw `PORT` value.
///
/// Absent or unparseable input falls back to [`DEFAULT_PORT`] rather than
/// aborting startup; the fallback is logged.
pub fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.trim().parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                tracing::warn!(
                    value,
                    fallback = DEFAULT_PORT,
                    "invalid PORT value, using fallback"
                );
                DEFAULT_PORT
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_port_is_used_verbatim() {
        assert_eq!(resolve_port(Some("8080")), 8080);
        assert_eq!(resolve_port(Some(" 443 ")), 443);
    }

    #[test]
    fn absent_port_falls_back() {
        assert_eq!(resolve_port(None), 3000);
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(resolve_port(Some("not-a-port")), 3000);
        assert_eq!(resolve_port(Some("70000")), 3000);
        assert_eq!(resolve_port(Some("-1")), 3000);
        assert_eq!(resolve_port(Some("0")), 3000);
        assert_eq!(resolve_port(Some("")), 3000);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config: ServerConfig = toml::from_str("port = 9999\nenvironment = \"file\"").unwrap();
        apply_env(&mut config, Some("8081"), Some("production"));
        assert_eq!(config.port, 8081);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn unset_env_keeps_file_values() {
        let mut config: ServerConfig = toml::from_str("port = 9999\nenvironment = \"file\"").unwrap();
        apply_env(&mut config, None, None);
        assert_eq!(config.port, 9999);
        assert_eq!(config.environment, "file");
    }

    #[test]
    fn empty_environment_label_is_ignored() {
        let mut config = ServerConfig::default();
        apply_env(&mut config, None, Some(""));
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/steward.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
