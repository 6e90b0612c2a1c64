//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The Leptos site address and output paths come from `get_configuration`.

use thiserror::Error;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "inkspire=info,tower_http=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no/on/off), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive from `RUST_LOG`
    pub log_filter: Option<String>,

    /// Serve `.br`/`.gz` siblings of `/pkg` assets (`PRECOMPRESSED_ASSETS`)
    pub serve_precompressed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            serve_precompressed: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("RUST_LOG").filter(|v| !v.trim().is_empty());
        let serve_precompressed = match lookup("PRECOMPRESSED_ASSETS") {
            Some(value) => parse_bool("PRECOMPRESSED_ASSETS", &value)?,
            None => true,
        };
        Ok(Self {
            log_filter,
            serve_precompressed,
        })
    }

    /// The effective tracing filter
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-driven tests (no process env mutation - thread safe)
    // ========================================================================

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.serve_precompressed);
        assert_eq!(config.log_filter_or_default(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("RUST_LOG", "inkspire=debug"),
            ("PRECOMPRESSED_ASSETS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, Some("inkspire=debug".to_string()));
        assert!(!config.serve_precompressed);
        assert_eq!(config.log_filter_or_default(), "inkspire=debug");
    }

    #[test]
    fn test_blank_log_filter_is_ignored() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_bool_spellings() {
        for value in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool("X", value), Ok(true), "{value}");
        }
        for value in ["0", "False", "no", "off"] {
            assert_eq!(parse_bool("X", value), Ok(false), "{value}");
        }
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PRECOMPRESSED_ASSETS", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "PRECOMPRESSED_ASSETS",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("PRECOMPRESSED_ASSETS"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            log_filter: Some("debug".to_string()),
            serve_precompressed: false,
        };
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
