//! Report configuration loaded from environment variables.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ReportError, Result};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Report configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CATALOG_FIXTURE`: path to a JSON fixture (default: the bundled seed catalog)
/// - `REPORT_FORMAT`: `text` or `json` (default: `text`)
/// - `REPORT_LIMIT`: size of every top-N section (default: `3`)
/// - `REPORT_METRICS`: print Prometheus counters to stderr after the report (default: `false`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fixture: Option<PathBuf>,
    pub format: ReportFormat,
    pub limit: usize,
    pub print_metrics: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unset variables take their default; set but unusable values are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let fixture = lookup("CATALOG_FIXTURE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let format = match lookup("REPORT_FORMAT") {
            Some(value) => value
                .parse::<ReportFormat>()
                .map_err(|reason| invalid("REPORT_FORMAT", &value, reason))?,
            None => defaults.format,
        };

        let limit = match lookup("REPORT_LIMIT") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|err| invalid("REPORT_LIMIT", &value, err.to_string()))?,
            None => defaults.limit,
        };

        let print_metrics = match lookup("REPORT_METRICS") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| invalid("REPORT_METRICS", &value, "expected true or false".to_string()))?,
            None => defaults.print_metrics,
        };

        Ok(Self {
            fixture,
            format,
            limit,
            print_metrics,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(name: &'static str, value: &str, reason: String) -> ReportError {
    ReportError::InvalidConfig {
        name,
        value: value.to_string(),
        reason,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture: None,
            format: ReportFormat::Text,
            limit: 3,
            print_metrics: false,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.fixture, None);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.limit, 3);
        assert!(!config.print_metrics);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("CATALOG_FIXTURE", "/tmp/catalog.json"),
            ("REPORT_FORMAT", "JSON"),
            ("REPORT_LIMIT", " 5 "),
            ("REPORT_METRICS", "yes"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.fixture, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.limit, 5);
        assert!(config.print_metrics);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_fixture_means_seed() {
        let config = Config::from_lookup(lookup(&[("CATALOG_FIXTURE", "  ")])).unwrap();
        assert_eq!(config.fixture, None);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = Config::from_lookup(lookup(&[("REPORT_FORMAT", "yaml")])).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidConfig { name: "REPORT_FORMAT", .. }
        ));
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[("REPORT_LIMIT", "-1")])).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidConfig { name: "REPORT_LIMIT", .. }
        ));
    }

    #[test]
    fn test_invalid_metrics_flag_is_rejected() {
        let err = Config::from_lookup(lookup(&[("REPORT_METRICS", "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidConfig { name: "REPORT_METRICS", .. }
        ));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [ReportFormat::Text, ReportFormat::Json] {
            assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), format);
        }
    }
}
