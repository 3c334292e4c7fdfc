#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_log_path, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "calculadora.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogDestination {
    Console,
    File { path: PathBuf },
}

/// Where log records go and which severities are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub min_level: LogLevel,
    #[serde(default = "default_destinations")]
    pub destinations: Vec<LogDestination>,
}

fn default_destinations() -> Vec<LogDestination> {
    vec![
        LogDestination::Console,
        LogDestination::File {
            path: PathBuf::from(DEFAULT_LOG_FILE),
        },
    ]
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::default(),
            destinations: default_destinations(),
        }
    }
}

impl LogConfig {
    pub fn new(destinations: Vec<LogDestination>, min_level: LogLevel) -> Self {
        let mut config = Self {
            min_level,
            destinations,
        };
        config.dedup();
        config
    }

    /// No sinks at all; records are dropped.
    pub fn silent() -> Self {
        Self::new(Vec::new(), LogLevel::default())
    }

    pub fn file_only<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(vec![LogDestination::File { path: path.into() }], LogLevel::default())
    }

    /// Destinations behave as a set.
    pub fn dedup(&mut self) {
        self.destinations.sort();
        self.destinations.dedup();
    }

    pub fn has_console(&self) -> bool {
        self.destinations.contains(&LogDestination::Console)
    }

    pub fn file_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.destinations.iter().filter_map(|d| match d {
            LogDestination::File { path } => Some(path),
            LogDestination::Console => None,
        })
    }

    pub fn set_console(&mut self, enabled: bool) {
        self.destinations.retain(|d| *d != LogDestination::Console);
        if enabled {
            self.destinations.push(LogDestination::Console);
        }
        self.dedup();
    }

    /// Replaces every file sink with the given one, or removes them all for `None`.
    pub fn set_file(&mut self, path: Option<PathBuf>) {
        self.destinations
            .retain(|d| matches!(d, LogDestination::Console));
        if let Some(path) = path {
            self.destinations.push(LogDestination::File { path });
        }
        self.dedup();
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<()> {
        for path in self.file_paths() {
            validate_log_path("logging.destinations.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logs_to_console_and_file() {
        let config = LogConfig::default();
        assert!(config.has_console());
        let files: Vec<_> = config.file_paths().collect();
        assert_eq!(files, vec![&PathBuf::from(DEFAULT_LOG_FILE)]);
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_destinations_are_deduplicated() {
        let config = LogConfig::new(
            vec![
                LogDestination::Console,
                LogDestination::File { path: "a.log".into() },
                LogDestination::Console,
                LogDestination::File { path: "a.log".into() },
            ],
            LogLevel::Warn,
        );
        assert_eq!(config.destinations.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let mut config = LogConfig::default();
        config.set_console(false);
        assert!(!config.has_console());

        config.set_file(Some("other.log".into()));
        let files: Vec<_> = config.file_paths().collect();
        assert_eq!(files, vec![&PathBuf::from("other.log")]);

        config.set_file(None);
        assert!(config.destinations.is_empty());
    }

    #[test]
    fn test_empty_file_path_is_rejected() {
        let config = LogConfig::file_only("");
        assert!(config.validate().is_err());
    }
}
