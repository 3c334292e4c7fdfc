use crate::config::toml_config::TomlConfig;
use crate::config::{LogConfig, LogLevel};
use crate::domain::Operand;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sci-calc")]
#[command(about = "Scientific calculator with validated operations and file/console logging")]
pub struct CliConfig {
    /// First operand; prompted for when omitted
    #[arg(short = 'a', long = "a", allow_hyphen_values = true)]
    pub a: Option<String>,

    /// Second operand; prompted for when omitted
    #[arg(short = 'b', long = "b", allow_hyphen_values = true)]
    pub b: Option<String>,

    /// TOML file with a [logging] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write log records to this file instead of the configured one
    #[arg(long, conflicts_with = "no_log_file")]
    pub log_file: Option<PathBuf>,

    /// Do not write log records to a file
    #[arg(long)]
    pub no_log_file: bool,

    /// Do not echo log records to the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Minimum severity to record
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl CliConfig {
    /// Defaults, then the TOML file, then command-line overrides.
    pub fn log_config(&self) -> Result<LogConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.logging,
            None => LogConfig::default(),
        };

        if let Some(level) = self.log_level {
            config.min_level = level;
        }
        if self.quiet {
            config.set_console(false);
        }
        if self.no_log_file {
            config.set_file(None);
        } else if let Some(path) = &self.log_file {
            config.set_file(Some(path.clone()));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn operand_a(&self) -> Option<Operand> {
        self.a.as_deref().map(Operand::parse)
    }

    pub fn operand_b(&self) -> Option<Operand> {
        self.b.as_deref().map(Operand::parse)
    }
}
