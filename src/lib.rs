pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{LogConfig, LogDestination, LogLevel};
pub use core::{calculator::ScientificCalculator, demo::Demo};
pub use domain::Operand;
pub use utils::error::{CalcError, DomainError, Result};
pub use utils::logger::LogContext;
