use crate::config::LogConfig;
use crate::domain::Operand;
use crate::utils::error::{DomainError, Result};
use crate::utils::logger::LogContext;
use crate::utils::validation::validate_numbers;
use std::fmt;

/// Stateless scientific operations over untyped operands.
///
/// Each call checks operand types first, then the operation's precondition,
/// and leaves exactly one record in the log: INFO on success, ERROR on failure.
#[derive(Debug)]
pub struct ScientificCalculator {
    log: LogContext,
}

impl ScientificCalculator {
    pub fn new(log: LogContext) -> Self {
        log.in_scope(|| tracing::info!("Starting scientific calculator"));
        Self { log }
    }

    pub fn from_config(config: &LogConfig) -> Result<Self> {
        Ok(Self::new(LogContext::new(config)?))
    }

    pub fn log_context(&self) -> &LogContext {
        &self.log
    }

    // Basic operations

    pub fn add(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
        let (a, b) = (a.into(), b.into());
        let [x, y] = self.numbers("add", [&a, &b])?;
        self.info(format_args!("Adding {} + {}", a, b));
        Ok(x + y)
    }

    pub fn subtract(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
        let (a, b) = (a.into(), b.into());
        let [x, y] = self.numbers("subtract", [&a, &b])?;
        self.info(format_args!("Subtracting {} - {}", a, b));
        Ok(x - y)
    }

    pub fn multiply(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
        let (a, b) = (a.into(), b.into());
        let [x, y] = self.numbers("multiply", [&a, &b])?;
        self.info(format_args!("Multiplying {} * {}", a, b));
        Ok(x * y)
    }

    pub fn divide(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
        let (a, b) = (a.into(), b.into());
        let [x, y] = self.numbers("divide", [&a, &b])?;
        if y == 0.0 {
            self.error(format_args!("Attempted division by zero: {} / {}", a, b));
            return Err(DomainError::DivisionByZero { dividend: x }.into());
        }
        self.info(format_args!("Dividing {} / {}", a, b));
        Ok(x / y)
    }

    // Advanced operations

    pub fn power(&self, base: impl Into<Operand>, exponent: impl Into<Operand>) -> Result<f64> {
        let (base, exponent) = (base.into(), exponent.into());
        let [b, e] = self.numbers("power", [&base, &exponent])?;
        self.info(format_args!("Computing {} ^ {}", base, exponent));
        Ok(b.powf(e))
    }

    pub fn square_root(&self, x: impl Into<Operand>) -> Result<f64> {
        let x = x.into();
        let [value] = self.numbers("square_root", [&x])?;
        if value < 0.0 {
            self.error(format_args!(
                "Attempted square root of a negative number: {}",
                x
            ));
            return Err(DomainError::NegativeRadicand { value }.into());
        }
        self.info(format_args!("Computing square root of {}", x));
        Ok(value.sqrt())
    }

    pub fn natural_log(&self, x: impl Into<Operand>) -> Result<f64> {
        let x = x.into();
        let [value] = self.numbers("natural_log", [&x])?;
        if value <= 0.0 {
            self.error(format_args!(
                "Attempted natural logarithm of a non-positive number: {}",
                x
            ));
            return Err(DomainError::NonPositiveLogArgument { value }.into());
        }
        self.info(format_args!("Computing natural logarithm of {}", x));
        Ok(value.ln())
    }

    pub fn log_base_10(&self, x: impl Into<Operand>) -> Result<f64> {
        let x = x.into();
        let [value] = self.numbers("log_base_10", [&x])?;
        if value <= 0.0 {
            self.error(format_args!(
                "Attempted base-10 logarithm of a non-positive number: {}",
                x
            ));
            return Err(DomainError::NonPositiveLogArgument { value }.into());
        }
        self.info(format_args!("Computing base-10 logarithm of {}", x));
        Ok(value.log10())
    }

    // Trigonometry, angles in radians

    pub fn sine(&self, angle: impl Into<Operand>) -> Result<f64> {
        let angle = angle.into();
        let [radians] = self.numbers("sine", [&angle])?;
        self.info(format_args!("Computing sine of {} radians", angle));
        Ok(radians.sin())
    }

    pub fn cosine(&self, angle: impl Into<Operand>) -> Result<f64> {
        let angle = angle.into();
        let [radians] = self.numbers("cosine", [&angle])?;
        self.info(format_args!("Computing cosine of {} radians", angle));
        Ok(radians.cos())
    }

    pub fn tangent(&self, angle: impl Into<Operand>) -> Result<f64> {
        let angle = angle.into();
        let [radians] = self.numbers("tangent", [&angle])?;
        self.info(format_args!("Computing tangent of {} radians", angle));
        Ok(radians.tan())
    }

    /// Type check shared by every operation; a mismatch is logged where it is found.
    fn numbers<const N: usize>(
        &self,
        operation: &'static str,
        operands: [&Operand; N],
    ) -> Result<[f64; N]> {
        validate_numbers(operation, operands).map_err(|e| {
            self.error(format_args!("{}", e));
            e
        })
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log.in_scope(|| tracing::info!("{}", message));
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.log.in_scope(|| tracing::error!("{}", message));
    }
}
