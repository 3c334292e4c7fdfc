use thiserror::Error;

/// Precondition failures of a single operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    #[error("Cannot take the square root of a negative number: {value}")]
    NegativeRadicand { value: f64 },

    #[error("Cannot take the logarithm of a number less than or equal to zero: {value}")]
    NonPositiveLogArgument { value: f64 },
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{operation}: expected a number for argument {position}, got {found}")]
    TypeMismatch {
        operation: &'static str,
        position: usize,
        found: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A non-numeric operand.
    Type,
    /// A numeric operand outside an operation's domain.
    Value,
    Unexpected,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::TypeMismatch { .. } => ErrorCategory::Type,
            CalcError::Domain(_) => ErrorCategory::Value,
            _ => ErrorCategory::Unexpected,
        }
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            CalcError::Domain(e) => Some(e),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Io(e) => format!("Could not read or write: {}", e),
            CalcError::InputClosed => "No input available, both numbers are required".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let mismatch = CalcError::TypeMismatch {
            operation: "add",
            position: 2,
            found: "text \"x\"".to_string(),
        };
        assert_eq!(mismatch.category(), ErrorCategory::Type);

        let domain: CalcError = DomainError::DivisionByZero { dividend: 1.0 }.into();
        assert_eq!(domain.category(), ErrorCategory::Value);
        assert!(domain.domain().is_some());

        assert_eq!(CalcError::InputClosed.category(), ErrorCategory::Unexpected);
    }

    #[test]
    fn test_domain_message_is_transparent() {
        let err: CalcError = DomainError::NegativeRadicand { value: -4.0 }.into();
        assert_eq!(
            err.to_string(),
            "Cannot take the square root of a negative number: -4"
        );
    }
}
