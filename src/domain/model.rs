use std::fmt;

/// A single input value handed to a calculator operation.
///
/// Operands arrive untyped from the console, so a value that is not a number
/// is still representable here and gets rejected by the operation itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Operand {
    /// Interprets console input: integer first, then float, otherwise text.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Operand::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Operand::Float(f);
        }
        Operand::Text(trimmed.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Integer(i) => Some(*i as f64),
            Operand::Float(f) => Some(*f),
            Operand::Text(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Text(_) => "text",
        }
    }

    /// Short description used in type mismatch errors, e.g. `text "abc"`.
    pub fn describe(&self) -> String {
        match self {
            Operand::Text(s) => format!("{} {:?}", self.type_name(), s),
            other => format!("{} {}", other.type_name(), other),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(i) => write!(f, "{}", i),
            Operand::Float(v) => write!(f, "{}", v),
            Operand::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&Operand> for Operand {
    fn from(value: &Operand) -> Self {
        value.clone()
    }
}
