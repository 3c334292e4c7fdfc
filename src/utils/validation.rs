use crate::domain::Operand;
use crate::utils::error::{CalcError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that every operand is numeric and returns their `f64` values in order.
///
/// Positions in the error are 1-based.
pub fn validate_numbers<const N: usize>(
    operation: &'static str,
    operands: [&Operand; N],
) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    for (index, operand) in operands.iter().enumerate() {
        values[index] = operand.as_f64().ok_or_else(|| CalcError::TypeMismatch {
            operation,
            position: index + 1,
            found: operand.describe(),
        })?;
    }
    Ok(values)
}

/// A log sink path must name a file: not empty, no NUL bytes, not `/` or `..`.
pub fn validate_log_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.to_string_lossy();
    let reason = if shown.trim().is_empty() {
        "Log file path cannot be empty"
    } else if shown.contains('\0') {
        "Log file path contains null bytes"
    } else if path.file_name().is_none() {
        "Log file path must name a file, not a directory"
    } else {
        return Ok(());
    };

    Err(CalcError::InvalidConfigValue {
        field: field_name.to_string(),
        value: shown.into_owned(),
        reason: reason.to_string(),
    })
}
