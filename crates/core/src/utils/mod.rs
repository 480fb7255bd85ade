pub mod format;

pub use format::format_amount;

use crate::errors::ValidationError;

/// Accept a finite, non-negative amount.
pub(crate) fn validate_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = validate_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NegativeAmount { field, value })
    }
}

/// Accept any finite number (rates may legitimately be negative).
pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}
