use crate::domain::model::ComplexNumber;
use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteOperand {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Checks both components; `field_name` is the operand prefix, e.g. `lhs`.
pub fn validate_operand(field_name: &str, value: &ComplexNumber) -> Result<()> {
    validate_finite(&format!("{}.real", field_name), value.real)?;
    validate_finite(&format!("{}.imaginary", field_name), value.imaginary)
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}
