use crate::domain::model::ComplexNumber;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{operation} failed: division by zero (divisor {divisor})")]
    DivisionByZero {
        operation: &'static str,
        divisor: ComplexNumber,
    },

    #[error("Operand {field} must be a finite number, got {value}")]
    NonFiniteOperand { field: String, value: f64 },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalcError {
    /// Short message for the terminal, without the debug detail of `Display`.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::DivisionByZero { operation, divisor } => {
                format!("{} cannot divide by {}: the divisor is zero", operation, divisor)
            }
            CalcError::NonFiniteOperand { field, value } => {
                format!("Operand '{}' is not a finite number ({})", field, value)
            }
            CalcError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CalcError::ConfigParse { message } => {
                format!("Could not read configuration: {}", message)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => {
                "Use a divisor with a non-zero real or imaginary part"
            }
            CalcError::NonFiniteOperand { .. } => "Pass finite values (no NaN or infinity)",
            CalcError::InvalidConfigValue { .. } => "Fix the reported field and run again",
            CalcError::ConfigParse { .. } => "Check the TOML syntax of the config file",
            CalcError::IoError(_) => "Make sure the config file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
