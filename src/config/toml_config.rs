use crate::core::{ComplexNumber, OperationKind};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty, validate_operand, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides read from a TOML file.
///
/// ```toml
/// [operands.lhs]
/// real = 1.0
/// imaginary = 2.0
///
/// [operands.rhs]
/// real = ${RHS_REAL}
/// imaginary = 4.0
///
/// [run]
/// operations = ["add", "multiply", "divide"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub operands: Option<OperandsConfig>,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperandsConfig {
    pub lhs: Option<ComplexNumber>,
    pub rhs: Option<ComplexNumber>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub operations: Option<Vec<OperationKind>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigParse {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(operands) = &self.operands {
            if let Some(lhs) = &operands.lhs {
                validate_operand("operands.lhs", lhs)?;
            }
            if let Some(rhs) = &operands.rhs {
                validate_operand("operands.rhs", rhs)?;
            }
        }
        if let Some(operations) = self.run.as_ref().and_then(|r| r.operations.as_ref()) {
            validate_non_empty("run.operations", operations)?;
        }
        Ok(())
    }
}
