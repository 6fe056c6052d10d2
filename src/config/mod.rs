pub mod toml_config;

use crate::core::{ComplexNumber, ConfigProvider, OperationKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_operand, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Fully resolved inputs of one calculator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub lhs: ComplexNumber,
    pub rhs: ComplexNumber,
    pub operations: Vec<OperationKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lhs: ComplexNumber::new(1.0, 2.0),
            rhs: ComplexNumber::new(3.0, 4.0),
            operations: OperationKind::ALL.to_vec(),
        }
    }
}

impl Settings {
    /// Values present in the file win over the current ones.
    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(operands) = &config.operands {
            if let Some(lhs) = operands.lhs {
                self.lhs = lhs;
            }
            if let Some(rhs) = operands.rhs {
                self.rhs = rhs;
            }
        }
        if let Some(operations) = config.run.as_ref().and_then(|r| r.operations.as_ref()) {
            self.operations = operations.clone();
        }
    }
}

impl ConfigProvider for Settings {
    fn lhs(&self) -> ComplexNumber {
        self.lhs
    }

    fn rhs(&self) -> ComplexNumber {
        self.rhs
    }

    fn operations(&self) -> &[OperationKind] {
        &self.operations
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_operand("lhs", &self.lhs)?;
        validate_operand("rhs", &self.rhs)?;
        validate_non_empty("operations", &self.operations)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "complex-calc")]
#[command(about = "Add, multiply and divide two complex numbers")]
pub struct CliConfig {
    /// Real part of the left operand
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub lhs_real: f64,

    /// Imaginary part of the left operand
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub lhs_imaginary: f64,

    /// Real part of the right operand
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub rhs_real: f64,

    /// Imaginary part of the right operand
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub rhs_imaginary: f64,

    /// Operations to run, in order (add, multiply, divide)
    #[arg(long, value_delimiter = ',', default_values_t = OperationKind::ALL.to_vec())]
    pub operations: Vec<OperationKind>,

    /// TOML file whose values override the command line
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings {
            lhs: ComplexNumber::new(self.lhs_real, self.lhs_imaginary),
            rhs: ComplexNumber::new(self.rhs_real, self.rhs_imaginary),
            operations: self.operations.clone(),
        };

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            let file = TomlConfig::from_file(path)?;
            settings.apply_toml(&file);
        }

        Ok(settings)
    }
}
