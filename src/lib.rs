pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::sink::{MemorySink, TracingSink, WriterSink};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::calculator::Calculator;
pub use crate::domain::model::{Calculation, ComplexNumber, OperationKind};
pub use crate::domain::ports::{ConfigProvider, Operation, ResultSink};
pub use crate::utils::error::{CalcError, Result};
