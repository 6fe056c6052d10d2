pub mod calculator;
pub mod operation;

pub use crate::domain::model::{Calculation, ComplexNumber, OperationKind};
pub use crate::domain::ports::{ConfigProvider, Operation, ResultSink};
pub use crate::utils::error::Result;
