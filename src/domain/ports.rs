use crate::domain::model::{Calculation, ComplexNumber, OperationKind};
use crate::utils::error::Result;

/// A binary operation over complex numbers. Implementations are pure.
pub trait Operation {
    fn name(&self) -> &'static str;
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> Result<ComplexNumber>;
}

/// Receives every successful calculation; the reporting channel of the calculator.
pub trait ResultSink {
    fn report(&mut self, calculation: &Calculation);
}

pub trait ConfigProvider {
    fn lhs(&self) -> ComplexNumber;
    fn rhs(&self) -> ComplexNumber;
    fn operations(&self) -> &[OperationKind];
}
