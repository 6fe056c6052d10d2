use crate::core::{
    Calculation, ComplexNumber, ConfigProvider, Operation, OperationKind, ResultSink,
};
use crate::utils::error::Result;

/// Runs operations over an operand pair and hands every result to the sink.
pub struct Calculator<S: ResultSink> {
    sink: S,
}

impl<S: ResultSink> Calculator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn execute(
        &mut self,
        operation: OperationKind,
        lhs: ComplexNumber,
        rhs: ComplexNumber,
    ) -> Result<Calculation> {
        tracing::debug!("Executing {} on ({}) and ({})", operation.name(), lhs, rhs);

        let result = operation.execute(lhs, rhs)?;
        let calculation = Calculation {
            operation,
            lhs,
            rhs,
            result,
        };
        self.sink.report(&calculation);

        Ok(calculation)
    }

    /// Stops at the first failing operation; results reported before it stay reported.
    pub fn run(
        &mut self,
        lhs: ComplexNumber,
        rhs: ComplexNumber,
        operations: &[OperationKind],
    ) -> Result<Vec<Calculation>> {
        tracing::debug!("Running {} operation(s)", operations.len());

        operations
            .iter()
            .map(|operation| self.execute(*operation, lhs, rhs))
            .collect()
    }

    pub fn run_all(&mut self, lhs: ComplexNumber, rhs: ComplexNumber) -> Result<Vec<Calculation>> {
        self.run(lhs, rhs, &OperationKind::ALL)
    }

    pub fn run_with_config<C: ConfigProvider>(&mut self, config: &C) -> Result<Vec<Calculation>> {
        self.run(config.lhs(), config.rhs(), config.operations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<String>,
    }

    impl ResultSink for RecordingSink {
        fn report(&mut self, calculation: &Calculation) {
            self.lines.push(calculation.to_string());
        }
    }

    #[test]
    fn test_run_all_reports_in_order() {
        let mut calculator = Calculator::new(RecordingSink::default());
        let results = calculator
            .run_all(ComplexNumber::new(1.0, 2.0), ComplexNumber::new(3.0, 4.0))
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(
            calculator.sink().lines,
            vec![
                "Addition result: 4 + 6i",
                "Multiplication result: -5 + 10i",
                "Division result: 0.44 + 0.08i",
            ]
        );
    }

    #[test]
    fn test_run_stops_at_division_by_zero() {
        let mut calculator = Calculator::new(RecordingSink::default());
        let err = calculator
            .run(
                ComplexNumber::new(1.0, 2.0),
                ComplexNumber::new(0.0, 0.0),
                &[OperationKind::Add, OperationKind::Divide, OperationKind::Multiply],
            )
            .unwrap_err();

        assert!(matches!(err, CalcError::DivisionByZero { .. }));
        assert_eq!(calculator.into_sink().lines, vec!["Addition result: 1 + 2i"]);
    }

    #[test]
    fn test_execute_returns_inputs() {
        let mut calculator = Calculator::new(RecordingSink::default());
        let lhs = ComplexNumber::new(2.0, 0.0);
        let rhs = ComplexNumber::new(0.0, 1.0);
        let calculation = calculator.execute(OperationKind::Multiply, lhs, rhs).unwrap();

        assert_eq!(calculation.lhs, lhs);
        assert_eq!(calculation.rhs, rhs);
        assert_eq!(calculation.result, ComplexNumber::new(0.0, 2.0));
    }
}
