use crate::core::{ComplexNumber, Operation, OperationKind};
use crate::utils::error::{CalcError, Result};

fn add(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    ComplexNumber::new(a.real + b.real, a.imaginary + b.imaginary)
}

fn multiply(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    let real = a.real * b.real - a.imaginary * b.imaginary;
    let imaginary = a.real * b.imaginary + a.imaginary * b.real;
    ComplexNumber::new(real, imaginary)
}

/// Conjugate-method division. A zero divisor is an error, never inf/NaN.
///
/// The divisor is first scaled by its largest component so that squaring
/// neither underflows for tiny divisors nor overflows for huge ones.
fn divide(a: ComplexNumber, b: ComplexNumber) -> Result<ComplexNumber> {
    if b.real == 0.0 && b.imaginary == 0.0 {
        return Err(CalcError::DivisionByZero {
            operation: OperationKind::Divide.display_name(),
            divisor: b,
        });
    }

    let scale = b.real.abs().max(b.imaginary.abs());
    let (br, bi) = (b.real / scale, b.imaginary / scale);
    let denom = br * br + bi * bi;

    let real = (a.real * br + a.imaginary * bi) / denom / scale;
    let imaginary = (a.imaginary * br - a.real * bi) / denom / scale;
    Ok(ComplexNumber::new(real, imaginary))
}

impl Operation for OperationKind {
    fn name(&self) -> &'static str {
        self.display_name()
    }

    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> Result<ComplexNumber> {
        match self {
            OperationKind::Add => Ok(add(a, b)),
            OperationKind::Multiply => Ok(multiply(a, b)),
            OperationKind::Divide => divide(a, b),
        }
    }
}
