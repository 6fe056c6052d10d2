use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A complex value `real + imaginary·i`.
///
/// No validation happens on construction; callers supply finite components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub real: f64,
    pub imaginary: f64,
}

impl ComplexNumber {
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}

/// The closed set of supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationKind {
    Add,
    Multiply,
    Divide,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Add,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Canonical lowercase name, as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }

    /// Name used in result reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Multiply => "Multiplication",
            OperationKind::Divide => "Division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(OperationKind::Add),
            "multiply" | "mul" | "multiplication" | "*" => Ok(OperationKind::Multiply),
            "divide" | "div" | "division" | "/" => Ok(OperationKind::Divide),
            other => Err(format!(
                "unknown operation '{}', expected one of: add, multiply, divide",
                other
            )),
        }
    }
}

impl TryFrom<String> for OperationKind {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationKind> for String {
    fn from(kind: OperationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One executed operation together with its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: OperationKind,
    pub lhs: ComplexNumber,
    pub rhs: ComplexNumber,
    pub result: ComplexNumber,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} result: {}", self.operation.display_name(), self.result)
    }
}
