//! Arithmetic dispatch on an operator symbol.
use thiserror::Error;

/// One of the four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

impl Operator {
    /// Applies the operation. Division by zero (either sign) is an error, never infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

/// Errors reported by the calculator. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Error: Division by zero!")]
    DivisionByZero,
    #[error("Invalid operator!")]
    InvalidOperator(char),
}

/// Computes `lhs <symbol> rhs`.
pub fn compute(lhs: f64, symbol: char, rhs: f64) -> Result<f64, CalcError> {
    Operator::try_from(symbol)?.apply(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(compute(2.0, '+', 3.5), Ok(5.5));
        assert_eq!(compute(2.0, '-', 3.5), Ok(-1.5));
        assert_eq!(compute(2.0, '*', 3.5), Ok(7.0));
        assert_eq!(compute(7.0, '/', 2.0), Ok(3.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(compute(1.0, '/', 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(compute(1.0, '/', -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Error: Division by zero!"
        );
    }

    #[test]
    fn test_invalid_operator() {
        assert_eq!(compute(1.0, '%', 2.0), Err(CalcError::InvalidOperator('%')));
        assert_eq!(CalcError::InvalidOperator('x').to_string(), "Invalid operator!");
    }

    #[test]
    fn test_zero_numerator_divides() {
        assert_eq!(compute(0.0, '/', 4.0), Ok(0.0));
    }
}
