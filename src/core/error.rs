//! Error types for calculator operations and state construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures an arithmetic operation can hit.
///
/// These never escape the state machine as faults: every variant folds into
/// the error state, and the next digit starts a fresh computation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Division by zero")]
    DivideByZero,

    #[error("Square root of a negative number")]
    NegativeSquareRoot,

    /// The operand text has no numeric prefix (for example the error sentinel).
    #[error("Operand is not a number")]
    InvalidOperand,

    /// The result is NaN, e.g. `Infinity - Infinity`.
    #[error("Result is not a number")]
    Indeterminate,
}

/// A single broken invariant found while validating raw state parts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Current entry must not be empty")]
    EmptyEntry,

    #[error("Entry {entry:?} contains more than one decimal point")]
    MultipleDecimalPoints { entry: String },

    #[error("Entry {entry:?} is not a decimal number")]
    MalformedEntry { entry: String },

    #[error("Pending value {value:?} is not a decimal number")]
    MalformedPendingValue { value: String },

    #[error("Operator {symbol} is pending without a left operand")]
    OperatorWithoutOperand { symbol: char },

    #[error("Pending value {value:?} is set but no operator is pending")]
    OperandWithoutOperator { value: String },
}

/// Errors raised when building a state from raw parts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// Every violated invariant, in check order.
    #[error("Invalid calculator state: {}", join(.0))]
    Invalid(Vec<Violation>),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_messages_are_readable() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::NegativeSquareRoot.to_string(),
            "Square root of a negative number"
        );
    }

    #[test]
    fn state_error_lists_every_violation() {
        let err = StateError::Invalid(vec![
            Violation::EmptyEntry,
            Violation::OperatorWithoutOperand { symbol: '+' },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid calculator state: Current entry must not be empty; \
             Operator + is pending without a left operand"
        );
    }
}
