//! The accumulator state and its pure transitions.
//!
//! Every operation takes `&self` and returns the next state. Nothing here
//! logs, reads a clock or mutates in place; the shell in [`crate::machine`]
//! owns a state value and swaps it for the result of each transition.

use super::error::{CalcError, StateError, Violation};
use super::number::{format_number, is_numeric, is_plain_decimal, parse_number};
use super::operator::{Digit, Operator};
use crate::input::Input;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Text shown in place of a value after a failed operation.
pub const ERROR_SENTINEL: &str = "Erro";

/// Derived view of where the calculator is in an expression.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// No operator pending; digits build the left operand.
    EnteringLeft,
    /// An operator is pending; digits build the right operand.
    EnteringRight,
    /// The entry shows the error sentinel.
    Error,
}

impl Mode {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringLeft => "EnteringLeft",
            Self::EnteringRight => "EnteringRight",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// The two strings a front end renders.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Readout {
    /// The current entry, or the error sentinel.
    pub value_text: String,
    /// Pending value followed by the operator symbol; empty when idle.
    pub history_text: String,
}

/// Accumulator state of a four-function calculator.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Digit, Operator};
///
/// let state = CalculatorState::new()
///     .enter_digit(Digit::new('5').unwrap())
///     .set_operator(Operator::Add)
///     .enter_digit(Digit::new('3').unwrap());
///
/// assert_eq!(state.readout().history_text, "5+");
///
/// let state = state.calculate();
/// assert_eq!(state.current_entry(), "8");
/// assert_eq!(state.readout().history_text, "");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct CalculatorState {
    current_entry: String,
    pending_value: String,
    pending_operator: Option<Operator>,
    reset_on_next_digit: bool,
}

/// Unchecked wire form; deserialization goes through [`CalculatorState::from_parts`].
#[derive(Deserialize)]
struct RawState {
    current_entry: String,
    pending_value: String,
    pending_operator: Option<Operator>,
    reset_on_next_digit: bool,
}

impl TryFrom<RawState> for CalculatorState {
    type Error = StateError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        Self::from_parts(
            raw.current_entry,
            raw.pending_value,
            raw.pending_operator,
            raw.reset_on_next_digit,
        )
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh calculator: entry `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            current_entry: "0".to_string(),
            pending_value: String::new(),
            pending_operator: None,
            reset_on_next_digit: false,
        }
    }

    /// The state every failed operation lands in.
    pub fn error_state() -> Self {
        Self {
            current_entry: ERROR_SENTINEL.to_string(),
            pending_value: String::new(),
            pending_operator: None,
            reset_on_next_digit: true,
        }
    }

    /// Build a state from raw parts, checking every invariant.
    ///
    /// All violations are reported together rather than stopping at the
    /// first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{CalculatorState, Operator};
    ///
    /// let state = CalculatorState::from_parts("3", "5", Some(Operator::Add), false).unwrap();
    /// assert_eq!(state.calculate().current_entry(), "8");
    ///
    /// let err = CalculatorState::from_parts("", "", Some(Operator::Add), false).unwrap_err();
    /// assert!(err.to_string().contains("must not be empty"));
    /// ```
    pub fn from_parts(
        current_entry: impl Into<String>,
        pending_value: impl Into<String>,
        pending_operator: Option<Operator>,
        reset_on_next_digit: bool,
    ) -> Result<Self, StateError> {
        let state = Self {
            current_entry: current_entry.into(),
            pending_value: pending_value.into(),
            pending_operator,
            reset_on_next_digit,
        };

        match state.validate() {
            Validation::Success(_) => Ok(state),
            Validation::Failure(violations) => Err(StateError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Check every invariant, accumulating all violations.
    fn validate(&self) -> Validation<(), NonEmptyVec<Violation>> {
        let checks = vec![
            check_entry(&self.current_entry),
            check_pending_value(&self.pending_value),
            check_pairing(&self.pending_value, self.pending_operator),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    pub fn pending_value(&self) -> &str {
        &self.pending_value
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn reset_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// True when the entry shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current_entry == ERROR_SENTINEL
    }

    pub fn mode(&self) -> Mode {
        if self.is_error() {
            Mode::Error
        } else if self.pending_operator.is_some() {
            Mode::EnteringRight
        } else {
            Mode::EnteringLeft
        }
    }

    /// Derive the two display strings.
    pub fn readout(&self) -> Readout {
        let history_text = match self.pending_operator {
            Some(op) => format!("{}{}", self.pending_value, op.symbol()),
            None => String::new(),
        };

        Readout {
            value_text: self.current_entry.clone(),
            history_text,
        }
    }

    /// Type a digit or the decimal point.
    ///
    /// After a result (or an error) the digit starts a new entry, as it does
    /// when the entry is not plain decimal text (`"1e+21"`, `"Infinity"`).
    /// A second decimal point is ignored, and a lone `"0"` is replaced rather
    /// than prefixed.
    pub fn enter_digit(&self, digit: Digit) -> Self {
        if self.reset_on_next_digit || !is_plain_decimal(&self.current_entry) {
            return Self {
                current_entry: fresh_entry(digit),
                reset_on_next_digit: false,
                ..self.clone()
            };
        }

        if digit.is_point() && self.current_entry.contains('.') {
            return self.clone();
        }

        let current_entry = if self.current_entry == "0" {
            fresh_entry(digit)
        } else {
            format!("{}{}", self.current_entry, digit)
        };

        Self {
            current_entry,
            ..self.clone()
        }
    }

    /// Choose a binary operator, folding any finished pending operation first.
    pub fn set_operator(&self, op: Operator) -> Self {
        self.try_set_operator(op)
            .unwrap_or_else(|_| Self::error_state())
    }

    /// Like [`set_operator`](Self::set_operator), surfacing the failure kind.
    ///
    /// Ignored while the entry shows the error sentinel.
    pub fn try_set_operator(&self, op: Operator) -> Result<Self, CalcError> {
        if self.is_error() {
            return Ok(self.clone());
        }

        let base = if self.pending_operator.is_some() && !self.reset_on_next_digit {
            self.try_calculate()?
        } else {
            self.clone()
        };

        Ok(Self {
            pending_value: base.current_entry.clone(),
            current_entry: base.current_entry,
            pending_operator: Some(op),
            reset_on_next_digit: true,
        })
    }

    /// Evaluate the pending operation.
    pub fn calculate(&self) -> Self {
        self.try_calculate()
            .unwrap_or_else(|_| Self::error_state())
    }

    /// Like [`calculate`](Self::calculate), surfacing the failure kind.
    ///
    /// A no-op when nothing is pending or no right operand has been typed.
    pub fn try_calculate(&self) -> Result<Self, CalcError> {
        let Some(op) = self.pending_operator else {
            return Ok(self.clone());
        };
        if self.reset_on_next_digit || self.is_error() {
            return Ok(self.clone());
        }

        let lhs = parse_number(&self.pending_value).ok_or(CalcError::InvalidOperand)?;
        let rhs = self.entry_value()?;
        let result = op.apply(lhs, rhs)?;

        Ok(Self {
            current_entry: format_number(result),
            pending_value: String::new(),
            pending_operator: None,
            reset_on_next_digit: true,
        })
    }

    /// Back to the initial state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Replace the entry with its square.
    pub fn square(&self) -> Self {
        self.try_square().unwrap_or_else(|_| Self::error_state())
    }

    pub fn try_square(&self) -> Result<Self, CalcError> {
        if self.is_error() {
            return Ok(self.clone());
        }
        let value = self.entry_value()?;
        Ok(self.with_result(value * value))
    }

    /// Replace the entry with its square root.
    pub fn square_root(&self) -> Self {
        self.try_square_root()
            .unwrap_or_else(|_| Self::error_state())
    }

    pub fn try_square_root(&self) -> Result<Self, CalcError> {
        if self.is_error() {
            return Ok(self.clone());
        }
        let value = self.entry_value()?;
        if value < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        Ok(self.with_result(value.sqrt()))
    }

    /// Dispatch one input, folding failures into the error state.
    pub fn apply(&self, input: Input) -> Self {
        self.try_apply(input)
            .unwrap_or_else(|_| Self::error_state())
    }

    /// Dispatch one input, surfacing the failure kind.
    ///
    /// On `Err` the next state is always [`CalculatorState::error_state`].
    pub fn try_apply(&self, input: Input) -> Result<Self, CalcError> {
        match input {
            Input::Digit(digit) => Ok(self.enter_digit(digit)),
            Input::Operator(op) => self.try_set_operator(op),
            Input::Equals => self.try_calculate(),
            Input::Clear => Ok(self.clear()),
            Input::Square => self.try_square(),
            Input::SquareRoot => self.try_square_root(),
        }
    }

    fn entry_value(&self) -> Result<f64, CalcError> {
        parse_number(&self.current_entry).ok_or(CalcError::InvalidOperand)
    }

    /// Unary results keep the pending operation.
    fn with_result(&self, value: f64) -> Self {
        Self {
            current_entry: format_number(value),
            reset_on_next_digit: true,
            ..self.clone()
        }
    }
}

fn fresh_entry(digit: Digit) -> String {
    if digit.is_point() {
        "0.".to_string()
    } else {
        digit.to_string()
    }
}

fn check_entry(entry: &str) -> Validation<(), NonEmptyVec<Violation>> {
    if entry.is_empty() {
        Validation::fail(Violation::EmptyEntry)
    } else if entry == ERROR_SENTINEL {
        Validation::success(())
    } else if entry.matches('.').count() > 1 {
        Validation::fail(Violation::MultipleDecimalPoints {
            entry: entry.to_string(),
        })
    } else if !is_numeric(entry) {
        Validation::fail(Violation::MalformedEntry {
            entry: entry.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_pending_value(value: &str) -> Validation<(), NonEmptyVec<Violation>> {
    if value.is_empty() || is_numeric(value) {
        Validation::success(())
    } else {
        Validation::fail(Violation::MalformedPendingValue {
            value: value.to_string(),
        })
    }
}

fn check_pairing(
    value: &str,
    operator: Option<Operator>,
) -> Validation<(), NonEmptyVec<Violation>> {
    match operator {
        Some(op) if value.is_empty() => Validation::fail(Violation::OperatorWithoutOperand {
            symbol: op.symbol(),
        }),
        None if !value.is_empty() => Validation::fail(Violation::OperandWithoutOperator {
            value: value.to_string(),
        }),
        _ => Validation::success(()),
    }
}
