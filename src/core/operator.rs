//! Binary operators and the digits that make up an entry.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
/// assert_eq!(Operator::Divide.symbol(), '/');
/// assert_eq!(Operator::from_symbol('×'), Some(Operator::Multiply));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the history line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Accepts the display symbols plus the common typographic variants.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division fails only when the divisor is exactly zero (either sign).
    /// A NaN result is reported as [`CalcError::Indeterminate`].
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };

        if result.is_nan() {
            Err(CalcError::Indeterminate)
        } else {
            Ok(result)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single entry key: `0`-`9` or the decimal point.
///
/// # Example
///
/// ```rust
/// use tally::core::Digit;
///
/// assert!(Digit::new('7').is_some());
/// assert!(Digit::new('.').is_some_and(|d| d.is_point()));
/// assert!(Digit::new('a').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    /// Checked constructor; only ASCII digits and `.` are accepted.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    /// Digit for a value in `0..=9`.
    pub fn from_value(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Self)
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("{c:?} is not a digit or decimal point"))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
