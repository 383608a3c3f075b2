//! Input events and their sources.
//!
//! Front ends deliver either [`Input`] values directly or the raw names they
//! already have: keyboard key names (`"7"`, `"Enter"`, `"Escape"`) or button
//! action names (`"add"`, `"sqrt"`). The mapping tables live in [`keys`].

pub mod keys;

use crate::core::{Digit, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete user input, delivered in arrival order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Input {
    /// A digit or the decimal point.
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
    Square,
    SquareRoot,
}

impl Input {
    /// Map a keyboard key name. Unknown keys map to `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operator;
    /// use tally::input::Input;
    ///
    /// assert_eq!(Input::from_key("+"), Some(Input::Operator(Operator::Add)));
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
    /// assert_eq!(Input::from_key("Shift"), None);
    /// ```
    pub fn from_key(name: &str) -> Option<Self> {
        keys::key_input(name)
    }

    /// Map a button action name such as `"multiply"` or `"decimal"`.
    pub fn from_action(name: &str) -> Option<Self> {
        keys::action_input(name)
    }

    /// Map every character of typed text, skipping characters with no binding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::input::Input;
    ///
    /// assert_eq!(Input::from_keys("7*8=").len(), 4);
    /// assert_eq!(Input::from_keys("1 + 1").len(), 3);
    /// ```
    pub fn from_keys(text: &str) -> Vec<Self> {
        text.chars()
            .filter_map(|c| {
                let mut buf = [0u8; 4];
                keys::key_input(c.encode_utf8(&mut buf))
            })
            .collect()
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Square => f.write_str("x²"),
            Self::SquareRoot => f.write_str("√"),
        }
    }
}
