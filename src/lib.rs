//! Tally: a pure functional accumulator for four-function calculators
//!
//! Tally follows the "pure core, imperative shell" split. The accumulator
//! state and every transition over it are plain values and pure functions;
//! a thin shell owns one state, applies inputs in arrival order, and handles
//! the side effects (logging, timestamps).
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`] holds the entry text, the pending left
//!   operand, the pending operator and the reset-on-next-digit flag
//! - **Inputs**: [`Input`] events, mapped from key or button names
//! - **Readout**: the value and history lines derived from a state
//! - **Tape**: a bounded record of what each input did
//!
//! # Example
//!
//! ```rust
//! use tally::{Calculator, Input, Operator};
//!
//! let mut calculator = Calculator::new();
//! calculator.type_keys("5+");
//! calculator.press(Input::Operator(Operator::Multiply));
//! calculator.type_keys("3=");
//!
//! // The second operator replaced the first: 5 * 3.
//! assert_eq!(calculator.readout().value_text, "15");
//! assert_eq!(calculator.readout().history_text, "");
//! ```

pub mod builder;
pub mod core;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use crate::core::{CalcError, CalculatorState, Digit, Mode, Operator, Readout, ERROR_SENTINEL};
pub use input::Input;
pub use machine::{Calculator, Tape, TapeEntry};
