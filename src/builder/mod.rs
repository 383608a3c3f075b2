//! Builder API for configuring a calculator.
//!
//! # Example
//!
//! ```
//! use tally::builder::CalculatorBuilder;
//! use tally::core::{CalculatorState, Operator};
//!
//! let resumed = CalculatorState::from_parts("3", "5", Some(Operator::Add), false).unwrap();
//!
//! let mut calculator = CalculatorBuilder::new()
//!     .initial(resumed)
//!     .tape_capacity(8)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calculator.readout().history_text, "5+");
//! assert_eq!(calculator.type_keys("=").value_text, "8");
//! ```

pub mod error;

pub use error::BuildError;

use crate::core::CalculatorState;
use crate::machine::{Calculator, Tape};

/// Builder for constructing a [`Calculator`] with a fluent API.
#[derive(Clone, Debug)]
pub struct CalculatorBuilder {
    initial: Option<CalculatorState>,
    tape_capacity: Option<usize>,
    record: bool,
}

impl CalculatorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            initial: None,
            tape_capacity: None,
            record: true,
        }
    }

    /// Start from this state instead of the cleared one.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Maximum number of tape entries to keep (must be non-zero).
    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = Some(capacity);
        self
    }

    /// Do not record a tape at all.
    pub fn without_tape(mut self) -> Self {
        self.record = false;
        self
    }

    /// Build the calculator.
    /// Returns an error if the options are inconsistent.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let tape = match (self.record, self.tape_capacity) {
            (false, _) => Tape::with_capacity(0),
            (true, Some(0)) => return Err(BuildError::ZeroTapeCapacity),
            (true, Some(capacity)) => Tape::with_capacity(capacity),
            (true, None) => Tape::new(),
        };

        let state = self.initial.unwrap_or_default();
        Ok(Calculator::with_parts(state, tape))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
