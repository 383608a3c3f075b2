//! Calculator that applies inputs to the accumulator state.

use crate::core::{CalculatorState, Mode, Readout};
use crate::input::Input;
use crate::machine::tape::{Tape, TapeEntry};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Owns the accumulator state, the cached readout and the tape.
///
/// # Example
///
/// ```rust
/// use tally::machine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.type_keys("10+5=");
/// assert_eq!(calculator.readout().value_text, "15");
///
/// calculator.type_keys("*2=");
/// assert_eq!(calculator.readout().value_text, "30");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    readout: Readout,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator in the initial state with a default-sized tape.
    pub fn new() -> Self {
        Self::with_parts(CalculatorState::new(), Tape::new())
    }

    pub(crate) fn with_parts(state: CalculatorState, tape: Tape) -> Self {
        Self {
            readout: state.readout(),
            state,
            tape,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// What the display shows right now.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Apply one input and return the refreshed readout.
    pub fn press(&mut self, input: Input) -> &Readout {
        let from = self.state.mode();

        let (next, failure) = match self.state.try_apply(input) {
            Ok(next) => (next, None),
            Err(err) => {
                warn!(%input, error = %err, "operation failed");
                (CalculatorState::error_state(), Some(err))
            }
        };

        let to = next.mode();
        debug!(
            %input,
            from = from.name(),
            to = to.name(),
            value = next.current_entry(),
            "input applied"
        );

        self.readout = next.readout();
        self.tape = self.tape.record(TapeEntry {
            input,
            from,
            to,
            readout: self.readout.clone(),
            failure,
            timestamp: Utc::now(),
        });
        self.state = next;

        &self.readout
    }

    /// Press the input bound to a keyboard key name.
    ///
    /// Returns `None`, leaving the calculator untouched, when the key has no
    /// binding.
    pub fn press_key(&mut self, name: &str) -> Option<&Readout> {
        let Some(input) = Input::from_key(name) else {
            trace!(key = name, "no binding for key");
            return None;
        };
        Some(self.press(input))
    }

    /// Press the input bound to a button action name.
    pub fn press_action(&mut self, name: &str) -> Option<&Readout> {
        let Some(input) = Input::from_action(name) else {
            trace!(action = name, "no binding for action");
            return None;
        };
        Some(self.press(input))
    }

    /// Press every input in order.
    pub fn press_all<I>(&mut self, inputs: I) -> &Readout
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.press(input);
        }
        &self.readout
    }

    /// Press the key bound to each character of `text`.
    pub fn type_keys(&mut self, text: &str) -> &Readout {
        self.press_all(Input::from_keys(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Digit, Operator, ERROR_SENTINEL};

    #[test]
    fn starts_with_initial_readout() {
        let calculator = Calculator::new();

        assert_eq!(calculator.readout().value_text, "0");
        assert_eq!(calculator.readout().history_text, "");
        assert_eq!(calculator.mode(), Mode::EnteringLeft);
        assert!(calculator.tape().is_empty());
    }

    #[test]
    fn press_refreshes_readout() {
        let mut calculator = Calculator::new();

        let readout = calculator.press(Input::Digit(Digit::new('5').unwrap()));
        assert_eq!(readout.value_text, "5");

        let readout = calculator.press(Input::Operator(Operator::Add));
        assert_eq!(readout.history_text, "5+");
        assert_eq!(calculator.mode(), Mode::EnteringRight);
    }

    #[test]
    fn press_records_each_input() {
        let mut calculator = Calculator::new();
        calculator.type_keys("5+3=");

        let tape = calculator.tape();
        assert_eq!(tape.len(), 4);
        assert_eq!(
            tape.get_path(),
            vec![
                Mode::EnteringLeft,
                Mode::EnteringLeft,
                Mode::EnteringRight,
                Mode::EnteringRight,
                Mode::EnteringLeft,
            ]
        );
        assert_eq!(tape.last().unwrap().readout.value_text, "8");
    }

    #[test]
    fn failures_are_recorded_with_their_kind() {
        let mut calculator = Calculator::new();
        calculator.type_keys("5/0=");

        assert_eq!(calculator.readout().value_text, ERROR_SENTINEL);
        assert_eq!(calculator.mode(), Mode::Error);

        let last = calculator.tape().last().unwrap();
        assert_eq!(last.failure, Some(CalcError::DivideByZero));
        assert_eq!(last.to, Mode::Error);
    }

    #[test]
    fn unknown_keys_leave_state_untouched() {
        let mut calculator = Calculator::new();
        calculator.type_keys("4");

        assert!(calculator.press_key("Shift").is_none());
        assert_eq!(calculator.readout().value_text, "4");
        assert_eq!(calculator.tape().len(), 1);
    }

    #[test]
    fn keyboard_and_actions_drive_the_same_machine() {
        let mut calculator = Calculator::new();
        calculator.press_key("7");
        calculator.press_action("multiply");
        calculator.press_key("8");
        let readout = calculator.press_key("Enter").cloned();

        assert_eq!(readout.map(|r| r.value_text), Some("56".to_string()));
        assert!(calculator.press_action("percent").is_none());
    }

    #[test]
    fn escape_clears() {
        let mut calculator = Calculator::new();
        calculator.type_keys("5+3");
        calculator.press_key("Escape");

        assert_eq!(calculator.state(), &CalculatorState::new());
        assert_eq!(calculator.readout(), &Readout {
            value_text: "0".to_string(),
            history_text: String::new(),
        });
    }
}
