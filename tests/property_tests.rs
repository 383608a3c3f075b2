//! Property-based tests for the accumulator state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use proptest::prelude::*;
use tally::core::{CalculatorState, Digit, Mode, Operator, ERROR_SENTINEL};
use tally::input::Input;
use tally::machine::Calculator;

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

prop_compose! {
    // Decimal text a user could type: digits with an optional fraction.
    fn arbitrary_operand()(whole in 0..100_000u32, fraction in prop::option::of(0..1000u32)) -> String {
        match fraction {
            Some(fraction) => format!("{whole}.{fraction}"),
            None => whole.to_string(),
        }
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => (0..10u8).prop_map(|v| Input::Digit(Digit::from_value(v).unwrap())),
        1 => Just(Input::Digit(Digit::POINT)),
        3 => arbitrary_operator().prop_map(Input::Operator),
        2 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::Square),
        1 => Just(Input::SquareRoot),
    ]
}

fn type_text(state: CalculatorState, text: &str) -> CalculatorState {
    text.chars()
        .map(|c| Digit::new(c).unwrap())
        .fold(state, |s, d| s.enter_digit(d))
}

fn run(inputs: &[Input]) -> CalculatorState {
    run_from(CalculatorState::new(), inputs)
}

fn run_from(seed: CalculatorState, inputs: &[Input]) -> CalculatorState {
    inputs.iter().fold(seed, |state, input| state.apply(*input))
}

// Valid starting states, including result-only entries that were never typed.
fn arbitrary_seed() -> impl Strategy<Value = CalculatorState> {
    let entries = vec!["0", "12.5", "-3", "1e+21", "-1.5e-7", "Infinity", "-Infinity", ERROR_SENTINEL];
    (prop::sample::select(entries), any::<bool>()).prop_map(|(entry, reset)| {
        CalculatorState::from_parts(entry, "", None, reset).unwrap()
    })
}

fn expected(op: Operator, lhs: f64, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
    }
}

proptest! {
    #[test]
    fn binary_operations_are_correct(
        lhs in arbitrary_operand(),
        rhs in arbitrary_operand(),
        op in arbitrary_operator(),
    ) {
        let a: f64 = lhs.parse().unwrap();
        let b: f64 = rhs.parse().unwrap();
        prop_assume!(!(op == Operator::Divide && b == 0.0));

        let state = type_text(CalculatorState::new(), &lhs).set_operator(op);
        let state = type_text(state, &rhs).calculate();

        let actual: f64 = state.current_entry().parse().unwrap();
        let want = expected(op, a, b);
        prop_assert!((actual - want).abs() <= 1e-9 * want.abs().max(1.0));
        prop_assert_eq!(state.readout().history_text, "");
    }

    #[test]
    fn divide_by_zero_is_always_an_error(
        lhs in arbitrary_operand(),
        zero in prop::sample::select(vec!["0", "0.", "0.0", "00", ".000"]),
    ) {
        let state = type_text(CalculatorState::new(), &lhs).set_operator(Operator::Divide);
        let state = type_text(state, zero).calculate();

        prop_assert_eq!(state.current_entry(), ERROR_SENTINEL);
        prop_assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn square_root_of_negative_is_always_an_error(magnitude in arbitrary_operand()) {
        prop_assume!(magnitude.parse::<f64>().unwrap() > 0.0);

        let state = CalculatorState::new().set_operator(Operator::Subtract);
        let state = type_text(state, &magnitude).calculate();
        prop_assert!(state.current_entry().starts_with('-'));

        let rooted = state.square_root();
        prop_assert_eq!(rooted.current_entry(), ERROR_SENTINEL);
    }

    #[test]
    fn entry_never_has_two_decimal_points(text in "[0-9.]{1,20}") {
        let state = type_text(CalculatorState::new(), &text);
        prop_assert!(state.current_entry().matches('.').count() <= 1);
        prop_assert!(!state.current_entry().is_empty());
    }

    #[test]
    fn invariants_hold_after_any_inputs(
        seed in arbitrary_seed(),
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let state = run_from(seed, &inputs);

        let rebuilt = CalculatorState::from_parts(
            state.current_entry(),
            state.pending_value(),
            state.pending_operator(),
            state.reset_on_next_digit(),
        );
        prop_assert_eq!(rebuilt, Ok(state.clone()));

        let history = state.readout().history_text;
        prop_assert_eq!(history.is_empty(), state.mode() != Mode::EnteringRight);
    }

    #[test]
    fn clear_always_resets(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let state = run(&inputs).clear();

        prop_assert_eq!(state.current_entry(), "0");
        prop_assert_eq!(state.readout().history_text, "");
        prop_assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn digit_after_result_starts_fresh(
        lhs in arbitrary_operand(),
        rhs in arbitrary_operand(),
        op in arbitrary_operator(),
        next in 1..10u8,
    ) {
        let state = type_text(CalculatorState::new(), &lhs).set_operator(op);
        let state = type_text(state, &rhs).calculate();
        let digit = Digit::from_value(next).unwrap();

        let entered = state.enter_digit(digit);
        prop_assert_eq!(entered.current_entry(), digit.to_string());
    }

    #[test]
    fn calculate_is_idempotent(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let once = run(&inputs).calculate();
        prop_assert_eq!(once.calculate(), once);
    }

    #[test]
    fn transitions_are_deterministic(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        prop_assert_eq!(run(&inputs), run(&inputs));
    }

    #[test]
    fn shell_matches_pure_core(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut calculator = Calculator::new();
        calculator.press_all(inputs.iter().copied());

        let state = run(&inputs);
        prop_assert_eq!(calculator.state(), &state);
        prop_assert_eq!(calculator.readout(), &state.readout());
    }

    #[test]
    fn error_state_is_left_only_by_digit_or_clear(input in arbitrary_input()) {
        let failed = CalculatorState::error_state();
        let next = failed.apply(input);

        match input {
            Input::Digit(_) | Input::Clear => prop_assert!(!next.is_error()),
            _ => prop_assert_eq!(next, failed),
        }
    }

    #[test]
    fn state_roundtrip_serialization(
        seed in arbitrary_seed(),
        inputs in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let state = run_from(seed, &inputs);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
