//! Key and button-action bindings.

use super::Input;
use crate::core::{Digit, Operator};

/// Keyboard key name to input.
///
/// Single characters cover digits, `.`/`,`, operator symbols, `=`, and the
/// letter shortcuts `c` (clear), `s` (square) and `r` (square root).
pub(crate) fn key_input(name: &str) -> Option<Input> {
    match name {
        "Enter" | "=" => return Some(Input::Equals),
        "Escape" | "Delete" | "c" | "C" => return Some(Input::Clear),
        "^" | "s" => return Some(Input::Square),
        "r" => return Some(Input::SquareRoot),
        "," => return Some(Input::Digit(Digit::POINT)),
        _ => {}
    }

    let mut chars = name.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    Digit::new(c)
        .map(Input::Digit)
        .or_else(|| Operator::from_symbol(c).map(Input::Operator))
}

/// Button action name (the `data-action` value of a keypad button) to input.
pub(crate) fn action_input(name: &str) -> Option<Input> {
    let input = match name {
        "add" => Input::Operator(Operator::Add),
        "subtract" => Input::Operator(Operator::Subtract),
        "multiply" => Input::Operator(Operator::Multiply),
        "divide" => Input::Operator(Operator::Divide),
        "equals" => Input::Equals,
        "clear" => Input::Clear,
        "decimal" => Input::Digit(Digit::POINT),
        "square" => Input::Square,
        "sqrt" => Input::SquareRoot,
        other => {
            let mut chars = other.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            if !c.is_ascii_digit() {
                return None;
            }
            return Digit::new(c).map(Input::Digit);
        }
    };
    Some(input)
}
