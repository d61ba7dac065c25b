//! Input dispatch
//!
//! Maps UI events onto state machine operations. Nothing here holds business
//! logic: [`dispatch`] picks the transition, [`keymap`] translates keyboard
//! events and [`keypad`] describes the labeled buttons.

pub mod keymap;
pub mod keypad;

pub use keymap::input_for_key;
pub use keypad::{button_by_name, button_for_input, KeyButton, KeyVariant, KEYPAD};

use crate::calculator::{CalculatorState, Digit, Operator};

/// A discrete calculator input, from a button click or a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Dot,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
    ToggleSign,
    Percent,
}

/// Produce the state that follows `state` after `input`
pub fn dispatch(state: &CalculatorState, input: Input) -> CalculatorState {
    match input {
        Input::Digit(digit) => state.input_digit(digit),
        Input::Dot => state.input_dot(),
        Input::Operator(op) => state.choose_operator(op),
        Input::Equals => state.equals(),
        Input::ClearAll => state.clear_all(),
        Input::ClearEntry => state.clear_entry(),
        Input::Backspace => state.backspace(),
        Input::ToggleSign => state.toggle_sign(),
        Input::Percent => state.percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[Input]) -> CalculatorState {
        inputs
            .iter()
            .fold(CalculatorState::new(), |state, input| dispatch(&state, *input))
    }

    fn d(value: u8) -> Input {
        Input::Digit(Digit::new(value).unwrap())
    }

    #[test]
    fn test_dispatch_sequence() {
        let state = run(&[d(1), d(2), Input::Operator(Operator::Add), d(3), Input::Equals]);
        assert_eq!(state.display(), "15");
    }

    #[test]
    fn test_dispatch_reaches_every_operation() {
        assert_eq!(run(&[d(8), Input::Backspace]).display(), "0");
        assert_eq!(run(&[d(8), Input::ToggleSign]).display(), "-8");
        assert_eq!(run(&[d(8), Input::Percent]).display(), "0.08");
        assert_eq!(run(&[d(8), Input::Dot, d(5)]).display(), "8.5");
        assert_eq!(run(&[d(8), Input::ClearEntry]).display(), "0");
        assert_eq!(run(&[d(8), Input::ClearAll]), CalculatorState::new());
    }
}
