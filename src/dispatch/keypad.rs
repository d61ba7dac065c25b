//! Labeled keypad buttons
//!
//! The keypad is a grid four units wide. Each button carries the label drawn
//! on it, an accessible name (`"add"`, `"all clear"`, ...) and the [`Input`]
//! it dispatches.

use crate::calculator::{Digit, Operator};
use crate::dispatch::Input;

/// Width of a keypad row in grid units
pub const KEYPAD_COLUMNS: u16 = 4;

/// Visual group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVariant {
    Default,
    Operator,
    Equals,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyButton {
    pub label: &'static str,
    pub name: &'static str,
    pub input: Input,
    pub variant: KeyVariant,
    /// Width in grid units
    pub span: u16,
}

const fn button(
    label: &'static str,
    name: &'static str,
    input: Input,
    variant: KeyVariant,
) -> KeyButton {
    KeyButton {
        label,
        name,
        input,
        variant,
        span: 1,
    }
}

const fn wide(key: KeyButton, span: u16) -> KeyButton {
    KeyButton { span, ..key }
}

const fn digit(label: &'static str, value: u8) -> KeyButton {
    let input = match Digit::new(value) {
        Some(d) => Input::Digit(d),
        None => panic!("keypad digit out of range"),
    };
    button(label, label, input, KeyVariant::Default)
}

const fn operator(label: &'static str, name: &'static str, op: Operator) -> KeyButton {
    button(label, name, Input::Operator(op), KeyVariant::Operator)
}

const fn utility(label: &'static str, name: &'static str, input: Input) -> KeyButton {
    button(label, name, input, KeyVariant::Utility)
}

pub const KEYPAD: &[&[KeyButton]] = &[
    &[
        utility("AC", "all clear", Input::ClearAll),
        utility("C", "clear entry", Input::ClearEntry),
        utility("⌫", "backspace", Input::Backspace),
        operator("÷", "divide", Operator::Divide),
    ],
    &[
        digit("7", 7),
        digit("8", 8),
        digit("9", 9),
        operator("×", "multiply", Operator::Multiply),
    ],
    &[
        digit("4", 4),
        digit("5", 5),
        digit("6", 6),
        operator("−", "subtract", Operator::Subtract),
    ],
    &[
        digit("1", 1),
        digit("2", 2),
        digit("3", 3),
        operator("+", "add", Operator::Add),
    ],
    &[
        utility("±", "toggle sign", Input::ToggleSign),
        wide(digit("0", 0), 2),
        button(".", "decimal", Input::Dot, KeyVariant::Default),
    ],
    &[
        utility("%", "percent", Input::Percent),
        wide(button("=", "equals", Input::Equals, KeyVariant::Equals), 3),
    ],
];

/// Look up a button by accessible name, falling back to its label
pub fn button_by_name(name: &str) -> Option<&'static KeyButton> {
    let buttons = || KEYPAD.iter().flat_map(|row| row.iter());
    buttons()
        .find(|b| b.name.eq_ignore_ascii_case(name))
        .or_else(|| buttons().find(|b| b.label == name))
}

/// The button that dispatches `input`, if one exists
pub fn button_for_input(input: Input) -> Option<&'static KeyButton> {
    KEYPAD
        .iter()
        .flat_map(|row| row.iter())
        .find(|b| b.input == input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fill_grid() {
        for row in KEYPAD {
            let width: u16 = row.iter().map(|b| b.span).sum();
            assert_eq!(width, KEYPAD_COLUMNS);
        }
    }

    #[test]
    fn test_every_input_has_a_button() {
        let mut inputs = vec![
            Input::Dot,
            Input::Equals,
            Input::ClearAll,
            Input::ClearEntry,
            Input::Backspace,
            Input::ToggleSign,
            Input::Percent,
        ];
        inputs.extend(Operator::ALL.map(Input::Operator));
        inputs.extend((0..=9).filter_map(Digit::new).map(Input::Digit));

        for input in inputs {
            assert!(button_for_input(input).is_some(), "{:?}", input);
        }
    }

    #[test]
    fn test_lookup_by_name_and_label() {
        assert_eq!(button_by_name("add").map(|b| b.input), Some(Input::Operator(Operator::Add)));
        assert_eq!(button_by_name("÷").map(|b| b.name), Some("divide"));
        assert_eq!(button_by_name("All Clear").map(|b| b.label), Some("AC"));
        assert_eq!(
            button_by_name("7").map(|b| b.input),
            Digit::new(7).map(Input::Digit)
        );
        assert!(button_by_name("sqrt").is_none());
    }
}
