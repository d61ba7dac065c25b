//! Keyboard → [`Input`] mapping
//!
//! | Key                | Input          |
//! |--------------------|----------------|
//! | `0`-`9`            | digit          |
//! | `.` `,`            | decimal point  |
//! | `+` `-` `*` `/`    | operator       |
//! | `Enter` `=`        | equals         |
//! | `Backspace`        | backspace      |
//! | `Esc`              | clear all      |
//! | `Delete`           | clear entry    |
//! | `%`                | percent        |
//! | `n`                | toggle sign    |

use crate::calculator::{Digit, Operator};
use crate::dispatch::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into a calculator input.
///
/// Keys held with `Ctrl` or `Alt` are left to the application.
pub fn input_for_key(key: KeyEvent) -> Option<Input> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '0'..='9') => Digit::from_char(c).map(Input::Digit),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(Input::Dot),
        KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => Operator::from_symbol(c).map(Input::Operator),
        KeyCode::Enter | KeyCode::Char('=') => Some(Input::Equals),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Esc => Some(Input::ClearAll),
        KeyCode::Delete => Some(Input::ClearEntry),
        KeyCode::Char('%') => Some(Input::Percent),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Input::ToggleSign),
        _ => None,
    }
}
