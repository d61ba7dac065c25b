//! Calculator state snapshot
//!
//! A [`CalculatorState`] is never mutated in place: every transition in
//! [`transitions`](super::transitions) takes `&self` and returns a new value.
//!
//! # Invariants
//!
//! - `current_operand` is a valid decimal numeral (optional leading `-`,
//!   digits, at most one `.`) unless the error flag is set
//! - a pending operator implies a captured previous operand
//! - `current_operand` never holds more than
//!   [`MAX_DIGITS`](super::constants::MAX_DIGITS) digits

use crate::calculator::arithmetic::parse_operand;
use crate::calculator::constants::{ERROR_TOKEN, INITIAL_OPERAND};
use crate::calculator::symbols::Operator;
use crate::formatter::{format_number, normalize_negative_zero};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub(crate) previous_operand: Option<String>,
    pub(crate) current_operand: String,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) overwrite: bool,
    pub(crate) error: bool,
}

impl CalculatorState {
    /// The canonical session-start state
    pub fn new() -> Self {
        CalculatorState {
            previous_operand: None,
            current_operand: INITIAL_OPERAND.to_string(),
            pending_operator: None,
            overwrite: false,
            error: false,
        }
    }

    /// The state entered when an operation fails
    pub(crate) fn errored() -> Self {
        CalculatorState {
            previous_operand: None,
            current_operand: ERROR_TOKEN.to_string(),
            pending_operator: None,
            overwrite: true,
            error: true,
        }
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// The main display string.
    ///
    /// The live operand is reparsed and passed through the formatter, so what
    /// is shown is always a rounded, length-limited numeral.
    pub fn display(&self) -> String {
        if self.error {
            return ERROR_TOKEN.to_string();
        }
        parse_operand(&self.current_operand)
            .and_then(format_number)
            .unwrap_or_else(|_| normalize_negative_zero(&self.current_operand))
    }

    /// Secondary display line: the captured left operand and pending operator
    pub fn expression(&self) -> String {
        match (&self.previous_operand, self.pending_operator) {
            (Some(previous), Some(op)) => format!("{} {}", previous, op.label()),
            _ => String::new(),
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
