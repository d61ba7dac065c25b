//! State machine transitions
//!
//! Each operation is a pure function of the current state and its input.
//! Arithmetic failures never escape: they produce [`CalculatorState::errored`].
//! Operator chaining is strictly left to right, so choosing an operator while
//! another is pending folds the pending one first.

use crate::calculator::arithmetic::{apply, percent_of};
use crate::calculator::constants::{INITIAL_OPERAND, MAX_DIGITS};
use crate::calculator::errors::CalcError;
use crate::calculator::state::CalculatorState;
use crate::calculator::symbols::{Digit, Operator};

/// Number of digits in an operand, sign and decimal point excluded
fn digit_count(operand: &str) -> usize {
    operand.chars().filter(char::is_ascii_digit).count()
}

impl CalculatorState {
    pub fn input_digit(&self, digit: Digit) -> Self {
        if self.error {
            return CalculatorState {
                current_operand: digit.to_string(),
                ..CalculatorState::new()
            };
        }

        if self.overwrite {
            return CalculatorState {
                current_operand: digit.to_string(),
                overwrite: false,
                ..self.clone()
            };
        }

        if self.current_operand == INITIAL_OPERAND {
            if digit == Digit::ZERO {
                return self.clone();
            }
            return CalculatorState {
                current_operand: digit.to_string(),
                ..self.clone()
            };
        }

        if digit_count(&self.current_operand) >= MAX_DIGITS {
            return self.clone();
        }

        CalculatorState {
            current_operand: format!("{}{}", self.current_operand, digit),
            ..self.clone()
        }
    }

    pub fn input_dot(&self) -> Self {
        if self.error {
            return CalculatorState {
                current_operand: "0.".to_string(),
                ..CalculatorState::new()
            };
        }

        if self.overwrite {
            return CalculatorState {
                current_operand: "0.".to_string(),
                overwrite: false,
                ..self.clone()
            };
        }

        if self.current_operand.contains('.') || digit_count(&self.current_operand) >= MAX_DIGITS {
            return self.clone();
        }

        CalculatorState {
            current_operand: format!("{}.", self.current_operand),
            ..self.clone()
        }
    }

    pub fn choose_operator(&self, op: Operator) -> Self {
        if self.error {
            return CalculatorState {
                previous_operand: Some(INITIAL_OPERAND.to_string()),
                pending_operator: Some(op),
                overwrite: true,
                ..CalculatorState::new()
            };
        }

        if let (Some(previous), Some(pending), false) =
            (&self.previous_operand, self.pending_operator, self.overwrite)
        {
            return match apply(previous, &self.current_operand, pending) {
                Ok(result) => CalculatorState {
                    previous_operand: Some(result.clone()),
                    current_operand: result,
                    pending_operator: Some(op),
                    overwrite: true,
                    error: false,
                },
                Err(err) => fail(err),
            };
        }

        CalculatorState {
            previous_operand: Some(self.current_operand.clone()),
            pending_operator: Some(op),
            overwrite: true,
            ..self.clone()
        }
    }

    pub fn equals(&self) -> Self {
        let (Some(previous), Some(pending)) = (&self.previous_operand, self.pending_operator)
        else {
            return self.clone();
        };

        match apply(previous, &self.current_operand, pending) {
            Ok(result) => CalculatorState {
                previous_operand: None,
                current_operand: result,
                pending_operator: None,
                overwrite: true,
                error: false,
            },
            Err(err) => fail(err),
        }
    }

    pub fn clear_all(&self) -> Self {
        CalculatorState::new()
    }

    /// Reset the operand being typed, keeping any pending operation
    pub fn clear_entry(&self) -> Self {
        CalculatorState {
            current_operand: INITIAL_OPERAND.to_string(),
            overwrite: false,
            error: false,
            ..self.clone()
        }
    }

    pub fn backspace(&self) -> Self {
        if self.error {
            return CalculatorState::new();
        }
        if self.overwrite {
            return self.clone();
        }

        let mut next = self.current_operand.clone();
        next.pop();
        if next.is_empty() || next == "-" || next == "-0" {
            next = INITIAL_OPERAND.to_string();
        }

        CalculatorState {
            current_operand: next,
            ..self.clone()
        }
    }

    pub fn toggle_sign(&self) -> Self {
        if self.error {
            return CalculatorState::new();
        }
        if self.current_operand == INITIAL_OPERAND {
            return self.clone();
        }

        let current_operand = match self.current_operand.strip_prefix('-') {
            Some(magnitude) => magnitude.to_string(),
            None => format!("-{}", self.current_operand),
        };

        CalculatorState {
            current_operand,
            ..self.clone()
        }
    }

    pub fn percent(&self) -> Self {
        if self.error {
            return CalculatorState::new();
        }

        match percent_of(&self.current_operand) {
            Ok(result) => CalculatorState {
                current_operand: result,
                overwrite: true,
                ..self.clone()
            },
            Err(err) => fail(err),
        }
    }
}

fn fail(err: CalcError) -> CalculatorState {
    tracing::warn!(error = %err, "calculation failed");
    CalculatorState::errored()
}
