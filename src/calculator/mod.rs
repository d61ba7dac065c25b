//! Chain-calculator core
//!
//! This module provides the state machine behind the display:
//! - [`state`]: the immutable [`CalculatorState`] snapshot and its display queries
//! - [`transitions`]: digit entry, operators, equals, clears, backspace, sign, percent
//! - [`arithmetic`]: the `+ - × ÷` core shared by equals and operator chaining
//! - [`errors`]: the [`CalcError`] taxonomy
//!
//! # Evaluation Model
//!
//! Operators have no precedence. Pressing an operator while another is
//! pending evaluates the pending one immediately (`2 + 3 ×` shows `5`), the
//! way a pocket calculator does.

pub mod arithmetic;
pub mod constants;
pub mod errors;
pub mod state;
pub mod symbols;
pub mod transitions;

pub use errors::CalcError;
pub use state::CalculatorState;
pub use symbols::{Digit, Operator};
