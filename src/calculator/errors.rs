//! Arithmetic error types
//!
//! [`CalcError`] is returned by [`apply`](super::arithmetic::apply) and by the
//! formatter. The state machine never lets it escape: both variants collapse
//! into the same error state, which shows [`ERROR_TOKEN`](super::constants::ERROR_TOKEN).

use thiserror::Error;

/// Failures of the arithmetic core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor of a `/` operation is exactly zero
    #[error("division by zero")]
    DivideByZero,

    /// An operand does not parse to a finite number, or the result overflowed
    #[error("operand or result is not a finite number")]
    NonFinite,
}
