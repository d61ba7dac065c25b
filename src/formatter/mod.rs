//! Number → display string conversion
//!
//! Every number that reaches the display passes through [`format_number`],
//! both the operand being typed (reparsed on each render) and computed
//! results before they are stored back into the state.
//!
//! # Pipeline
//!
//! ```text
//! f64 → round to 12 significant digits → plain decimal (no exponent)
//!     → trim trailing zeros → normalize -0 → limit to 12 characters
//! ```
//!
//! - [`rounding`]: significant-digit rounding and exponent expansion
//! - [`display`]: string shaping (trimming, sign normalization, truncation)

pub mod display;
pub mod rounding;

pub use display::{limit_display_length, normalize_negative_zero, trim_trailing_zeros};
pub use rounding::{expand_exponent, round_significant, to_plain_decimal};

use crate::calculator::constants::{MAX_DISPLAY_LEN, SIGNIFICANT_DIGITS};
use crate::calculator::errors::CalcError;

/// Format a finite number for the display.
///
/// Returns [`CalcError::NonFinite`] for NaN and infinities.
pub fn format_number(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    let rounded = round_significant(value, SIGNIFICANT_DIGITS);
    let plain = to_plain_decimal(rounded);
    let trimmed = trim_trailing_zeros(&plain);
    let normalized = normalize_negative_zero(&trimmed);

    Ok(limit_display_length(&normalized, MAX_DISPLAY_LEN))
}
