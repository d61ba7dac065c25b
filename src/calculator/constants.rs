// Constants for the calculator core

/// Maximum number of digits in a typed operand (sign and decimal point excluded)
pub const MAX_DIGITS: usize = 12;

/// Maximum length of a display string, in characters
pub const MAX_DISPLAY_LEN: usize = 12;

/// Results are rounded to this many significant digits to suppress
/// floating-point noise such as `0.30000000000000004`
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Literal shown on the display while the calculator is in the error state
pub const ERROR_TOKEN: &str = "Error";

/// Operand value of a fresh calculator
pub const INITIAL_OPERAND: &str = "0";
