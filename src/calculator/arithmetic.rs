use crate::calculator::errors::CalcError;
use crate::calculator::symbols::Operator;
use crate::formatter::format_number;

/// Parse an operand string into a finite number
pub(crate) fn parse_operand(operand: &str) -> Result<f64, CalcError> {
    operand
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(CalcError::NonFinite)
}

/// Apply `op` to two operand strings and format the result for display.
///
/// Results are rounded to 12 significant digits before formatting, so the
/// returned string is always a valid operand of at most 12 characters.
pub fn apply(left: &str, right: &str, op: Operator) -> Result<String, CalcError> {
    let a = parse_operand(left)?;
    let b = parse_operand(right)?;

    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            a / b
        }
    };

    format_number(result)
}

/// Divide an operand by 100 and format the result
pub fn percent_of(operand: &str) -> Result<String, CalcError> {
    format_number(parse_operand(operand)? / 100.0)
}
