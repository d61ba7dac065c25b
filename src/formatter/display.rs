//! String-level shaping of plain decimal numerals for the display

/// Drop trailing zeros after a decimal point, and the point itself when no
/// fractional digits remain. Integers are left untouched.
pub fn trim_trailing_zeros(numeral: &str) -> String {
    if !numeral.contains('.') {
        return numeral.to_string();
    }
    let trimmed = numeral.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Rewrite `-0` (and any all-zero integer with a sign) as `0`
pub fn normalize_negative_zero(numeral: &str) -> String {
    match numeral.strip_prefix('-') {
        Some(magnitude)
            if !magnitude.contains('.') && magnitude.chars().all(|c| c == '0') =>
        {
            "0".to_string()
        }
        _ => numeral.to_string(),
    }
}

/// Truncate a numeral to at most `max_len` characters.
///
/// With a decimal point the integer part is kept whole and the fraction is
/// cut to fit; when the integer part alone does not leave room for a
/// fractional digit it is hard-cut to `max_len`. Without a decimal point the
/// string is hard-cut.
pub fn limit_display_length(numeral: &str, max_len: usize) -> String {
    if numeral.chars().count() <= max_len {
        return numeral.to_string();
    }

    match numeral.split_once('.') {
        Some((int_part, frac_part)) => {
            let room = max_len.saturating_sub(int_part.chars().count() + 1);
            if room == 0 {
                int_part.chars().take(max_len).collect()
            } else {
                let fraction: String = frac_part.chars().take(room).collect();
                format!("{}.{}", int_part, fraction)
            }
        }
        None => numeral.chars().take(max_len).collect(),
    }
}
