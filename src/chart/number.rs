//! Lenient numeric parsing for chart values
//!
//! Uploaded cells are often numbers stored as text ("42", " 3.5",
//! "12kg"). Values are read like a browser's `parseFloat`: leading
//! whitespace is skipped and the longest numeric prefix wins.

use crate::types::CellValue;

/// Numeric value of a cell, or `None` when it has no numeric reading.
///
/// Booleans and nulls never parse, matching how their text forms
/// ("true", "null") read.
pub fn parse_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) if !n.is_nan() => Some(*n),
        CellValue::Number(_) => None,
        CellValue::Text(s) => parse_float(s),
        CellValue::Bool(_) | CellValue::Null => None,
    }
}

/// Parse the longest numeric prefix of `s`.
///
/// # Examples
/// - `"123"` -> 123.0
/// - `"  -4.5e2 apples"` -> -450.0
/// - `".5"` -> 0.5
/// - `"Infinity"` -> inf
/// - `"abc"`, `""`, `"-"` -> None
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
