//! # Number Parsing and Formatting
//!
//! The power and root buttons read the current input with a permissive
//! leading-numeric-prefix parse (`"3abc"` reads as `3`), and every result is
//! written back as text that the same parse reads again losslessly.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::number::{format_number, parse_leading_float};
//!
//! assert_eq!(parse_leading_float("3abc"), Some(3.0));
//! assert_eq!(parse_leading_float("abc"), None);
//! assert_eq!(format_number(81.0), "81");
//! assert_eq!(format_number(1e21), "1e+21");
//! ```

/// Literal accepted in place of digits, as produced by [`format_number`] for ±∞.
const INFINITY_LITERAL: &str = "Infinity";

/// Magnitudes at or above this are written in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this are written in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped, then an optional sign, then either the
/// `Infinity` literal or a decimal with an optional exponent. Whatever follows
/// the prefix is ignored. Returns `None` when no digits can be consumed.
///
/// ```rust
/// use calc_core::number::parse_leading_float;
///
/// assert_eq!(parse_leading_float("  -2.5e2xyz"), Some(-250.0));
/// assert_eq!(parse_leading_float(".5"), Some(0.5));
/// assert_eq!(parse_leading_float("1e"), Some(1.0));
/// assert_eq!(parse_leading_float("+"), None);
/// ```
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with(INFINITY_LITERAL) {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < len && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // The exponent only counts when it carries at least one digit ("1e" reads as 1)
    let mut exponent = "";
    if pos < len && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let normalized = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        if exponent.is_empty() { "0" } else { exponent },
    );
    normalized.parse::<f64>().ok()
}

/// Format a value for display and for re-entry as expression text.
///
/// Integral values carry no fractional part, other values use the shortest
/// representation that round-trips, and very large or very small magnitudes
/// switch to exponent notation with an explicit exponent sign.
///
/// ```rust
/// use calc_core::number::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            INFINITY_LITERAL.to_string()
        } else {
            format!("-{}", INFINITY_LITERAL)
        };
    }
    // Also folds negative zero
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}
