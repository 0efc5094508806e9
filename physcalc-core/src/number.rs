//! Number parsing and fixed-point rendering
//!
//! All arithmetic in the calculator is plain `f64`. This module only deals
//! with getting numbers in from text and rendering them back out.

use thiserror::Error;

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Not a finite number: {0}")]
    NonFinite(f64),
}

/// Parse a decimal number from text
///
/// Accepts the usual forms: "42", "-3.5", "1e-3". Leading and trailing
/// whitespace is ignored. NaN and infinities are rejected.
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let trimmed = s.trim();
    let n: f64 = trimmed
        .parse()
        .map_err(|_| NumberError::ParseError(trimmed.to_string()))?;
    if !n.is_finite() {
        return Err(NumberError::NonFinite(n));
    }
    Ok(n)
}

/// Digits after the point in the exact decimal expansion of any finite f64
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Render `x` with exactly `decimals` digits after the point.
///
/// Ties round half away from zero on the exact binary value, so
/// `to_fixed(1.03125, 4)` is `"1.0313"` and `to_fixed(-1.03125, 4)` is
/// `"-1.0313"`. Negative zero renders without a sign, so `-0.0` and values
/// that round to zero from below print as `0.0000` rather than `-0.0000`.
pub fn to_fixed(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return format!("{:.*}", decimals, x);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, x.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let fraction = fraction.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes()
        .chain((0..decimals).map(|i| fraction.get(i).copied().unwrap_or(b'0')))
        .collect();

    if fraction.get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if x.is_sign_negative() && digits.iter().any(|d| *d != b'0') {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| *d as char));
    }
    out
}

/// Render `x` rounded to `decimals` places with trailing zeros dropped.
///
/// `to_trimmed(1.5, 4)` is `"1.5"`, `to_trimmed(2.0, 4)` is `"2"`.
pub fn to_trimmed(x: f64, decimals: usize) -> String {
    let s = to_fixed(x, decimals);
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
