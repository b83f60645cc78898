//! Exact arithmetic over decimal-string quantities.
//!
//! Battle stats arrive as base-10 text and routinely exceed 10^9 with four
//! fractional digits, which is past what an `f64` can carry exactly. All
//! arithmetic here goes through [`BigDecimal`] and is rendered back to text
//! with exactly [`FRACTION_DIGITS`] fractional digits.
//!
//! The empty string is the canonical encoding of an exact zero delta so that
//! diff fields can be omitted on the wire.

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

/// Number of fractional digits every rendered quantity carries.
pub const FRACTION_DIGITS: i64 = 4;

/// True for `[+-]?digits[.digits]`, the only numerals accepted as stats.
///
/// Exponent notation is refused: rendering to fixed digits would expand it
/// to its full length.
pub fn is_plain_numeral(value: &str) -> bool {
    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Parse a decimal string, treating empty or unparseable input as zero.
pub fn parse_decimal(value: &str) -> BigDecimal {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return BigDecimal::from(0);
    }
    if !is_plain_numeral(trimmed) {
        tracing::debug!(value = trimmed, "unparseable decimal treated as zero");
        return BigDecimal::from(0);
    }
    match BigDecimal::from_str(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(value = trimmed, error = %e, "unparseable decimal treated as zero");
            BigDecimal::from(0)
        }
    }
}

/// Render a value with exactly [`FRACTION_DIGITS`] fractional digits.
///
/// Extra precision is rounded half-to-even. The output never uses
/// exponent notation, and a negative value keeps its sign even when it
/// rounds to zero.
pub fn render_fixed(value: &BigDecimal) -> String {
    let rounded = value.with_scale_round(FRACTION_DIGITS, RoundingMode::HalfEven);
    let (digits, _) = rounded.as_bigint_and_exponent();
    let text = digits.to_string();
    let magnitude = text.strip_prefix('-').unwrap_or(&text);
    let sign = if value < &BigDecimal::from(0) { "-" } else { "" };
    let width = FRACTION_DIGITS as usize + 1;
    let padded = format!("{:0>width$}", magnitude, width = width);
    let split = padded.len() - FRACTION_DIGITS as usize;
    format!("{}{}.{}", sign, &padded[..split], &padded[split..])
}

/// Compute `later - earlier` and render it, or `""` when the difference is
/// exactly zero.
pub fn decimal_diff(earlier: &str, later: &str) -> String {
    let delta = parse_decimal(later) - parse_decimal(earlier);
    if delta == BigDecimal::from(0) {
        return String::new();
    }
    render_fixed(&delta)
}

/// Sum a set of decimal strings exactly.
pub fn decimal_sum<'a>(values: impl IntoIterator<Item = &'a str>) -> BigDecimal {
    values
        .into_iter()
        .fold(BigDecimal::from(0), |acc, v| acc + parse_decimal(v))
}
