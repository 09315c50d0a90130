//! Decimal text ↔ `BigInt` parsing and formatting (component I).
//!
//! Parsing never raises: invalid or empty input yields zero, and the
//! caller gets back how many characters were actually consumed so it
//! can detect an incomplete parse (e.g. trailing garbage after a
//! valid run of digits).

use crate::base_conv;
use crate::bigint::BigInt;
use crate::digits::Digits;
use crate::dispatch::{BASE, PARSE_GROUP_DIGITS};

/// Parses a leading `[+-]?[0-9]+` out of `text`. Returns the parsed
/// value and the number of characters consumed (sign plus digit run).
/// An empty or all-zero significand parses to zero with no sign.
pub fn parse(text: &str) -> (BigInt, usize) {
    let bytes = text.as_bytes();
    let (negative, sign_len) = match bytes.first() {
        Some(b'+') => (false, 1),
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };

    let digit_start = sign_len;
    let mut end = digit_start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let consumed = end;
    let digit_run = &text[digit_start..end];
    let significant = digit_run.trim_start_matches('0');

    if significant.is_empty() {
        return (BigInt::zero(), consumed);
    }

    let magnitude = decimal_str_to_internal_base(significant);
    (BigInt::from_parts(magnitude, negative), consumed)
}

/// Groups a (non-empty, no leading zero) decimal digit string into
/// little-endian base-`10^D` blocks, then converts that vector to the
/// internal base via [`base_conv::convert`].
fn decimal_str_to_internal_base(s: &str) -> Digits {
    let d = PARSE_GROUP_DIGITS;
    let mut blocks: Digits = Digits::new();
    let mut pos = s.len();
    while pos > 0 {
        let start = pos.saturating_sub(d);
        let block: u32 = s[start..pos]
            .parse()
            .unwrap_or_else(|_| unreachable!("digit run is all ASCII digits"));
        blocks.push(block);
        pos = start;
    }
    base_conv::convert(&blocks, 10u64.pow(d as u32), BASE as u64)
}

/// Formats a `BigInt` back into decimal text: `"0"` for zero,
/// otherwise the magnitude converted to base-`10^D` blocks, the
/// most-significant block unpadded and the rest zero-padded to width
/// `D`, with a leading `-` for negative values.
pub fn format(value: &BigInt) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let d = PARSE_GROUP_DIGITS;
    let blocks = base_conv::convert(value.magnitude(), BASE as u64, 10u64.pow(d as u32));

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    let mut iter = blocks.iter().rev();
    let most_significant = iter
        .next()
        .unwrap_or_else(|| unreachable!("nonzero value has at least one block"));
    out.push_str(&most_significant.to_string());
    for block in iter {
        out.push_str(&format!("{block:0width$}", width = d));
    }
    out
}
