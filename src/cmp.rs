//! Signed comparator (component K). Unsigned comparison of magnitude
//! vectors lives in [`crate::digits::compare`]; this module composes
//! sign on top of it for `BigInt`.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::digits;

/// Opposite signs: sign dominates. Equal signs: unsigned compare of
/// magnitudes, negated when both operands are negative.
pub fn compare_signed(a: &BigInt, b: &BigInt) -> Ordering {
    match (a.is_negative(), b.is_negative()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => digits::compare(a.magnitude(), b.magnitude()),
        (true, true) => digits::compare(b.magnitude(), a.magnitude()),
    }
}
