//! Sign-preserving in-base shift (component L): multiplication or
//! division by `BASE^k` via limb rotation.

use crate::bigint::BigInt;
use crate::digits;

/// `value * BASE^k`.
pub fn left(value: &BigInt, k: usize) -> BigInt {
    if k == 0 || value.is_zero() {
        return value.clone();
    }
    let shifted = digits::shift_left_limbs(value.magnitude(), k);
    BigInt::from_parts(shifted, value.is_negative())
}

/// `value / BASE^k`, truncated toward zero (shifting out limbs never
/// needs to round: the dropped limbs are simply discarded).
pub fn right(value: &BigInt, k: usize) -> BigInt {
    if k == 0 || value.is_zero() {
        return value.clone();
    }
    let shifted = digits::shift_right_limbs(value.magnitude(), k);
    BigInt::from_parts(shifted, value.is_negative())
}
