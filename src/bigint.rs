//! `BigInt`: the signed public façade (component H). Wraps a
//! `(magnitude digit-vector, sign)` pair and composes sign logic on
//! top of the unsigned kernels in the rest of the crate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::addsub;
use crate::cmp;
use crate::digits::{self, Digits};
use crate::dispatch::{self, BASE};
use crate::error::ArithmeticError;
use crate::muldiv;
use crate::parse;
use crate::shift;

/// The sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// An arbitrary-precision signed integer: a canonical magnitude digit
/// vector plus a sign, with the invariant that zero is never negative.
#[derive(Debug, Clone)]
pub struct BigInt {
    magnitude: Digits,
    negative: bool,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt { magnitude: Digits::new(), negative: false }
    }

    /// Builds a `BigInt` from a machine integer.
    pub fn from_i64(n: i64) -> Self {
        let magnitude = digits_from_u64(n.unsigned_abs());
        BigInt::from_parts(magnitude, n < 0)
    }

    /// Builds a `BigInt` from an already-computed `(magnitude, sign)`
    /// pair, trimming the magnitude and forcing a positive sign on
    /// zero so the "no negative zero" invariant always holds.
    pub fn from_parts(mut magnitude: Digits, negative: bool) -> Self {
        digits::trim(&mut magnitude);
        let negative = negative && !magnitude.is_empty();
        BigInt { magnitude, negative }
    }

    /// Parses decimal text, discarding the consumed-character count.
    /// See [`parse::parse`] for the full contract.
    pub fn parse(text: &str) -> Self {
        parse::parse(text).0
    }

    pub fn sign(&self) -> Sign {
        if self.negative { Sign::Negative } else { Sign::Positive }
    }

    pub fn magnitude(&self) -> &[u32] {
        &self.magnitude
    }

    pub fn limb_count(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn shift_left_limbs(&self, k: usize) -> Self {
        shift::left(self, k)
    }

    pub fn shift_right_limbs(&self, k: usize) -> Self {
        shift::right(self, k)
    }

    /// Truncated division: quotient rounds toward zero, remainder
    /// takes the dividend's sign. Errors when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        log::trace!("div_rem: {} / {}", self, divisor);
        let (q_mag, r_mag) = muldiv::div_rem(&self.magnitude, &divisor.magnitude)?;
        let q = BigInt::from_parts(q_mag, self.negative != divisor.negative);
        let r = BigInt::from_parts(r_mag, self.negative);
        Ok((q, r))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

/// Converts a machine `u64` magnitude into a little-endian digit
/// vector in the internal base.
fn digits_from_u64(mut n: u64) -> Digits {
    let mut out = Digits::new();
    while n > 0 {
        out.push((n % BASE as u64) as u32);
        n /= BASE as u64;
    }
    out
}

impl std::ops::Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_parts(addsub::add(&self.magnitude, &rhs.magnitude), self.negative);
        }
        match digits::compare(&self.magnitude, &rhs.magnitude) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_parts(addsub::sub(&self.magnitude, &rhs.magnitude), self.negative)
            }
            Ordering::Less => {
                BigInt::from_parts(addsub::sub(&rhs.magnitude, &self.magnitude), rhs.negative)
            }
        }
    }
}

impl std::ops::Add<&BigInt> for BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        &self + rhs
    }
}

impl std::ops::Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::from_parts(self.magnitude.clone(), !self.negative)
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        -&self
    }
}

impl std::ops::Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl std::ops::Sub<&BigInt> for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        &self - rhs
    }
}

impl std::ops::Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl std::ops::Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        let magnitude = dispatch::mul(&self.magnitude, &rhs.magnitude);
        BigInt::from_parts(magnitude, self.negative != rhs.negative)
    }
}

impl std::ops::Mul<&BigInt> for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        &self * rhs
    }
}

impl std::ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        cmp::compare_signed(self, other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::compare_signed(self, other)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", parse::format(self))
    }
}

impl FromStr for BigInt {
    type Err = std::convert::Infallible;

    /// Parsing never fails (per spec.md §7): invalid input parses to
    /// zero, same as [`BigInt::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BigInt::parse(s))
    }
}
