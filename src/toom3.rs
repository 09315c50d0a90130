//! Toom-Cook-3 multiplication (component E): split each operand into
//! three limb blocks, evaluate both polynomials at five points,
//! multiply pointwise, and interpolate back the product's digits.
//!
//! Interpolation produces intermediates that can go negative even
//! when both inputs are positive digit vectors, so this module
//! carries an explicit `(magnitude, negative)` pair for every
//! intermediate rather than reaching for the public signed `BigInt`.

use crate::addsub;
use crate::digits::{self, Digits};
use crate::dispatch::{self, TOOM3_THRESHOLD};
use crate::karatsuba;

/// A signed digit vector, used only as Toom-3 interpolation scratch.
#[derive(Clone)]
struct Signed {
    mag: Digits,
    neg: bool,
}

impl Signed {
    fn from_parts(mut mag: Digits, neg: bool) -> Self {
        digits::trim(&mut mag);
        if mag.is_empty() {
            Signed { mag, neg: false }
        } else {
            Signed { mag, neg }
        }
    }

    fn add(&self, other: &Signed) -> Signed {
        if self.neg == other.neg {
            Signed::from_parts(addsub::add(&self.mag, &other.mag), self.neg)
        } else {
            match digits::compare(&self.mag, &other.mag) {
                std::cmp::Ordering::Equal => Signed::from_parts(Digits::new(), false),
                std::cmp::Ordering::Greater => {
                    Signed::from_parts(addsub::sub(&self.mag, &other.mag), self.neg)
                }
                std::cmp::Ordering::Less => {
                    Signed::from_parts(addsub::sub(&other.mag, &self.mag), other.neg)
                }
            }
        }
    }

    fn neg(&self) -> Signed {
        Signed::from_parts(self.mag.clone(), !self.neg)
    }

    fn sub(&self, other: &Signed) -> Signed {
        self.add(&other.neg())
    }

    fn mul_scalar(&self, k: u32) -> Signed {
        Signed::from_parts(crate::muldiv::mul_scalar(&self.mag, k), self.neg)
    }

    /// Exact division by a small scalar; the caller guarantees no
    /// remainder (the interpolation formulas are exact).
    fn div_exact_scalar(&self, k: u32) -> Signed {
        let (q, r) = crate::muldiv::div_scalar(&self.mag, k);
        debug_assert_eq!(r, 0, "toom3 interpolation division must be exact");
        Signed::from_parts(q, self.neg)
    }

    fn shift_left(&self, k: usize) -> Signed {
        Signed::from_parts(digits::shift_left_limbs(&self.mag, k), self.neg)
    }
}

fn pointwise(a: &Signed, b: &Signed) -> Signed {
    let mag = dispatch::mul(&a.mag, &b.mag);
    Signed::from_parts(mag, a.neg != b.neg)
}

/// Extracts limb block `i` (0, 1, or 2) of width `s` from `v`,
/// zero-padding past the end.
fn block(v: &[u32], i: usize, s: usize) -> Digits {
    let start = i * s;
    if start >= v.len() {
        return Digits::new();
    }
    let end = (start + s).min(v.len());
    digits::trimmed(v[start..end].to_vec())
}

/// Evaluates `a0 + a1*x + a2*x^2` at `{0, 1, -1, 2, inf}`.
fn evaluate(a0: &[u32], a1: &[u32], a2: &[u32]) -> [Signed; 5] {
    let a0s = Signed::from_parts(a0.to_vec(), false);
    let a1s = Signed::from_parts(a1.to_vec(), false);
    let a2s = Signed::from_parts(a2.to_vec(), false);

    let p0 = a0s.clone();
    let p_inf = a2s.clone();
    let p1 = a0s.add(&a1s).add(&a2s);
    let p_neg1 = a0s.sub(&a1s).add(&a2s);
    let p2 = a0s.add(&a1s.mul_scalar(2)).add(&a2s.mul_scalar(4));

    [p0, p1, p_neg1, p2, p_inf]
}

/// Toom-Cook-3 multiplication. Applies above [`TOOM3_THRESHOLD`];
/// below it, falls back to Karatsuba.
pub fn mul(x: &[u32], y: &[u32]) -> Digits {
    let n = x.len().max(y.len());
    if n <= TOOM3_THRESHOLD {
        return karatsuba::mul(x, y);
    }

    let s = n.div_ceil(3);
    let x0 = block(x, 0, s);
    let x1 = block(x, 1, s);
    let x2 = block(x, 2, s);
    let y0 = block(y, 0, s);
    let y1 = block(y, 1, s);
    let y2 = block(y, 2, s);

    let xs = evaluate(&x0, &x1, &x2);
    let ys = evaluate(&y0, &y1, &y2);

    let r0 = pointwise(&xs[0], &ys[0]);
    let r1 = pointwise(&xs[1], &ys[1]);
    let r_neg1 = pointwise(&xs[2], &ys[2]);
    let r2 = pointwise(&xs[3], &ys[3]);
    let r_inf = pointwise(&xs[4], &ys[4]);

    // Interpolation, spec.md §4.E:
    let c0 = r0.clone();
    let c4 = r_inf.clone();
    let c2 = r1.add(&r_neg1).div_exact_scalar(2).sub(&c0).sub(&c4);
    let s_coef = r1.sub(&r_neg1).div_exact_scalar(2);
    let x_coef = r2
        .sub(&c0)
        .sub(&c2.mul_scalar(4))
        .sub(&c4.mul_scalar(16))
        .div_exact_scalar(2);
    let c3 = x_coef.sub(&s_coef).div_exact_scalar(3);
    let c1 = s_coef.sub(&c3);

    let result = c0
        .add(&c1.shift_left(s))
        .add(&c2.shift_left(2 * s))
        .add(&c3.shift_left(3 * s))
        .add(&c4.shift_left(4 * s));

    debug_assert!(!result.neg, "toom3 product of unsigned operands must be nonnegative");
    result.mag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::muldiv;

    #[test]
    fn matches_classical_below_threshold() {
        let a = vec![1, 2, 3, 4];
        let b = vec![5, 6, 7];
        assert_eq!(mul(&a, &b), muldiv::mul(&a, &b));
    }

    #[test]
    fn matches_classical_above_threshold() {
        let a: Vec<u32> = (0..800u32).map(|i| (i * 7) % 9973).collect();
        let b: Vec<u32> = (0..650u32).map(|i| (i * 13) % 9973).collect();
        assert_eq!(mul(&a, &b), muldiv::mul(&a, &b));
    }

    #[test]
    fn handles_unequal_and_ragged_block_sizes() {
        let a: Vec<u32> = (0..777u32).map(|i| (i * 5) % 9973).collect();
        let b = vec![1, 2];
        assert_eq!(mul(&a, &b), muldiv::mul(&a, &b));
    }
}
