//! Classical (schoolbook) multiplication and Knuth's Algorithm D
//! long division (component C, TAOCP 4.3.1).

use crate::addsub;
use crate::digits::{self, Digits};
use crate::dispatch::BASE;
use crate::error::ArithmeticError;

/// Multiplies a digit vector by a machine scalar. Knuth 4.3.1:
/// walk limbs least to most significant, accumulate `a[i]*b + carry`,
/// emit `mod B`, carry forward `div B`. `b == 0` short-circuits.
pub fn mul_scalar(a: &[u32], b: u32) -> Digits {
    if b == 0 || digits::is_zero(a) {
        return Digits::new();
    }
    let mut out = Digits::with_capacity(a.len() + 1);
    let mut carry: u64 = 0;
    let b = b as u64;
    for &limb in a {
        let prod = limb as u64 * b + carry;
        out.push((prod % BASE as u64) as u32);
        carry = prod / BASE as u64;
    }
    while carry > 0 {
        out.push((carry % BASE as u64) as u32);
        carry /= BASE as u64;
    }
    digits::trimmed(out)
}

/// Schoolbook vector × vector multiplication. For each limb of the
/// shorter operand, a scalar multiply-and-add is accumulated into the
/// result at that limb's offset. O(|a|·|b|).
pub fn mul(a: &[u32], b: &[u32]) -> Digits {
    if digits::is_zero(a) || digits::is_zero(b) {
        return Digits::new();
    }
    // Put the shorter operand on the outside so the inner accumulate
    // touches fewer result limbs per iteration.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut out = vec![0u32; short.len() + long.len()];
    for (i, &si) in short.iter().enumerate() {
        if si == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &lj) in long.iter().enumerate() {
            let idx = i + j;
            let acc = out[idx] as u64 + si as u64 * lj as u64 + carry;
            out[idx] = (acc % BASE as u64) as u32;
            carry = acc / BASE as u64;
        }
        let mut idx = i + long.len();
        while carry > 0 {
            let acc = out[idx] as u64 + carry;
            out[idx] = (acc % BASE as u64) as u32;
            carry = acc / BASE as u64;
            idx += 1;
        }
    }
    digits::trimmed(out)
}

/// Divides a digit vector by a machine scalar. Single pass from
/// most-significant to least-significant limb with a running
/// remainder. Returns `(quotient, remainder)`.
pub fn div_scalar(a: &[u32], d: u32) -> (Digits, u32) {
    assert_ne!(d, 0, "muldiv::div_scalar divisor must be nonzero");
    if digits::is_zero(a) {
        return (Digits::new(), 0);
    }
    let mut q = vec![0u32; a.len()];
    let mut r: u64 = 0;
    let d = d as u64;
    for i in (0..a.len()).rev() {
        let cur = r * BASE as u64 + a[i] as u64;
        q[i] = (cur / d) as u32;
        r = cur % d;
    }
    (digits::trimmed(q), r as u32)
}

/// Divides `u` by `v` via Knuth's Algorithm D, returning `(quotient,
/// remainder)`. Errors on a zero divisor.
pub fn div_rem(u: &[u32], v: &[u32]) -> Result<(Digits, Digits), ArithmeticError> {
    if digits::is_zero(v) {
        return Err(ArithmeticError::DivideByZero);
    }
    if digits::is_zero(u) {
        return Ok((Digits::new(), Digits::new()));
    }
    match digits::compare(u, v) {
        std::cmp::Ordering::Less => return Ok((Digits::new(), digits::trimmed(u.to_vec()))),
        std::cmp::Ordering::Equal => return Ok((vec![1], Digits::new())),
        std::cmp::Ordering::Greater => {}
    }

    let v = digits::trimmed(v.to_vec());
    let u = digits::trimmed(u.to_vec());

    if v.len() == 1 {
        let (q, r) = div_scalar(&u, v[0]);
        let rem = if r == 0 { Digits::new() } else { vec![r] };
        return Ok((q, rem));
    }

    Ok(knuth_div(&u, &v))
}

/// The general (divisor length >= 2) case of Algorithm D.
fn knuth_div(u: &[u32], v: &[u32]) -> (Digits, Digits) {
    let n = v.len();
    let m = u.len() - n;
    let base = BASE as u64;

    // Step 1: normalize so v's top limb is at least B/2.
    let d = base / (v[n - 1] as u64 + 1);
    let mut vn = mul_scalar(v, d as u32);
    digits::resize(&mut vn, n);
    debug_assert_eq!(vn.len(), n, "normalization must not grow the divisor");

    let mut un = mul_scalar(u, d as u32);
    digits::resize(&mut un, m + n + 1);

    let mut q = vec![0u32; m + 1];

    for j in (0..=m).rev() {
        // Step 2a: estimate q-hat from the top two limbs of the window.
        let top = un[j + n] as u64 * base + un[j + n - 1] as u64;
        let mut qhat = top / vn[n - 1] as u64;
        let mut rhat = top % vn[n - 1] as u64;
        if qhat >= base {
            qhat = base - 1;
            rhat = top - qhat * vn[n - 1] as u64;
        }

        // Step 2b: refine against the second-highest divisor limb.
        while rhat < base && qhat * vn[n - 2] as u64 > rhat * base + un[j + n - 2] as u64 {
            qhat -= 1;
            rhat += vn[n - 1] as u64;
        }

        // Step 2c: multiply and subtract.
        let mut borrow: i64 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as u64;
            let t = un[j + i] as i64 - borrow - (p % base) as i64;
            let (digit, extra_borrow) = if t < 0 {
                (t + base as i64, 1)
            } else {
                (t, 0)
            };
            un[j + i] = digit as u32;
            borrow = (p / base) as i64 + extra_borrow;
        }
        let t = un[j + n] as i64 - borrow;
        let went_negative = t < 0;
        un[j + n] = if went_negative { (t + base as i64) as u32 } else { t as u32 };

        // Step 2d: add-back on the rare over-estimate.
        if went_negative {
            qhat -= 1;
            let mut carry: u64 = 0;
            for i in 0..n {
                let sum = un[j + i] as u64 + vn[i] as u64 + carry;
                un[j + i] = (sum % base) as u32;
                carry = sum / base;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }

        q[j] = qhat as u32;
    }

    // Step 3: unnormalize the remainder.
    let (rem, _) = div_scalar(&un[..n], d as u32);
    (digits::trimmed(q), rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_scalar_zero_short_circuits() {
        assert!(mul_scalar(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn mul_scalar_matches_mul() {
        let a = vec![BASE - 1, 2, 7];
        assert_eq!(mul_scalar(&a, 9), mul(&a, &[9]));
    }

    #[test]
    fn mul_carries_across_many_limbs() {
        let a = vec![BASE - 1, BASE - 1, BASE - 1];
        let b = vec![BASE - 1];
        let got = mul(&a, &b);
        let expected = addsub::sub(&digits::shift_left_limbs(&a, 1), &a);
        assert_eq!(got, expected);
    }

    #[test]
    fn div_scalar_roundtrips_with_mul_scalar() {
        let a = vec![BASE - 1, 123, 4];
        let (q, r) = div_scalar(&a, 7);
        let reconstructed = addsub::add_scalar(&mul_scalar(&q, 7), r);
        assert_eq!(digits::trimmed(reconstructed), digits::trimmed(a));
    }

    #[test]
    fn div_rem_self_division_is_one_remainder_zero() {
        let v = vec![123, 456, 789];
        let (q, r) = div_rem(&v, &v).unwrap();
        assert_eq!(q, vec![1]);
        assert!(r.is_empty());
    }

    #[test]
    fn div_rem_dividend_smaller_than_divisor() {
        let u = vec![5];
        let v = vec![1, 1];
        let (q, r) = div_rem(&u, &v).unwrap();
        assert!(q.is_empty());
        assert_eq!(r, vec![5]);
    }

    #[test]
    fn div_rem_by_zero_errors() {
        assert_eq!(
            div_rem(&[1, 2], &[]).unwrap_err(),
            ArithmeticError::DivideByZero
        );
    }

    #[test]
    fn div_rem_matches_mul_add_identity_across_many_cases() {
        let dividends: [&[u32]; 3] = [
            &[1, 2, 3, 4, 5],
            &[BASE - 1, BASE - 1, BASE - 1, BASE - 1],
            &[0, 0, 7, 9],
        ];
        let divisors: [&[u32]; 3] = [&[9, 9], &[1, 0, 2], &[BASE - 2, 3]];
        for u in dividends {
            for v in divisors {
                let (q, r) = div_rem(u, v).unwrap();
                let reconstructed = addsub::add(&mul(&q, v), &r);
                assert_eq!(
                    digits::trimmed(reconstructed),
                    digits::trimmed(u.to_vec()),
                    "q*v+r != u for u={u:?} v={v:?}"
                );
                assert_eq!(digits::compare(&r, v), std::cmp::Ordering::Less);
            }
        }
    }

    /// Forces the rare add-back branch: constructs a window where the
    /// initial q-hat estimate is exactly one too large.
    #[test]
    fn div_rem_exercises_add_back_branch() {
        // Classic adversarial case for Algorithm D's estimate step:
        // a top divisor limb of 1 forces q-hat = B-1 initially, which
        // the multiply-and-subtract step then rejects.
        let v = vec![0, 1]; // v = BASE (as a 2-limb vector: [0, 1])
        let u = vec![0, BASE - 1, BASE - 1]; // large dividend stressing the estimate
        let (q, r) = div_rem(&u, &v).unwrap();
        let reconstructed = addsub::add(&mul(&q, &v), &r);
        assert_eq!(digits::trimmed(reconstructed), digits::trimmed(u));
        assert_eq!(digits::compare(&r, &v), std::cmp::Ordering::Less);
    }
}
