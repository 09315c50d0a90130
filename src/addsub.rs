//! Schoolbook addition and subtraction on unsigned digit vectors
//! (component B).

use crate::digits::{self, Digits};
use crate::dispatch::BASE;

/// Adds two unsigned digit vectors, limb by limb, least to most
/// significant. The running carry is the quotient of `a_i + b_i +
/// carry` by B; the remainder is the stored digit. Trimmed on return.
pub fn add(a: &[u32], b: &[u32]) -> Digits {
    let n = a.len().max(b.len());
    let mut out = Digits::with_capacity(n + 1);
    let mut carry: u64 = 0;
    for i in 0..n {
        let ai = *a.get(i).unwrap_or(&0) as u64;
        let bi = *b.get(i).unwrap_or(&0) as u64;
        let sum = ai + bi + carry;
        out.push((sum % BASE as u64) as u32);
        carry = sum / BASE as u64;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    digits::trimmed(out)
}

/// Subtracts `b` from `a`. Requires `a >= b` (debug-asserted); the
/// caller is responsible for comparing operands and flipping sign
/// when that does not hold.
pub fn sub(a: &[u32], b: &[u32]) -> Digits {
    debug_assert!(
        digits::compare(a, b) != std::cmp::Ordering::Less,
        "addsub::sub requires a >= b"
    );
    let mut out = Digits::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let ai = a[i] as i64;
        let bi = *b.get(i).unwrap_or(&0) as i64;
        let mut diff = ai - bi - borrow;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    digits::trimmed(out)
}

/// Adds a machine scalar into a digit vector with carry propagation.
pub fn add_scalar(a: &[u32], b: u32) -> Digits {
    let mut out = Digits::with_capacity(a.len() + 1);
    let mut carry = b as u64;
    for &limb in a {
        let sum = limb as u64 + carry;
        out.push((sum % BASE as u64) as u32);
        carry = sum / BASE as u64;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    digits::trimmed(out)
}

/// Subtracts a machine scalar from a digit vector. Requires `a >= b`
/// (debug-asserted) — a programming error otherwise, per spec.
pub fn sub_scalar(a: &[u32], b: u32) -> Digits {
    debug_assert!(
        digits::compare(a, &[b]) != std::cmp::Ordering::Less,
        "addsub::sub_scalar requires a >= b"
    );
    let mut out = Digits::with_capacity(a.len());
    let mut borrow = b as i64;
    for &limb in a {
        let mut diff = limb as i64 - borrow;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    digits::trimmed(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_propagates_carry_through_the_top_limb() {
        let max = BASE - 1;
        let a = vec![max, max];
        let b = vec![1];
        assert_eq!(add(&a, &b), vec![0, 0, 1]);
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let a = vec![0, 1];
        let b = vec![1];
        assert_eq!(sub(&a, &b), vec![BASE - 1]);
    }

    #[test]
    fn add_scalar_matches_add() {
        let a = vec![BASE - 1, 5];
        assert_eq!(add_scalar(&a, 3), add(&a, &[3]));
    }

    #[test]
    fn sub_scalar_matches_sub() {
        let a = vec![2, 5];
        assert_eq!(sub_scalar(&a, 3), sub(&a, &[3]));
    }
}
