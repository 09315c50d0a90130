//! Generic base conversion (component J): base B1 digit sequence to
//! base B2, via repeated multiply-then-add (Horner's method).

use crate::digits::Digits;

/// Converts `v`, a little-endian digit vector in base `from_base`,
/// into the equivalent little-endian digit vector in base `to_base`.
/// Returns a copy unchanged when the bases match.
pub fn convert(v: &[u32], from_base: u64, to_base: u64) -> Digits {
    if from_base == to_base {
        return v.to_vec();
    }
    let mut acc: Digits = Digits::new();
    for &limb in v.iter().rev() {
        acc = mul_scalar_u64(&acc, from_base, to_base);
        acc = add_scalar_u64(&acc, limb as u64, to_base);
    }
    super::digits::trimmed(acc)
}

fn mul_scalar_u64(v: &[u32], scalar: u64, base: u64) -> Digits {
    if scalar == 0 || v.is_empty() {
        return Digits::new();
    }
    let mut out = Digits::with_capacity(v.len() + 2);
    let mut carry: u128 = 0;
    for &limb in v {
        let prod = limb as u128 * scalar as u128 + carry;
        out.push((prod % base as u128) as u32);
        carry = prod / base as u128;
    }
    while carry > 0 {
        out.push((carry % base as u128) as u32);
        carry /= base as u128;
    }
    out
}

fn add_scalar_u64(v: &[u32], scalar: u64, base: u64) -> Digits {
    let mut out = Digits::with_capacity(v.len() + 1);
    let mut carry = scalar as u128;
    for &limb in v {
        let sum = limb as u128 + carry;
        out.push((sum % base as u128) as u32);
        carry = sum / base as u128;
    }
    while carry > 0 {
        out.push((carry % base as u128) as u32);
        carry /= base as u128;
    }
    out
}
