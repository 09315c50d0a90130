//! Complex-FFT convolution multiplication (component F).
//!
//! Bit-reversal permutation followed by an iterative radix-2
//! Cooley-Tukey transform on `Complex<f64>`, pointwise multiply,
//! inverse transform, then round-and-carry-propagate back into the
//! internal base.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::digits::{self, Digits};
use crate::dispatch::BASE;
use crate::toom3;

/// Above this many exact convolution terms, `f64`'s 53-bit mantissa
/// can no longer represent the rounded sum exactly; the dispatcher
/// (and this function, as a second line of defense) falls back to
/// Toom-3 instead. With `BASE = 10_000` this bound sits far above any
/// input this crate can hold in memory.
const MAX_EXACT_CONVOLUTION_SUM: f64 = (1u64 << 50) as f64;

/// True iff an FFT convolution of operands with these lengths keeps
/// every intermediate value representable exactly as an `f64`.
pub fn is_precision_safe(len_a: usize, len_b: usize) -> bool {
    if len_a == 0 || len_b == 0 {
        return true;
    }
    let m = len_a + len_b - 1;
    let n = m.next_power_of_two().max(1) as f64;
    let max_term = ((BASE - 1) as f64).powi(2);
    n * max_term < MAX_EXACT_CONVOLUTION_SUM
}

/// FFT convolution multiplication. Falls back to Toom-3 when the
/// precision precondition above is violated.
pub fn mul(a: &[u32], b: &[u32]) -> Digits {
    if digits::is_zero(a) || digits::is_zero(b) {
        return Digits::new();
    }
    if !is_precision_safe(a.len(), b.len()) {
        return toom3::mul(a, b);
    }

    let m = a.len() + b.len() - 1;
    let n = m.next_power_of_two().max(2);

    let mut fa = vec![Complex::new(0.0, 0.0); n];
    let mut fb = vec![Complex::new(0.0, 0.0); n];
    for (i, &limb) in a.iter().enumerate() {
        fa[i] = Complex::new(limb as f64, 0.0);
    }
    for (i, &limb) in b.iter().enumerate() {
        fb[i] = Complex::new(limb as f64, 0.0);
    }

    transform(&mut fa, false);
    transform(&mut fb, false);
    for i in 0..n {
        fa[i] *= fb[i];
    }
    transform(&mut fa, true);

    carry_propagate(&fa)
}

/// In-place iterative radix-2 Cooley-Tukey transform: bit-reversal
/// permutation, then butterflies for `len = 2, 4, ..., n`. `invert`
/// selects the inverse transform (and divides by `n` at the end).
fn transform(a: &mut [Complex<f64>], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two());

    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut len = 2usize;
    while len <= n {
        let sigma = if invert { 1.0 } else { -1.0 };
        let ang = sigma * 2.0 * PI / len as f64;
        let w_len = Complex::new(ang.cos(), ang.sin());
        let mut block = 0usize;
        while block < n {
            let mut w = Complex::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = a[block + k];
                let v = a[block + k + len / 2] * w;
                a[block + k] = u + v;
                a[block + k + len / 2] = u - v;
                w *= w_len;
            }
            block += len;
        }
        len <<= 1;
    }

    if invert {
        for x in a.iter_mut() {
            *x /= n as f64;
        }
    }
}

/// Rounds each transformed value's real part to the nearest integer
/// and propagates carries in the internal base, trimming the result.
fn carry_propagate(values: &[Complex<f64>]) -> Digits {
    let mut out = Digits::with_capacity(values.len() + 1);
    let mut carry: i64 = 0;
    for value in values {
        let rounded = value.re.round() as i64 + carry;
        out.push(rounded.rem_euclid(BASE as i64) as u32);
        carry = rounded.div_euclid(BASE as i64);
    }
    while carry > 0 {
        out.push((carry % BASE as i64) as u32);
        carry /= BASE as i64;
    }
    digits::trimmed(out)
}
