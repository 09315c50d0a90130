//! Multiplication dispatcher (component G) and the crate-wide
//! constants every kernel is built against.

use crate::digits::{self, Digits};
use crate::{fft, karatsuba, muldiv, toom3};

/// Internal base B = 10^4. Chosen small enough that the FFT kernel's
/// convolution sum stays within `f64`'s exact-integer range for any
/// operand length this crate can hold in memory — see
/// [`crate::fft::is_precision_safe`].
pub const BASE: u32 = 10_000;

/// Decimal digits grouped per limb while parsing/formatting (`10^9`
/// fits the `u64` accumulator used during base conversion).
pub const PARSE_GROUP_DIGITS: usize = 9;

/// Below this combined limb count (`|a| + |b|`), classical schoolbook
/// multiplication is used directly.
pub const KARATSUBA_THRESHOLD: usize = 64;

/// Below this combined limb count, Karatsuba is used.
pub const TOOM3_THRESHOLD: usize = 256;

/// Below this combined limb count, Toom-Cook-3 is used; above it, FFT
/// convolution (subject to its own precision precondition).
pub const FFT_THRESHOLD: usize = 700;

/// Chooses classical, Karatsuba, Toom-3, or FFT multiplication by the
/// combined operand length, with single-digit short-circuits.
pub fn mul(a: &[u32], b: &[u32]) -> Digits {
    if digits::is_zero(a) || digits::is_zero(b) {
        return Digits::new();
    }
    if b.len() == 1 {
        return muldiv::mul_scalar(a, b[0]);
    }
    if a.len() == 1 {
        return muldiv::mul_scalar(b, a[0]);
    }

    let n = a.len() + b.len();
    if n <= KARATSUBA_THRESHOLD {
        muldiv::mul(a, b)
    } else if n <= TOOM3_THRESHOLD {
        karatsuba::mul(a, b)
    } else if n <= FFT_THRESHOLD {
        toom3::mul(a, b)
    } else {
        fft::mul(a, b)
    }
}
