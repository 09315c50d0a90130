//! Arbitrary-precision signed-integer arithmetic.
//!
//! The core is a suite of large-integer multiplication and division
//! algorithms — classical schoolbook, Karatsuba, Toom-Cook-3, complex
//! FFT convolution, and Knuth's Algorithm D long division — that all
//! agree on every output across the full range of operand sizes. The
//! [`BigInt`] type is the public façade; everything else in this
//! crate operates on raw little-endian digit vectors in the internal
//! base ([`dispatch::BASE`]).
//!
//! ```
//! use bigints::BigInt;
//!
//! let a = BigInt::parse("99999999999999999999");
//! let b = BigInt::from_i64(1);
//! assert_eq!((&a + &b).to_string(), "100000000000000000000");
//! ```

mod addsub;
mod base_conv;
mod bigint;
mod cmp;
mod digits;
mod dispatch;
mod error;
mod fft;
mod karatsuba;
mod muldiv;
mod parse;
mod shift;
mod toom3;


pub use bigint::{BigInt, Sign};
pub use error::ArithmeticError;
