//! rat_core — exact rational numbers kept in canonical form.
//!
//! This crate is **I/O-free**. It defines the value type and everything that
//! only needs the value itself:
//!
//! - `Rational`: `i64` numerator/denominator, always reduced, sign on top
//! - `gcd`: Euclid on magnitudes
//! - Checked arithmetic (`try_add`, `try_div_assign`, …) that never wraps
//! - Total ordering via widened cross-multiplication
//! - Text grammar `integer ['/' integer]` over a pushback cursor
//!
//! Serialization impls are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod errors {
    use core::fmt;

    /// Every distinguishable failure of the value type.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum RatError {
        /// Construction with a zero denominator.
        InvalidArgument(&'static str),
        /// Division by a value whose numerator is zero.
        DivisionByZero,
        /// The canonical result does not fit in `i64`.
        ArithmeticOverflow,
        /// Malformed text.
        ParseFailure(&'static str),
    }

    impl fmt::Display for RatError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                RatError::InvalidArgument(m) => write!(f, "invalid argument: {m}"),
                RatError::DivisionByZero => write!(f, "divide by zero"),
                RatError::ArithmeticOverflow => write!(f, "arithmetic overflow"),
                RatError::ParseFailure(m) => write!(f, "parse failure: {m}"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for RatError {}
}

pub mod gcd {
    //! Greatest common divisor (Euclid).

    /// `gcd(|n|, |m|)`, never negative; `gcd(n, 0) == |n|`.
    ///
    /// Returned unsigned so that `gcd(i64::MIN, 0)` (which is `2^63`) fits.
    pub fn gcd(n: i64, m: i64) -> u64 {
        let (mut a, mut b) = (n.unsigned_abs(), m.unsigned_abs());
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    /// Same algorithm on the widened magnitudes used by canonicalization.
    pub(crate) fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

}

pub mod rational;
mod arith;
pub mod text;

#[cfg(feature = "serde")]
mod serde_impl;

pub use errors::RatError;
pub use gcd::gcd;
pub use rational::Rational;
pub use text::{read_rational, CharCursor, ReadError, StrCursor};
