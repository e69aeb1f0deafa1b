//! The canonical rational value.
//!
//! Every observable `Rational` satisfies:
//! - `denominator > 0`
//! - `gcd(|numerator|, denominator) == 1`, so zero is exactly `0/1`
//!
//! Construction and arithmetic work on `i128` intermediates: normalize the
//! sign, reduce by the GCD, then narrow back to `i64`. Only a canonical
//! result that does not fit is reported as `ArithmeticOverflow`.

use core::cmp::Ordering;

use crate::errors::RatError;
use crate::gcd::gcd_u128;

/// Exact ratio of two `i64`s with normalized sign and positive denominator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational { numerator: 0, denominator: 1 };
    pub const ONE: Rational = Rational { numerator: 1, denominator: 1 };

    /// Construct `num/den` in canonical form.
    ///
    /// A negative `den` moves its sign onto the numerator. Fails with
    /// `InvalidArgument` when `den == 0`, and with `ArithmeticOverflow` when
    /// the reduced value is not representable (e.g. `i64::MIN / -1`).
    pub fn new(num: i64, den: i64) -> Result<Self, RatError> {
        if den == 0 {
            return Err(RatError::InvalidArgument("zero denominator"));
        }
        canonical(i128::from(num), i128::from(den))
    }

    /// Whole number `k/1`.
    #[inline]
    pub const fn integer(k: i64) -> Self {
        Self { numerator: k, denominator: 1 }
    }

    /// Parts already known to be canonical, e.g. a sign flip of a canonical
    /// value. Not checked outside debug builds.
    #[inline]
    pub(crate) fn from_parts(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0);
        Self { numerator, denominator }
    }

    #[inline]
    pub const fn numerator(&self) -> i64 { self.numerator }

    #[inline]
    pub const fn denominator(&self) -> i64 { self.denominator }

    /// Overwrite with the whole number `k/1` (already canonical).
    pub fn set_integer(&mut self, k: i64) {
        self.numerator = k;
        self.denominator = 1;
    }

    #[inline]
    pub const fn is_zero(&self) -> bool { self.numerator == 0 }

    #[inline]
    pub const fn is_integer(&self) -> bool { self.denominator == 1 }

    /// `-1`, `0` or `1`.
    #[inline]
    pub const fn signum(&self) -> i64 { self.numerator.signum() }

    /// `numerator / denominator` in `f64`; no precision check.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `numerator / denominator` in `f32`; no precision check.
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }
}

impl Default for Rational {
    fn default() -> Self { Rational::ZERO }
}

impl From<i64> for Rational {
    fn from(k: i64) -> Self { Rational::integer(k) }
}

impl From<i32> for Rational {
    fn from(k: i32) -> Self { Rational::integer(i64::from(k)) }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RatError;
    fn try_from((num, den): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::new(num, den)
    }
}

impl Ord for Rational {
    /// `a < b` iff `a.num * b.den < b.num * a.den`; both denominators are
    /// positive, and the `i128` products cannot overflow.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ----------------------------- Canonicalization ----------------------------- */

/// Move a negative denominator's sign onto the numerator.
pub(crate) fn normalize(num: i128, den: i128) -> Result<(i128, i128), RatError> {
    if den < 0 {
        let n = num.checked_neg().ok_or(RatError::ArithmeticOverflow)?;
        let d = den.checked_neg().ok_or(RatError::ArithmeticOverflow)?;
        Ok((n, d))
    } else {
        Ok((num, den))
    }
}

/// Divide both parts by their GCD. Expects `den > 0`.
pub(crate) fn reduce(num: i128, den: i128) -> (i128, i128) {
    let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
    debug_assert!(g != 0, "reduce on 0/0");
    // g divides den, and |den| <= i128::MAX here.
    let g = g as i128;
    (num / g, den / g)
}

/// Narrow an already canonical pair back to `i64`.
fn narrow(num: i128, den: i128) -> Result<Rational, RatError> {
    let numerator = i64::try_from(num).map_err(|_| RatError::ArithmeticOverflow)?;
    let denominator = i64::try_from(den).map_err(|_| RatError::ArithmeticOverflow)?;
    Ok(Rational { numerator, denominator })
}

/// Reduce and narrow a pair whose denominator is already positive.
pub(crate) fn reduced(num: i128, den: i128) -> Result<Rational, RatError> {
    debug_assert!(den > 0);
    let (n, d) = reduce(num, den);
    narrow(n, d)
}

/// Normalize, reduce, narrow. `den` must be non-zero.
pub(crate) fn canonical(num: i128, den: i128) -> Result<Rational, RatError> {
    debug_assert!(den != 0);
    let (n, d) = normalize(num, den)?;
    reduced(n, d)
}
