//! Checked arithmetic on `Rational`.
//!
//! The compound `try_*_assign` forms are primary. Each computes the full
//! canonical result before touching `self`, so a failed call leaves the
//! receiver unchanged. The binary forms copy the left operand and apply the
//! compound form.

use log::debug;

use crate::errors::RatError;
use crate::rational::{canonical, reduced, Rational};

#[inline]
fn wide(r: &Rational) -> (i128, i128) {
    (i128::from(r.numerator()), i128::from(r.denominator()))
}

fn logged(op: &'static str, res: Result<Rational, RatError>) -> Result<Rational, RatError> {
    res.inspect_err(|e| debug!("rational {op} failed: {e}"))
}

impl Rational {
    /// `self = self + rhs`
    pub fn try_add_assign(&mut self, rhs: Rational) -> Result<(), RatError> {
        let (an, ad) = wide(self);
        let (bn, bd) = wide(&rhs);
        *self = logged("add", reduced(an * bd + bn * ad, ad * bd))?;
        Ok(())
    }

    /// `self = self - rhs`
    pub fn try_sub_assign(&mut self, rhs: Rational) -> Result<(), RatError> {
        let (an, ad) = wide(self);
        let (bn, bd) = wide(&rhs);
        *self = logged("sub", reduced(an * bd - bn * ad, ad * bd))?;
        Ok(())
    }

    /// `self = self * rhs`
    pub fn try_mul_assign(&mut self, rhs: Rational) -> Result<(), RatError> {
        let (an, ad) = wide(self);
        let (bn, bd) = wide(&rhs);
        *self = logged("mul", reduced(an * bn, ad * bd))?;
        Ok(())
    }

    /// `self = self / rhs`; `DivisionByZero` when `rhs` is zero.
    ///
    /// The new denominator carries the sign of `rhs`, so this is the one
    /// operation that normalizes before reducing.
    pub fn try_div_assign(&mut self, rhs: Rational) -> Result<(), RatError> {
        if rhs.is_zero() {
            debug!("rational div failed: {}", RatError::DivisionByZero);
            return Err(RatError::DivisionByZero);
        }
        let (an, ad) = wide(self);
        let (bn, bd) = wide(&rhs);
        *self = logged("div", canonical(an * bd, ad * bn))?;
        Ok(())
    }

    pub fn try_add(self, rhs: Rational) -> Result<Rational, RatError> {
        let mut out = self;
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    pub fn try_sub(self, rhs: Rational) -> Result<Rational, RatError> {
        let mut out = self;
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn try_mul(self, rhs: Rational) -> Result<Rational, RatError> {
        let mut out = self;
        out.try_mul_assign(rhs)?;
        Ok(out)
    }

    pub fn try_div(self, rhs: Rational) -> Result<Rational, RatError> {
        let mut out = self;
        out.try_div_assign(rhs)?;
        Ok(out)
    }

    /// Unary minus. Fails only when the numerator is `i64::MIN`.
    pub fn try_neg(self) -> Result<Rational, RatError> {
        let n = self.numerator().checked_neg().ok_or(RatError::ArithmeticOverflow);
        logged("neg", n.map(|n| Rational::from_parts(n, self.denominator())))
    }

    /// Absolute value. Fails only when the numerator is `i64::MIN`.
    pub fn try_abs(self) -> Result<Rational, RatError> {
        let n = self.numerator().checked_abs().ok_or(RatError::ArithmeticOverflow);
        logged("abs", n.map(|n| Rational::from_parts(n, self.denominator())))
    }

    /// `den/num`; `DivisionByZero` for zero.
    pub fn try_recip(self) -> Result<Rational, RatError> {
        if self.is_zero() {
            return logged("recip", Err(RatError::DivisionByZero));
        }
        let (n, d) = wide(&self);
        logged("recip", canonical(d, n))
    }
}
