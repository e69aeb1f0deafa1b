//! Write rationals as `n/d` text.

use std::io::Write;

use rat_core::Rational;

use crate::{IoError, IoResult};

/// Write `r` as `numerator/denominator` (whole numbers keep their `/1`).
pub fn write_rational<W: Write + ?Sized>(out: &mut W, r: &Rational) -> IoResult<()> {
    write!(out, "{r}").map_err(IoError::Write)
}

/// Write each value, with `sep` between consecutive values.
pub fn write_rationals<'a, W, I>(out: &mut W, values: I, sep: &str) -> IoResult<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Rational>,
{
    for (i, r) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes()).map_err(IoError::Write)?;
        }
        write_rational(out, r)?;
    }
    Ok(())
}
