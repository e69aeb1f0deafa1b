//! Text grammar `rational := integer ['/' integer]`.
//!
//! Reading is expressed against `CharCursor`, a pull source with one
//! character of pushback. After the leading integer the reader consumes one
//! candidate separator; anything other than `/` is handed back through
//! `unread` so the next read starts at it. Whitespace is skipped before each
//! integer and before the separator.
//!
//! Output is always `numerator/denominator`, whole numbers included.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::errors::RatError;
use crate::rational::Rational;

/// Character source with `peek`, `bump` and a single-slot `unread`.
pub trait CharCursor {
    /// Failure of the underlying source (never a grammar error).
    type Error;

    fn peek(&mut self) -> Result<Option<char>, Self::Error>;

    fn bump(&mut self) -> Result<Option<char>, Self::Error>;

    /// Push back the character most recently returned by `bump`.
    fn unread(&mut self, c: char);
}

/// Failure while reading from a cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReadError<E> {
    /// The cursor's own source failed.
    Source(E),
    /// Malformed text, or a well-formed value that cannot be constructed.
    Rational(RatError),
}

impl<E> From<RatError> for ReadError<E> {
    fn from(e: RatError) -> Self { ReadError::Rational(e) }
}

impl ReadError<Infallible> {
    /// Infallible sources can only fail on the text itself.
    pub fn into_rat_error(self) -> RatError {
        match self {
            ReadError::Rational(e) => e,
            ReadError::Source(never) => match never {},
        }
    }
}

impl<E: fmt::Display> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Source(e) => write!(f, "source error: {e}"),
            ReadError::Rational(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for ReadError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Source(e) => Some(e),
            ReadError::Rational(e) => Some(e),
        }
    }
}

/* --------------------------------- Cursor --------------------------------- */

/// Cursor over a borrowed string; `unread` rewinds the position.
#[derive(Clone, Debug)]
pub struct StrCursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> StrCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Unread remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Byte offset of the next character.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl CharCursor for StrCursor<'_> {
    type Error = Infallible;

    fn peek(&mut self) -> Result<Option<char>, Infallible> {
        Ok(self.rest().chars().next())
    }

    fn bump(&mut self) -> Result<Option<char>, Infallible> {
        let c = self.rest().chars().next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        Ok(c)
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.src[..self.pos].ends_with(c), "unread of a char not just bumped");
        self.pos -= c.len_utf8();
    }
}

/* --------------------------------- Reading -------------------------------- */

#[inline]
fn peek<C: CharCursor + ?Sized>(cur: &mut C) -> Result<Option<char>, ReadError<C::Error>> {
    cur.peek().map_err(ReadError::Source)
}

#[inline]
fn bump<C: CharCursor + ?Sized>(cur: &mut C) -> Result<Option<char>, ReadError<C::Error>> {
    cur.bump().map_err(ReadError::Source)
}

/// Consume whitespace; returns `true` when the source is exhausted.
pub fn skip_whitespace<C: CharCursor + ?Sized>(cur: &mut C) -> Result<bool, C::Error> {
    while let Some(c) = cur.peek()? {
        if !c.is_whitespace() {
            return Ok(false);
        }
        cur.bump()?;
    }
    Ok(true)
}

/// Optional sign then one or more ASCII digits, accumulated with overflow
/// checks. Negative values accumulate downward so `i64::MIN` is readable.
fn read_integer<C: CharCursor + ?Sized>(
    cur: &mut C,
    missing: &'static str,
) -> Result<i64, ReadError<C::Error>> {
    skip_whitespace(cur).map_err(ReadError::Source)?;

    let negative = match peek(cur)? {
        Some(c @ ('-' | '+')) => {
            bump(cur)?;
            c == '-'
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    while let Some(d) = peek(cur)?.and_then(|c| c.to_digit(10)) {
        bump(cur)?;
        let d = i64::from(d);
        value = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) })
            .ok_or(RatError::ParseFailure("integer out of range"))?;
        digits += 1;
    }

    if digits == 0 {
        return Err(RatError::ParseFailure(missing).into());
    }
    Ok(value)
}

/// Read one rational from `cur`.
///
/// - `n` alone (end of input, or a non-`/` character next) is `n/1`; the
///   non-`/` character is pushed back.
/// - `n/d` is constructed with `Rational::new`, so `d == 0` surfaces as
///   `InvalidArgument`.
/// - A missing numerator, or a missing denominator after `/`, is a
///   `ParseFailure`.
pub fn read_rational<C: CharCursor + ?Sized>(
    cur: &mut C,
) -> Result<Rational, ReadError<C::Error>> {
    let n = read_integer(cur, "expected integer")?;

    skip_whitespace(cur).map_err(ReadError::Source)?;
    match bump(cur)? {
        Some('/') => {
            let d = read_integer(cur, "expected denominator after '/'")?;
            Ok(Rational::new(n, d)?)
        }
        Some(other) => {
            cur.unread(other);
            Ok(Rational::integer(n))
        }
        None => Ok(Rational::integer(n)),
    }
}

/* ------------------------------ Std traits ------------------------------- */

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl FromStr for Rational {
    type Err = RatError;

    /// Whole-string parse: one rational, optional surrounding whitespace,
    /// nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = StrCursor::new(s);
        let value = read_rational(&mut cur).map_err(ReadError::into_rat_error)?;
        match skip_whitespace(&mut cur) {
            Ok(true) => Ok(value),
            Ok(false) => Err(RatError::ParseFailure("trailing characters")),
            Err(never) => match never {},
        }
    }
}
