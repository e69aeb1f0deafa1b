//! Pull rationals out of a `BufRead`, one after another.
//!
//! Bytes are taken one at a time. ASCII bytes become their `char`; every
//! byte >= 0x80 becomes U+FFFD, which is neither a digit, a `/`, nor
//! whitespace, so 0x85 or 0xA0 never act as separators. The
//! single pending slot holds the character handed back by `unread`, and is
//! served before the underlying buffer.

use std::io::{self, BufRead};

use log::{debug, trace};
use rat_core::text::skip_whitespace;
use rat_core::{read_rational, CharCursor, Rational};

use crate::{IoError, IoResult};

/// `CharCursor` over a buffered byte source.
#[derive(Debug)]
pub struct RationalReader<R> {
    inner: R,
    pending: Option<char>,
}

impl<R: BufRead> RationalReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pending: None }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Give back the source. A pushed-back character is dropped.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next rational.
    ///
    /// Returns `Ok(None)` when only whitespace remains. A non-`/` character
    /// after a whole number stays in the reader for the next call.
    pub fn read_next(&mut self) -> IoResult<Option<Rational>> {
        if skip_whitespace(self)? {
            return Ok(None);
        }
        match read_rational(self) {
            Ok(r) => {
                trace!("read rational {r}");
                Ok(Some(r))
            }
            Err(e) => {
                let e = IoError::from(e);
                debug!("rational read failed: {e}");
                Err(e)
            }
        }
    }

    /// Iterate over the remaining values. Stops after the first error.
    pub fn rationals(&mut self) -> Rationals<'_, R> {
        Rationals { reader: self, done: false }
    }

    /// Collect every remaining value, failing on the first bad one.
    pub fn read_all(&mut self) -> IoResult<Vec<Rational>> {
        self.rationals().collect()
    }

    fn fill_peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[inline]
fn byte_char(b: u8) -> char {
    if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER }
}

impl<R: BufRead> CharCursor for RationalReader<R> {
    type Error = io::Error;

    fn peek(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pending {
            return Ok(Some(c));
        }
        Ok(self.fill_peek()?.map(byte_char))
    }

    fn bump(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pending.take() {
            return Ok(Some(c));
        }
        let b = self.fill_peek()?;
        if b.is_some() {
            self.inner.consume(1);
        }
        Ok(b.map(byte_char))
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "only one character of pushback");
        self.pending = Some(c);
    }
}

/// Iterator returned by [`RationalReader::rationals`].
pub struct Rationals<'a, R> {
    reader: &'a mut RationalReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Rationals<'_, R> {
    type Item = IoResult<Rational>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_next() {
            Ok(Some(r)) => Some(Ok(r)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Rationals<'_, R> {}
