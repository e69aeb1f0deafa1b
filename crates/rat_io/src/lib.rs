//! crates/rat_io/src/lib.rs
//! Rationals on std byte streams.
//!
//! - `RationalReader` adapts any `BufRead` to `rat_core::CharCursor`, so the
//!   core grammar runs unchanged against files, stdin, or in-memory buffers.
//! - Writers emit the exact `n/d` text produced by `Display`.
//! - Shared error type (`IoError`) with `From` conversions for the layers below.

#![forbid(unsafe_code)]

use rat_core::{RatError, ReadError};
use thiserror::Error;

/// Unified error for rat_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// The underlying writer failed.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// Malformed text, or a value the core type rejects.
    #[error(transparent)]
    Rational(#[from] RatError),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<ReadError<std::io::Error>> for IoError {
    fn from(e: ReadError<std::io::Error>) -> Self {
        match e {
            ReadError::Source(e) => IoError::Read(e),
            ReadError::Rational(e) => IoError::Rational(e),
        }
    }
}

pub mod reader;
pub mod writer;

pub use reader::{RationalReader, Rationals};
pub use writer::{write_rational, write_rationals};

pub mod prelude {
    pub use crate::{IoError, IoResult, RationalReader, Rationals, write_rational, write_rationals};
    pub use rat_core::{RatError, Rational};
}
