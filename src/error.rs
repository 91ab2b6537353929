//! # **Error Module** - Custom *BitArray* Error Type
//!
//! Defines the unified error type returned by fallible `BitArray` operations.
//!
//! ## Covers
//! - Type mismatches (wrong kind of constructor input, unknown endian), out-of-range
//! indices, malformed values (bad bit, bad slice step, absent search target), and
//! arithmetic overflow in `repeat`.
//! - Implements `Display` for readable output and `Error` for integration with
//! standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Catch-all error type for `BitArray`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BitArrayError {
    /// Constructor or iterator input was of an unsupported kind (e.g. a non-0/1
    /// integer in a bit iterator, or an unrecognised endian string).
    TypeMismatch,
    /// A bit or byte index fell outside `[0, len)` after negative-index wrapping.
    OutOfRange { index: isize, len: usize },
    /// A value failed a domain check: a bit not in `{0,1}`, an unparsable '0'/'1'
    /// character, a zero slice step, a length-mismatched extended-slice assignment,
    /// `pop` from an empty array, or a `remove`/`index` target that isn't present.
    BadValue(String),
    /// `repeat` would overflow the platform's index type.
    Overflow { op: &'static str },
}

impl fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitArrayError::TypeMismatch => {
                write!(f, "Type mismatch: unsupported argument kind.")
            }
            BitArrayError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}.", index, len)
            }
            BitArrayError::BadValue(msg) => write!(f, "Invalid value: {}", msg),
            BitArrayError::Overflow { op } => {
                write!(f, "Overflow: '{}' exceeds the platform index limit.", op)
            }
        }
    }
}

impl Error for BitArrayError {}
