//! Small local traits shared across the crate.

use crate::bitarray::BitArray;
use crate::error::BitArrayError;

/// Consuming concatenation, mirroring the `+` operator but usable in
/// generic/fallible contexts.
pub trait Concatenate {
    fn concat(self, other: Self) -> Result<Self, BitArrayError>
    where
        Self: Sized;
}

impl Concatenate for BitArray {
    fn concat(mut self, other: Self) -> Result<Self, BitArrayError> {
        self.extend_bitarray(&other);
        Ok(self)
    }
}
