//! # **BitArray** – A Byte-Packed Mutable Bit Sequence
//!
//! A compact, growable container of single-bit values, packed 8-to-a-byte,
//! with a configurable intra-byte bit order and in-place region operations
//! (copy, shift, insert, delete, repeat) implemented without per-bit
//! reallocation.
//!
//! ## Key Features
//! - Two intra-byte bit orderings (`Endian::Little`, `Endian::Big`); byte
//! order itself is never touched.
//! - In-place region engine: `insert_n`/`delete_n`/`repeat`/`setrange` operate
//! on whole bytes wherever alignment allows it, falling back to per-bit
//! writes only at the edges of a range.
//! - `Vec64`-backed storage for 64-byte SIMD alignment.
//! - Minimal dependency footprint; optional `rayon`-backed parallel counting
//! behind the `parallel_proc` feature.
//!
//! ## Example
//! ```
//! use bitarray::{BitArray, Endian, EndianArg};
//!
//! let mut a = BitArray::from_str01("1101_0010", EndianArg::Exact(Endian::Big)).unwrap();
//! a.insert(4, true).unwrap();
//! assert_eq!(a.to01(), "110110010");
//! assert_eq!(a.count(true, 0, a.len() as isize, 1).unwrap(), 5);
//! ```

mod bitarray;
mod endian;
mod error;
mod macros;
mod region;
mod slice;
mod tables;
mod traits;

pub use bitarray::{wrap_index, BitArray};
pub use endian::{default_endian, set_default_endian, Endian, EndianArg};
pub use error::BitArrayError;
pub use slice::{slice_indices, ResolvedSlice, SliceSpec};
pub use traits::Concatenate;
