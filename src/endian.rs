//! # Endian Module
//!
//! Defines the intra-byte bit-ordering used by a [`crate::BitArray`], and the
//! process-wide default that unqualified constructors fall back to.
//!
//! ## Behaviour
//! - `Endian` governs only which physical bit of a byte corresponds to logical
//! bit `0..8` of that byte. It never reorders bytes.
//! - The default is a single mutable, process-wide setting (initial value `Big`),
//! read once at construction time by any `BitArray` built with [`EndianArg::Default`].

use std::sync::atomic::{AtomicU8, Ordering};

/// Intra-byte bit order.
///
/// - `Little`: bit `k` of a byte is selected by `1 << k` (bit 0 is the LSB).
/// - `Big`: bit `k` of a byte is selected by `1 << (7 - k)` (bit 0 is the MSB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    fn as_u8(self) -> u8 {
        match self {
            Endian::Little => 0,
            Endian::Big => 1,
        }
    }

    #[inline]
    fn from_u8(v: u8) -> Self {
        if v == 0 { Endian::Little } else { Endian::Big }
    }

    /// Mask selecting the first (lowest logical index) `k` bits of a byte under
    /// this endian, `k` in `0..=8`.
    #[inline]
    pub fn head_mask(self, k: u32) -> u8 {
        debug_assert!(k <= 8);
        if k == 0 {
            return 0;
        }
        if k == 8 {
            return 0xFF;
        }
        match self {
            Endian::Little => (1u8 << k) - 1,
            Endian::Big => (0xFFu16 << (8 - k)) as u8,
        }
    }
}

/// Endian selection accepted by `BitArray` constructors: either a concrete
/// endian, or a sentinel that reads the process-wide default at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndianArg {
    Default,
    Exact(Endian),
}

impl EndianArg {
    #[inline]
    pub fn resolve(self) -> Endian {
        match self {
            EndianArg::Exact(e) => e,
            EndianArg::Default => default_endian(),
        }
    }
}

impl From<Endian> for EndianArg {
    fn from(e: Endian) -> Self {
        EndianArg::Exact(e)
    }
}

static DEFAULT_ENDIAN: AtomicU8 = AtomicU8::new(1); // Endian::Big

/// Reads the current process-wide default endian.
#[inline]
pub fn default_endian() -> Endian {
    Endian::from_u8(DEFAULT_ENDIAN.load(Ordering::Relaxed))
}

/// Sets the process-wide default endian. Affects only `BitArray`s constructed
/// afterwards with [`EndianArg::Default`]; existing instances are unaffected.
#[inline]
pub fn set_default_endian(e: Endian) {
    DEFAULT_ENDIAN.store(e.as_u8(), Ordering::Relaxed);
}
