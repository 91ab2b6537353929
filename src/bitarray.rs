//! # BitArray Module
//!
//! Mutable, byte-packed bit-sequence container.
//!
//! ## Purpose
//! - A growable sequence of single-bit values with indexing, slicing, search,
//! counting, comparison, and byte/string packing, for any workload that wants
//! a compact bitset without reaching for arithmetic-on-integers semantics.
//!
//! ## Behaviour
//! - Storage is one bit per logical element, packed 8-to-a-byte; which
//! physical bit of a byte is "first" is controlled by [`Endian`] and fixed
//! for the life of the instance.
//! - Trailing pad bits in the last byte are left unspecified by most mutating
//! operations and are only normalised (zeroed) by observers that expose the
//! raw byte buffer (`tobytes`, equality).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Deref, DerefMut, Index, Mul, MulAssign, Not};

use vec64::Vec64;

use crate::endian::{Endian, EndianArg};
use crate::error::BitArrayError;
use crate::slice::{slice_indices, SliceSpec};

/// An ordered sequence of bits, packed 8-to-a-byte, with a fixed intra-byte
/// bit order chosen at construction.
///
/// # Example
/// ```
/// use bitarray::{BitArray, Endian, EndianArg};
///
/// let mut a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Big)).unwrap();
/// assert_eq!(a.tolist(), vec![true, true, false, true]);
/// a.append(false);
/// assert_eq!(a.to01(), "11010");
/// ```
#[derive(Clone)]
pub struct BitArray {
    pub(crate) n: usize,
    pub(crate) buf: Vec64<u8>,
    pub(crate) endian: Endian,
}

impl BitArray {
    /// A length-`k` bit array with every bit cleared.
    pub fn zeros(k: usize, endian: EndianArg) -> Self {
        let nbytes = (k + 7) / 8;
        let mut buf = Vec64::with_capacity(nbytes);
        buf.resize(nbytes, 0u8);
        BitArray {
            n: k,
            buf,
            endian: endian.resolve(),
        }
    }

    /// An empty bit array.
    pub fn empty(endian: EndianArg) -> Self {
        Self::zeros(0, endian)
    }

    /// Parses a '0'/'1' digit string into a bit array. `_`, space, tab, LF,
    /// CR and VT are ignored; any other character is a [`BitArrayError::BadValue`].
    pub fn from_str01(s: &str, endian: EndianArg) -> Result<Self, BitArrayError> {
        let mut out = Self::empty(endian);
        out.extend_str(s)?;
        Ok(out)
    }

    /// Builds a bit array bit-by-bit from a source of booleans.
    pub fn from_bits(iter: impl IntoIterator<Item = bool>, endian: EndianArg) -> Self {
        let mut out = Self::empty(endian);
        out.extend_bits(iter);
        out
    }

    /// Builds a bit array from a source of 0/1 integers; any other value is a
    /// [`BitArrayError::TypeMismatch`], leaving the array empty.
    pub fn from_ints(
        iter: impl IntoIterator<Item = i32>,
        endian: EndianArg,
    ) -> Result<Self, BitArrayError> {
        let mut out = Self::empty(endian);
        out.extend_ints(iter)?;
        Ok(out)
    }

    // -- bit accessor layer -------------------------------------------------

    /// Reads the bit at logical index `i` (no bounds check beyond the
    /// physical buffer; callers working through the public container-surface
    /// methods always stay within `[0, n)`).
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        let byte = self.buf[i / 8];
        let k = i % 8;
        match self.endian {
            Endian::Little => (byte >> k) & 1 != 0,
            Endian::Big => (byte >> (7 - k)) & 1 != 0,
        }
    }

    /// Writes the bit at logical index `i`.
    #[inline]
    pub fn set(&mut self, i: usize, v: bool) {
        let k = i % 8;
        let mask = match self.endian {
            Endian::Little => 1u8 << k,
            Endian::Big => 1u8 << (7 - k),
        };
        let byte = &mut self.buf[i / 8];
        if v {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// The last storage byte with trailing pad bits masked to zero, without
    /// mutating the buffer.
    pub fn zeroed_last_byte(&self) -> u8 {
        if self.buf.is_empty() {
            return 0;
        }
        let last = *self.buf.last().unwrap();
        let rem = (self.n % 8) as u32;
        if rem == 0 {
            last
        } else {
            last & self.endian.head_mask(rem)
        }
    }

    /// Zeroes the pad bits in place and returns how many there are.
    pub fn setunused(&mut self) -> usize {
        let pad = self.buf.len() * 8 - self.n;
        if pad != 0 {
            let last = self.buf.len() - 1;
            let rem = (self.n % 8) as u32;
            self.buf[last] &= self.endian.head_mask(rem);
        }
        pad
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Deep copy of bits and endian (equivalent to `Clone::clone`).
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // -- extend dispatch ------------------------------------------------

    /// Appends one bit.
    pub fn append(&mut self, v: bool) {
        let i = self.n;
        self.resize_bits(i + 1);
        self.set(i, v);
    }

    /// Appends another array's bits in full (aligned region append).
    pub fn extend_bitarray(&mut self, other: &BitArray) {
        let start = self.n;
        self.resize_bits(self.n + other.n);
        self.copy_from(start, other, 0, other.n);
    }

    /// Parses and appends a '0'/'1' digit string; on a parse error the array
    /// is restored to its pre-call length.
    pub fn extend_str(&mut self, s: &str) -> Result<(), BitArrayError> {
        let orig_n = self.n;
        for ch in s.chars() {
            match ch {
                '0' => self.append(false),
                '1' => self.append(true),
                '_' | ' ' | '\t' | '\n' | '\r' | '\x0b' => continue,
                c => {
                    self.resize_bits(orig_n);
                    return Err(BitArrayError::BadValue(format!(
                        "invalid character '{}' in bit string",
                        c
                    )));
                }
            }
        }
        Ok(())
    }

    /// Appends bits one at a time from a boolean source.
    pub fn extend_bits(&mut self, iter: impl IntoIterator<Item = bool>) {
        for b in iter {
            self.append(b);
        }
    }

    /// Appends bits one at a time from a 0/1 integer source; on an invalid
    /// element the array is restored to its pre-call length.
    pub fn extend_ints(&mut self, iter: impl IntoIterator<Item = i32>) -> Result<(), BitArrayError> {
        let orig_n = self.n;
        for x in iter {
            match x {
                0 => self.append(false),
                1 => self.append(true),
                _ => {
                    self.resize_bits(orig_n);
                    return Err(BitArrayError::TypeMismatch);
                }
            }
        }
        Ok(())
    }

    // -- mutation -----------------------------------------------------------

    /// Inserts one bit of value `v` at index `i` (`i` may be negative to
    /// index from the end; `i == len()` appends).
    pub fn insert(&mut self, i: isize, v: bool) -> Result<(), BitArrayError> {
        let pos = wrap_index_inclusive(i, self.n)?;
        self.insert_n(pos, 1);
        self.set(pos, v);
        Ok(())
    }

    /// Removes and returns the bit at index `i` (negative indices wrap).
    pub fn pop(&mut self, i: isize) -> Result<bool, BitArrayError> {
        if self.n == 0 {
            return Err(BitArrayError::BadValue("pop from empty bitarray".into()));
        }
        let pos = wrap_index(i, self.n)?;
        let v = self.get(pos);
        self.delete_n(pos, 1);
        Ok(v)
    }

    /// Removes the first occurrence of `v`; errors if absent.
    pub fn remove(&mut self, v: bool) -> Result<(), BitArrayError> {
        match self.find_bit(v, 0, self.n) {
            Some(i) => {
                self.delete_n(i, 1);
                Ok(())
            }
            None => Err(BitArrayError::BadValue(format!(
                "{} not in bitarray",
                v as u8
            ))),
        }
    }

    /// Flips every bit (`i` is `None`), or flips a single bit at `i`.
    pub fn invert(&mut self, i: Option<usize>) -> Result<(), BitArrayError> {
        match i {
            None => {
                for b in self.buf.iter_mut() {
                    *b ^= 0xFF;
                }
            }
            Some(idx) => {
                if idx >= self.n {
                    return Err(BitArrayError::OutOfRange {
                        index: idx as isize,
                        len: self.n,
                    });
                }
                let cur = self.get(idx);
                self.set(idx, !cur);
            }
        }
        Ok(())
    }

    /// Reverses bit order via two-pointer swap.
    pub fn reverse(&mut self) {
        if self.n == 0 {
            return;
        }
        let (mut i, mut j) = (0usize, self.n - 1);
        while i < j {
            let a = self.get(i);
            let b = self.get(j);
            self.set(i, b);
            self.set(j, a);
            i += 1;
            j -= 1;
        }
    }

    /// Non-mutating convenience wrapping [`Self::reverse`].
    pub fn reversed(&self) -> Self {
        let mut out = self.clone();
        out.reverse();
        out
    }

    /// Non-mutating convenience wrapping [`Self::invert`] with `i = None`.
    pub fn inverted(&self) -> Self {
        let mut out = self.clone();
        out.invert(None).expect("whole-array invert cannot fail");
        out
    }

    /// Counting sort: all zeros (or all ones, if `reverse`) first.
    pub fn sort(&mut self, reverse: bool) {
        let ones = self.count_range(true, 0, self.n);
        let zeros = self.n - ones;
        if reverse {
            self.setrange(0, ones, true);
            self.setrange(ones, self.n, false);
        } else {
            self.setrange(0, zeros, false);
            self.setrange(zeros, self.n, true);
        }
    }

    /// Memsets the entire buffer to all-set or all-clear.
    pub fn setall(&mut self, v: bool) {
        let fill = if v { 0xFFu8 } else { 0u8 };
        self.buf.fill(fill);
    }

    /// Zeroes pad bits and grows `n` to the next multiple of 8; returns the
    /// number of pad bits added.
    pub fn fill(&mut self) -> usize {
        let pad = (8 - self.n % 8) % 8;
        if pad == 0 {
            return 0;
        }
        let start = self.n;
        self.resize_bits(self.n + pad);
        self.setrange(start, self.n, false);
        pad
    }

    /// `true` iff no bit is clear.
    pub fn all(&self) -> bool {
        self.find_bit(false, 0, self.n).is_none()
    }

    /// `true` iff at least one bit is set.
    pub fn any(&self) -> bool {
        self.find_bit(true, 0, self.n).is_some()
    }

    // -- slice-aware count/search/contains -----------------------------------

    /// Counts occurrences of `v` in the slice `start..stop` stepping by
    /// `step` (`step == 0` is an error). `start`/`stop` follow slice-index
    /// semantics: negative values wrap from the end, out-of-range values
    /// clamp, and a negative `step` walks the slice in reverse — since only
    /// the selected *set* of bits matters for a count, it is resolved to an
    /// equivalent ascending range via [`slice_indices`].
    pub fn count(&self, v: bool, start: isize, stop: isize, step: isize) -> Result<usize, BitArrayError> {
        let resolved = slice_indices(SliceSpec::new(Some(start), Some(stop), step), self.n, true)?;
        if resolved.len == 0 {
            return Ok(0);
        }
        let start = resolved.start as usize;
        let stop = resolved.stop as usize;
        if resolved.step == 1 {
            return Ok(self.count_range(v, start, stop));
        }
        let step = resolved.step as usize;
        let mut c = 0usize;
        let mut i = start;
        while i < stop {
            if self.get(i) == v {
                c += 1;
            }
            i += step;
        }
        Ok(c)
    }

    /// Index of the first `v` at or after `start`, errors if absent.
    pub fn index_bit(&self, v: bool, start: usize, stop: usize) -> Result<usize, BitArrayError> {
        self.find_bit(v, start, stop.min(self.n))
            .ok_or_else(|| BitArrayError::BadValue(format!("{} not found", v as u8)))
    }

    /// Index of the first occurrence of `pattern` at or after `start`,
    /// errors if absent.
    pub fn index_pattern(
        &self,
        pattern: &BitArray,
        start: usize,
        stop: usize,
    ) -> Result<usize, BitArrayError> {
        self.find(pattern, start, stop.min(self.n))
            .ok_or_else(|| BitArrayError::BadValue("pattern not found".into()))
    }

    pub fn contains_bit(&self, v: bool) -> bool {
        self.find_bit(v, 0, self.n).is_some()
    }

    pub fn contains(&self, pattern: &BitArray) -> bool {
        self.find(pattern, 0, self.n).is_some()
    }

    // -- byte/string conversions ----------------------------------------------

    /// Underlying bytes with pad bits zeroed; length `ceil(n/8)`.
    pub fn tobytes(&self) -> Vec64<u8> {
        let mut out = self.buf.clone();
        if !out.is_empty() {
            let rem = (self.n % 8) as u32;
            let last = out.len() - 1;
            if rem != 0 {
                out[last] &= self.endian.head_mask(rem);
            }
        }
        out
    }

    /// Appends `8 * data.len()` bits from raw bytes; if `n` is not currently
    /// byte-aligned, pads to alignment, appends, then removes the pad gap so
    /// the final bit sequence is contiguous.
    pub fn frombytes(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let pad = (8 - self.n % 8) % 8;
        let gap_start = self.n;
        if pad != 0 {
            self.resize_bits(self.n + pad);
        }
        let append_start = self.n;
        self.resize_bits(self.n + data.len() * 8);
        let byte_off = append_start / 8;
        self.buf[byte_off..byte_off + data.len()].copy_from_slice(data);
        if pad != 0 {
            self.delete_n(gap_start, pad);
        }
    }

    /// Appends one bit per input byte (`0x00` -> `false`, anything else ->
    /// `true`).
    pub fn pack(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.append(b != 0);
        }
    }

    /// Produces one output byte per bit, using caller-chosen encodings.
    pub fn unpack(&self, zero: u8, one: u8) -> Vec<u8> {
        (0..self.n)
            .map(|i| if self.get(i) { one } else { zero })
            .collect()
    }

    pub fn to01(&self) -> String {
        (0..self.n).map(|i| if self.get(i) { '1' } else { '0' }).collect()
    }

    pub fn tolist(&self) -> Vec<bool> {
        (0..self.n).map(|i| self.get(i)).collect()
    }

    // -- slicing ----------------------------------------------------------

    /// Returns a new array holding the bits selected by `start..stop` (step),
    /// in visiting order. `start`/`stop` follow slice-index semantics:
    /// negative values wrap from the end and out-of-range values clamp. A
    /// negative `step` walks backwards, producing the corresponding reversed
    /// selection (an out-of-range negative `stop`, e.g. `isize::MIN`, clamps
    /// to "before index 0" and so selects through the start of the array).
    pub fn slice(&self, start: isize, stop: isize, step: isize) -> Result<Self, BitArrayError> {
        let resolved = slice_indices(SliceSpec::new(Some(start), Some(stop), step), self.n, false)?;
        let mut out = BitArray::empty(EndianArg::Exact(self.endian));
        if resolved.len == 0 {
            return Ok(out);
        }
        if resolved.step == 1 {
            let start = resolved.start as usize;
            let n = resolved.len;
            out.resize_bits(n);
            out.copy_from(0, self, start, n);
            return Ok(out);
        }
        let mut idx = resolved.start;
        for _ in 0..resolved.len {
            out.append(self.get(idx as usize));
            idx += resolved.step;
        }
        Ok(out)
    }

    /// Assigns `value`'s bits into the slice `start..stop` (step). For
    /// `step == 1`, the destination is resized to match `value`'s length
    /// (insert/delete) before copying; for `step != 1` the lengths must
    /// already match.
    pub fn set_slice(
        &mut self,
        start: usize,
        stop: usize,
        step: isize,
        value: &BitArray,
    ) -> Result<(), BitArrayError> {
        if step == 0 {
            return Err(BitArrayError::BadValue("slice step cannot be zero".into()));
        }
        let stop = stop.min(self.n);
        if step == 1 {
            let old_len = stop.saturating_sub(start);
            let new_len = value.n;
            if new_len > old_len {
                self.insert_n(start + old_len, new_len - old_len);
            } else if new_len < old_len {
                self.delete_n(start + new_len, old_len - new_len);
            }
            self.copy_from(start, value, 0, new_len);
            Ok(())
        } else {
            let step_abs = step.unsigned_abs();
            let count = (start..stop).step_by(step_abs).count();
            if count != value.n {
                return Err(BitArrayError::BadValue(format!(
                    "attempt to assign sequence of size {} to extended slice of size {}",
                    value.n, count
                )));
            }
            for (k, i) in (start..stop).step_by(step_abs).enumerate() {
                self.set(i, value.get(k));
            }
            Ok(())
        }
    }

    /// Fills the slice `start..stop` (step) with the constant `v`. `start`/
    /// `stop` follow slice-index semantics (negative wraps, out-of-range
    /// clamps); a negative `step` selects the same bits as its positive-step
    /// mirror, since fill order doesn't affect the result.
    pub fn set_slice_value(
        &mut self,
        start: isize,
        stop: isize,
        step: isize,
        v: bool,
    ) -> Result<(), BitArrayError> {
        let resolved = slice_indices(SliceSpec::new(Some(start), Some(stop), step), self.n, true)?;
        if resolved.len == 0 {
            return Ok(());
        }
        let start = resolved.start as usize;
        let stop = resolved.stop as usize;
        if resolved.step == 1 {
            self.setrange(start, stop, v);
        } else {
            let step = resolved.step as usize;
            let mut i = start;
            while i < stop {
                self.set(i, v);
                i += step;
            }
        }
        Ok(())
    }

    /// Deletes the slice `start..stop` (step). `start`/`stop` follow
    /// slice-index semantics (negative wraps, out-of-range clamps); a
    /// negative `step` deletes the same set of bits as its positive-step
    /// mirror. `step == 1` (after normalization) uses `delete_n` directly;
    /// otherwise surviving bits are compacted leftward and the array
    /// truncated.
    pub fn delete_slice(&mut self, start: isize, stop: isize, step: isize) -> Result<(), BitArrayError> {
        let resolved = slice_indices(SliceSpec::new(Some(start), Some(stop), step), self.n, true)?;
        if resolved.len == 0 {
            return Ok(());
        }
        let start = resolved.start as usize;
        let stop = resolved.stop as usize;
        if resolved.step == 1 {
            self.delete_n(start, stop - start);
            return Ok(());
        }
        let step = resolved.step as usize;
        let doomed: std::collections::HashSet<usize> = (start..stop).step_by(step).collect();
        let mut write = 0usize;
        for read in 0..self.n {
            if doomed.contains(&read) {
                continue;
            }
            if write != read {
                let v = self.get(read);
                self.set(write, v);
            }
            write += 1;
        }
        self.resize_bits(write);
        Ok(())
    }
}

/// Normalizes a possibly-negative index into `[0, len)`.
pub fn wrap_index(i: isize, len: usize) -> Result<usize, BitArrayError> {
    let len_i = len as isize;
    let idx = if i < 0 { i + len_i } else { i };
    if idx < 0 || idx >= len_i {
        return Err(BitArrayError::OutOfRange { index: i, len });
    }
    Ok(idx as usize)
}

/// Like [`wrap_index`] but also accepts `idx == len` (insertion at the end).
fn wrap_index_inclusive(i: isize, len: usize) -> Result<usize, BitArrayError> {
    let len_i = len as isize;
    let idx = if i < 0 { i + len_i } else { i };
    if idx < 0 || idx > len_i {
        return Err(BitArrayError::OutOfRange { index: i, len });
    }
    Ok(idx as usize)
}

impl Default for BitArray {
    fn default() -> Self {
        BitArray::empty(EndianArg::Default)
    }
}

impl Index<usize> for BitArray {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if index >= self.n {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.n, index
            );
        }
        static TRUE_CONST: bool = true;
        static FALSE_CONST: bool = false;
        if self.get(index) { &TRUE_CONST } else { &FALSE_CONST }
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 0 {
            write!(f, "bitarray()")
        } else {
            write!(f, "bitarray('{}')", self.to01())
        }
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        if self.n != other.n {
            return false;
        }
        if self.endian == other.endian {
            let full = self.n / 8;
            self.buf[..full] == other.buf[..full] && self.zeroed_last_byte() == other.zeroed_last_byte()
        } else {
            (0..self.n).all(|i| self.get(i) == other.get(i))
        }
    }
}

impl Eq for BitArray {}

impl PartialOrd for BitArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitArray {
    fn cmp(&self, other: &Self) -> Ordering {
        let m = self.n.min(other.n);
        for i in 0..m {
            match self.get(i).cmp(&other.get(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.n.cmp(&other.n)
    }
}

impl BitAnd for &BitArray {
    type Output = BitArray;

    fn bitand(self, rhs: &BitArray) -> BitArray {
        assert_eq!(self.n, rhs.n, "BitArray: bitand length mismatch");
        let mut out = self.clone();
        for (a, b) in out.buf.iter_mut().zip(rhs.buf.iter()) {
            *a &= *b;
        }
        out
    }
}

impl BitOr for &BitArray {
    type Output = BitArray;

    fn bitor(self, rhs: &BitArray) -> BitArray {
        assert_eq!(self.n, rhs.n, "BitArray: bitor length mismatch");
        let mut out = self.clone();
        for (a, b) in out.buf.iter_mut().zip(rhs.buf.iter()) {
            *a |= *b;
        }
        out
    }
}

impl Not for &BitArray {
    type Output = BitArray;

    fn not(self) -> BitArray {
        self.inverted()
    }
}

impl Deref for BitArray {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.buf.as_slice()
    }
}

impl DerefMut for BitArray {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }
}

impl Add for BitArray {
    type Output = BitArray;

    fn add(mut self, rhs: BitArray) -> BitArray {
        self.extend_bitarray(&rhs);
        self
    }
}

impl AddAssign for BitArray {
    fn add_assign(&mut self, rhs: BitArray) {
        self.extend_bitarray(&rhs);
    }
}

impl Mul<usize> for BitArray {
    type Output = BitArray;

    fn mul(mut self, m: usize) -> BitArray {
        self.repeat(m).expect("repeat overflow");
        self
    }
}

impl MulAssign<usize> for BitArray {
    fn mul_assign(&mut self, m: usize) {
        self.repeat(m).expect("repeat overflow");
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitArray::from_bits(iter, EndianArg::Default)
    }
}

impl Extend<bool> for BitArray {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.extend_bits(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BitArray {
        BitArray::from_str01(s, EndianArg::Exact(Endian::Big)).unwrap()
    }

    #[test]
    fn construct_from_str01_big() {
        let a = big("1101");
        assert_eq!(a.tolist(), vec![true, true, false, true]);
        assert_eq!(a.tobytes().as_slice(), &[0xD0]);
    }

    #[test]
    fn construct_from_str01_little() {
        let a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Little)).unwrap();
        assert_eq!(a.tobytes().as_slice(), &[0x0B]);
    }

    #[test]
    fn from_str01_rejects_bad_char() {
        let err = BitArray::from_str01("10x1", EndianArg::Exact(Endian::Big));
        assert!(matches!(err, Err(BitArrayError::BadValue(_))));
    }

    #[test]
    fn from_str01_ignores_separators() {
        let a = big("11_00 0011");
        assert_eq!(a.to01(), "11000011");
    }

    #[test]
    fn extend_str_preserves_length_on_error() {
        let mut a = big("1100");
        let err = a.extend_str("01x0");
        assert!(err.is_err());
        assert_eq!(a.to01(), "1100");
    }

    #[test]
    fn extend_bitarray_joins() {
        let mut a = big("1100");
        a.extend_bitarray(&big("0011"));
        assert_eq!(a.to01(), "11000011");
    }

    #[test]
    fn append_and_index() {
        let mut a = BitArray::empty(EndianArg::Exact(Endian::Big));
        a.append(true);
        a.append(false);
        assert_eq!(a[0], true);
        assert_eq!(a[1], false);
    }

    #[test]
    fn insert_pop_remove() {
        let mut a = big("1010");
        a.insert(2, true).unwrap();
        assert_eq!(a.to01(), "10110");
        let popped = a.pop(-1).unwrap();
        assert_eq!(popped, false);
        assert_eq!(a.to01(), "1011");
        a.remove(false).unwrap();
        assert_eq!(a.to01(), "111");
    }

    #[test]
    fn reverse_invert_involutions() {
        let a = big("1001101");
        assert_eq!(a.reversed().reversed(), a);
        assert_eq!(a.inverted().inverted(), a);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut a = big("1011001");
        a.sort(false);
        let after_first = a.to01();
        a.sort(false);
        assert_eq!(a.to01(), after_first);
        let zeros = a.to01().chars().filter(|&c| c == '0').count();
        assert!(after_first[..zeros].chars().all(|c| c == '0'));
    }

    #[test]
    fn setall_all_any() {
        let mut a = big("0000");
        a.setall(true);
        assert!(a.all());
        a.setall(false);
        assert!(!a.any());
    }

    #[test]
    fn fill_pads_to_byte_boundary() {
        let mut a = big("101");
        let pad = a.fill();
        assert_eq!(pad, 5);
        assert_eq!(a.n % 8, 0);
        assert_eq!(a.to01(), "10100000");
    }

    #[test]
    fn count_with_step() {
        let a = big("11110000");
        assert_eq!(a.count(true, 0, isize::MAX, 1).unwrap(), 4);
        assert_eq!(a.count(false, 0, 4, 1).unwrap(), 0);
        assert_eq!(a.count(true, 0, 8, 2).unwrap(), 2);
    }

    #[test]
    fn count_with_negative_step_and_indices() {
        let a = big("11110000");
        // descending step selects the same set as its ascending mirror
        assert_eq!(a.count(true, 7, isize::MIN, -2).unwrap(), 2);
        // negative start/stop wrap from the end
        assert_eq!(a.count(false, -4, -1, 1).unwrap(), 3);
    }

    #[test]
    fn find_and_index() {
        let a = big("00010010");
        let p = big("10");
        assert_eq!(a.find(&p, 0, a.n), Some(2));
        assert_eq!(a.find_bit(true, 0, a.n), Some(3));
        assert!(a.contains(&p));
        assert!(a.index_pattern(&big("11111"), 0, a.n).is_err());
    }

    #[test]
    fn slice_get_step_one() {
        let a = big("10110010");
        assert_eq!(a.slice(2, 6, 1).unwrap().to01(), "1100");
    }

    #[test]
    fn slice_get_stepped() {
        let a = big("11110000");
        assert_eq!(a.slice(0, 8, 2).unwrap().to01(), "1100");
    }

    #[test]
    fn set_slice_shrinks_length() {
        let mut a = big("10110010");
        a.set_slice(2, 6, 1, &big("111")).unwrap();
        assert_eq!(a.to01(), "10111010");
    }

    #[test]
    fn delete_slice_stepped_compacts() {
        let mut a = big("11110000");
        a.delete_slice(0, 8, 2).unwrap();
        assert_eq!(a.to01(), "1010");
    }

    #[test]
    fn repetition_operator() {
        let a = big("1001") * 3;
        assert_eq!(a.to01(), "100110011001");
    }

    #[test]
    fn concatenation_operator() {
        let a = big("1100");
        let b = big("0011");
        let c = a.clone() + b.clone();
        assert_eq!(c.slice(0, a.n as isize, 1).unwrap(), a);
        assert_eq!(c.slice(a.n as isize, (a.n + b.n) as isize, 1).unwrap(), b);
    }

    #[test]
    fn slice_get_negative_step_reverses() {
        let a = big("10110010");
        assert_eq!(a.slice(-1, isize::MIN, -1).unwrap(), a.reversed());
    }

    #[test]
    fn delete_slice_negative_indices() {
        let mut a = big("11110000");
        a.delete_slice(-4, isize::MAX, 1).unwrap();
        assert_eq!(a.to01(), "1111");
    }

    #[test]
    fn index_panics_out_of_bounds_on_pad_bits() {
        let a = BitArray::zeros(5, EndianArg::Exact(Endian::Big));
        assert_eq!(a.len(), 5);
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| a[5]));
        assert!(caught.is_err());
    }

    #[test]
    fn lexicographic_ordering() {
        assert!(big("0") < big("1"));
        assert!(big("10") > big("01"));
        assert!(big("1") < big("10"));
    }

    #[test]
    fn cross_endian_equality_by_logical_bits() {
        let a = BitArray::from_str01("1101", EndianArg::Exact(Endian::Big)).unwrap();
        let b = BitArray::from_str01("1101", EndianArg::Exact(Endian::Little)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.tobytes(), b.tobytes());
    }

    #[test]
    fn display_matches_repr_style() {
        assert_eq!(big("101").to_string(), "bitarray('101')");
        assert_eq!(BitArray::empty(EndianArg::Default).to_string(), "bitarray()");
        assert_eq!(big("1").to_string(), "bitarray('1')");
    }

    #[test]
    fn frombytes_tobytes_roundtrip() {
        let mut a = BitArray::empty(EndianArg::Exact(Endian::Big));
        a.frombytes(&[0xD0]);
        assert_eq!(a.n, 8);
        assert_eq!(a.tobytes().as_slice(), &[0xD0]);
    }

    #[test]
    fn pack_unpack() {
        let mut a = BitArray::empty(EndianArg::Exact(Endian::Big));
        a.pack(&[0x00, 0x05, 0x00, 0x9]);
        assert_eq!(a.to01(), "0101");
        assert_eq!(a.unpack(b'.', b'#'), vec![b'.', b'#', b'.', b'#']);
    }
}
