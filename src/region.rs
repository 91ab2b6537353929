//! # Region Engine
//!
//! Bulk operations over half-open bit ranges `[a, b)`: copying (including
//! across differing endians and overlapping/aliased ranges), insertion,
//! deletion, repetition, range-fill, counting, searching, and byte-level bit
//! reversal.
//!
//! `copy_within`/`copy_from` read every source bit before writing any
//! destination bit, so they are safe when the source and destination ranges
//! overlap within the same array (the case `insert_n`/`delete_n`/`repeat`
//! rely on).

use vec64::Vec64;

use crate::bitarray::BitArray;
use crate::endian::Endian;
use crate::error::BitArrayError;
use crate::tables::{BIT_REVERSE, POPCOUNT};

impl BitArray {
    /// Packs `n` bits starting at bit offset `off` into a freshly allocated,
    /// zero-based buffer (bit 0 of the result is bit `off` of `self`), using
    /// `self`'s endian.
    fn extract_bits(&self, off: usize, n: usize) -> Vec64<u8> {
        let nbytes = (n + 7) / 8;
        let mut out = Vec64::with_capacity(nbytes);
        out.resize(nbytes, 0u8);
        if n == 0 {
            return out;
        }
        if off % 8 == 0 {
            let start = off / 8;
            out[..nbytes].copy_from_slice(&self.buf[start..start + nbytes]);
            let rem = (n % 8) as u32;
            if rem != 0 {
                out[nbytes - 1] &= self.endian.head_mask(rem);
            }
        } else {
            for k in 0..n {
                if self.get(off + k) {
                    set_bit(&mut out, k, self.endian);
                }
            }
        }
        out
    }

    /// Writes `n` bits from a zero-based packed buffer (as produced by
    /// `extract_bits`) into `self` starting at bit offset `off`, preserving
    /// any bits beyond `off + n` in the last touched byte.
    fn write_bits(&mut self, off: usize, n: usize, src: &[u8]) {
        if n == 0 {
            return;
        }
        if off % 8 == 0 {
            let start = off / 8;
            let full = n / 8;
            self.buf[start..start + full].copy_from_slice(&src[..full]);
            let rem = (n % 8) as u32;
            if rem != 0 {
                let mask = self.endian.head_mask(rem);
                let existing = self.buf[start + full] & !mask;
                self.buf[start + full] = existing | (src[full] & mask);
            }
        } else {
            for k in 0..n {
                let bit = get_bit(src, k, self.endian);
                self.set(off + k, bit);
            }
        }
    }

    /// Copies `n` bits from `[src_off, src_off+n)` to `[dst_off, dst_off+n)`
    /// within the same array. Safe under overlap.
    pub fn copy_within(&mut self, dst_off: usize, src_off: usize, n: usize) {
        if n == 0 || dst_off == src_off {
            return;
        }
        let tmp = self.extract_bits(src_off, n);
        self.write_bits(dst_off, n, &tmp);
    }

    /// Copies `n` bits from `src[src_off..src_off+n)` into
    /// `self[dst_off..dst_off+n)`. `src` is a different array; cross-endian
    /// copies are reversed bit-for-bit so logical values are preserved.
    pub fn copy_from(&mut self, dst_off: usize, src: &BitArray, src_off: usize, n: usize) {
        if n == 0 {
            return;
        }
        let mut tmp = src.extract_bits(src_off, n);
        if self.endian != src.endian {
            bytereverse_slice(&mut tmp);
            // `extract_bits` left any pad bits beyond `n` in the last byte at
            // the source's head-mask position; after reversing the whole
            // byte those bits move to the tail, so re-mask at the
            // destination's head position before merging with existing bits.
            let rem = (n % 8) as u32;
            if rem != 0 {
                let last = tmp.len() - 1;
                tmp[last] &= self.endian.head_mask(rem);
            }
        }
        self.write_bits(dst_off, n, &tmp);
    }

    /// Grows/shrinks `self.n` and `self.buf` to hold exactly `new_n` bits.
    /// New bytes introduced by growth are zero-filled.
    pub(crate) fn resize_bits(&mut self, new_n: usize) {
        let new_bytes = (new_n + 7) / 8;
        if new_bytes != self.buf.len() {
            self.buf.resize(new_bytes, 0);
        }
        self.n = new_n;
    }

    /// Inserts `n` unspecified bits at `start`, shifting the tail right.
    pub fn insert_n(&mut self, start: usize, n: usize) {
        if n == 0 {
            return;
        }
        let old_n = self.n;
        self.resize_bits(old_n + n);
        self.copy_within(start + n, start, old_n - start);
    }

    /// Removes `n` bits at `start`, shifting the tail left.
    pub fn delete_n(&mut self, start: usize, n: usize) {
        if n == 0 {
            return;
        }
        let old_n = self.n;
        self.copy_within(start, start + n, old_n - start - n);
        self.resize_bits(old_n - n);
    }

    /// Repeats the bit sequence `m` times in place (`m = 0` clears, `m = 1`
    /// is a no-op). Grows by successive doubling of the already-copied prefix.
    pub fn repeat(&mut self, m: usize) -> Result<(), BitArrayError> {
        if self.n == 0 || m == 1 {
            return Ok(());
        }
        if m == 0 {
            self.resize_bits(0);
            return Ok(());
        }
        let q = self
            .n
            .checked_mul(m)
            .ok_or(BitArrayError::Overflow { op: "repeat" })?;
        let n_bits = self.n;
        self.resize_bits(q);
        let mut k = n_bits;
        while 2 * k <= q {
            self.copy_within(k, 0, k);
            k *= 2;
        }
        if k < q {
            self.copy_within(k, 0, q - k);
        }
        Ok(())
    }

    /// Sets every bit in `[a, b)` to `v`, memsetting fully-covered bytes.
    pub fn setrange(&mut self, a: usize, b: usize, v: bool) {
        if b <= a {
            return;
        }
        let mut i = a;
        while i % 8 != 0 && i < b {
            self.set(i, v);
            i += 1;
        }
        let byte_start = i / 8;
        let byte_end = b / 8;
        if byte_end > byte_start {
            let fill = if v { 0xFFu8 } else { 0u8 };
            self.buf[byte_start..byte_end].fill(fill);
        }
        let mut j = byte_end * 8;
        while j < b {
            self.set(j, v);
            j += 1;
        }
    }

    /// Counts occurrences of `v` in `[a, b)`.
    pub fn count_range(&self, v: bool, a: usize, b: usize) -> usize {
        if b <= a {
            return 0;
        }
        let mut ones = 0usize;
        let mut i = a;
        while i % 8 != 0 && i < b {
            if self.get(i) {
                ones += 1;
            }
            i += 1;
        }
        let byte_start = i / 8;
        let byte_end = b / 8;
        for &byte in &self.buf[byte_start..byte_end] {
            ones += POPCOUNT[byte as usize] as usize;
        }
        let mut j = byte_end * 8;
        while j < b {
            if self.get(j) {
                ones += 1;
            }
            j += 1;
        }
        if v { ones } else { (b - a) - ones }
    }

    /// Smallest index in `[a, b)` holding bit `v`, skipping whole bytes that
    /// are uniformly `!v`.
    pub fn find_bit(&self, v: bool, a: usize, b: usize) -> Option<usize> {
        if b <= a || b > self.n {
            return None;
        }
        let uniform_not_v = if v { 0x00u8 } else { 0xFFu8 };
        let mut i = a;
        while i < b {
            if i % 8 == 0 && i + 8 <= b && self.buf[i / 8] == uniform_not_v {
                i += 8;
                continue;
            }
            if self.get(i) == v {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Finds `pattern` as a contiguous subsequence within `[a, b)`, comparing
    /// bits by logical index (so cross-endian patterns compare correctly).
    pub fn find(&self, pattern: &BitArray, a: usize, b: usize) -> Option<usize> {
        let m = pattern.n;
        let b = b.min(self.n);
        if m == 0 {
            return if a <= b { Some(a) } else { None };
        }
        if m == 1 {
            return self.find_bit(pattern.get(0), a, b);
        }
        if b < a + m {
            return None;
        }
        'outer: for start in a..=(b - m) {
            for k in 0..m {
                if self.get(start + k) != pattern.get(k) {
                    continue 'outer;
                }
            }
            return Some(start);
        }
        None
    }

    /// Replaces each byte in byte-range `[a, b)` with its bit-reversal.
    pub fn bytereverse(&mut self, a: usize, b: usize) {
        for byte in &mut self.buf[a..b] {
            *byte = BIT_REVERSE[*byte as usize];
        }
    }
}

#[cfg(feature = "parallel_proc")]
mod parallel {
    use rayon::prelude::*;

    use super::BitArray;

    impl BitArray {
        /// Parallel iterator over every bit in `[0, len)`.
        #[inline]
        pub fn par_iter(&self) -> impl ParallelIterator<Item = bool> + '_ {
            (0..self.n).into_par_iter().map(move |i| self.get(i))
        }

        /// Parallel iterator over the half-open window `[start, end)`.
        #[inline]
        pub fn par_iter_range(&self, start: usize, end: usize) -> impl ParallelIterator<Item = bool> + '_ {
            debug_assert!(start <= end && end <= self.n);
            (start..end).into_par_iter().map(move |i| self.get(i))
        }

        /// Parallel count of `v` in `[a, b)`, summing per-byte popcounts
        /// across chunks and handling the unaligned head/tail bit-wise.
        pub fn count_range_parallel(&self, v: bool, a: usize, b: usize) -> usize {
            if b <= a {
                return 0;
            }
            let mut head = a;
            let mut ones = 0usize;
            while head % 8 != 0 && head < b {
                if self.get(head) {
                    ones += 1;
                }
                head += 1;
            }
            let byte_start = head / 8;
            let byte_end = b / 8;
            if byte_end > byte_start {
                ones += self.buf[byte_start..byte_end]
                    .par_iter()
                    .map(|&byte| crate::tables::POPCOUNT[byte as usize] as usize)
                    .sum::<usize>();
            }
            let mut tail = byte_end * 8;
            while tail < b {
                if self.get(tail) {
                    ones += 1;
                }
                tail += 1;
            }
            if v { ones } else { (b - a) - ones }
        }
    }
}

fn bytereverse_slice(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = BIT_REVERSE[*byte as usize];
    }
}

fn get_bit(buf: &[u8], k: usize, endian: Endian) -> bool {
    let byte = buf[k / 8];
    let shift = k % 8;
    match endian {
        Endian::Little => (byte >> shift) & 1 != 0,
        Endian::Big => (byte >> (7 - shift)) & 1 != 0,
    }
}

fn set_bit(buf: &mut [u8], k: usize, endian: Endian) {
    let shift = k % 8;
    let mask = match endian {
        Endian::Little => 1u8 << shift,
        Endian::Big => 1u8 << (7 - shift),
    };
    buf[k / 8] |= mask;
}
