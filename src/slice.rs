//! # Slice Index Normalization
//!
//! Resolves extended-slice semantics (`start:stop:step`) the way Python's
//! `slice.indices` does: negative indices wrap once, out-of-range values
//! clamp to the nearest bound for the slice's direction, and `step == 0` is
//! rejected. Rust has no native extended-slice literal, so this is exposed as
//! a free function taking a small [`SliceSpec`] struct instead of operator
//! syntax.

use crate::error::BitArrayError;

/// A possibly-partial slice specification, mirroring Python's `slice(start,
/// stop, step)` before it is resolved against a concrete length. `None`
/// means "use the direction-appropriate default" (start of sequence for a
/// positive step, end of sequence for a negative one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        SliceSpec { start, stop, step }
    }
}

/// A slice fully resolved against a concrete length: `len` bit indices,
/// starting at `start` and advancing by `step` each time (`step` may be
/// negative). When `len == 0` the selection is empty and `start`/`stop`
/// carry no meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlice {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub len: usize,
}

/// Resolves `spec` against `length` using the standard slice-index
/// algorithm. When `positive` is set, a negative-step result is rewritten
/// into an equivalent ascending `(start', stop', step')` selecting the
/// identical set of bit indices — useful for operations where only the
/// selected *set* matters (counting, fill, delete), not the visiting order.
/// Callers that must preserve visiting order (materializing a slice) pass
/// `positive = false` and walk `start, start + step, ...` for `len` steps.
pub fn slice_indices(
    spec: SliceSpec,
    length: usize,
    positive: bool,
) -> Result<ResolvedSlice, BitArrayError> {
    if spec.step == 0 {
        return Err(BitArrayError::BadValue("slice step cannot be zero".into()));
    }
    let len_i = length as isize;
    let step = spec.step;

    let mut start = match spec.start {
        None => if step < 0 { len_i - 1 } else { 0 },
        Some(mut s) => {
            if s < 0 {
                s += len_i;
            }
            if s < 0 {
                if step < 0 { -1 } else { 0 }
            } else if s >= len_i {
                if step < 0 { len_i - 1 } else { len_i }
            } else {
                s
            }
        }
    };

    let mut stop = match spec.stop {
        None => if step < 0 { -1 } else { len_i },
        Some(mut s) => {
            if s < 0 {
                s += len_i;
            }
            if s < 0 {
                if step < 0 { -1 } else { 0 }
            } else if s >= len_i {
                if step < 0 { len_i - 1 } else { len_i }
            } else {
                s
            }
        }
    };

    let slicelen: usize = if (step < 0 && stop >= start) || (step > 0 && start >= stop) {
        0
    } else if step < 0 {
        (((stop - start + 1) / step) + 1) as usize
    } else {
        (((stop - start - 1) / step) + 1) as usize
    };

    let mut out_step = step;
    if positive && step < 0 {
        if slicelen == 0 {
            start = 0;
            stop = 0;
            out_step = 1;
        } else {
            let last = start + (slicelen as isize - 1) * step;
            stop = start + 1;
            start = last;
            out_step = -step;
        }
    }

    Ok(ResolvedSlice {
        start,
        stop,
        step: out_step,
        len: slicelen,
    })
}
