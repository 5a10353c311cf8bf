//! Bounded reverse character search.
//!
//! Walks forward from the start of the buffer and remembers the most recent
//! match. Stops at the terminator or when the budget runs out, whichever comes
//! first. The budget is tested before each read, so the byte at index `dmax`
//! is never touched.

use crate::{buffer::Buffer, limits::NUL};

/// Index of the last byte equal to `c` among the first `dmax` bytes of `dest`,
/// stopping early at the terminator.
///
/// The terminator is tested before the target, so `c == NUL` never matches.
///
/// # Safety
///
/// `dest` must be non-null and readable up to the first terminator or up to
/// `dmax` bytes, whichever comes first. The precondition checks establish this
/// for views that carry an allocation size.
pub(crate) unsafe fn last_char(dest: &Buffer<'_>, dmax: usize, c: u8) -> Option<usize> {
    let base = dest.as_ptr();
    // SAFETY: `last_match` only asks for `i < dmax`, and only while no
    // terminator precedes `i`.
    last_match(dmax, c, |i| unsafe { base.add(i).read() })
}

/// The scan itself, over any byte source. `read` is called with strictly
/// increasing indices below `dmax` and never again after it returns `NUL`.
pub(crate) fn last_match(
    dmax: usize,
    c: u8,
    mut read: impl FnMut(usize) -> u8,
) -> Option<usize> {
    let mut last = None;
    let mut i = 0;
    while i < dmax {
        let b = read(i);
        if b == NUL {
            break;
        }
        if b == c {
            last = Some(i);
        }
        i += 1;
    }
    last
}

#[cfg(test)]
mod tests;
