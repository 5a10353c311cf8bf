//! Bounds-checked string search.
//!
//! [`strlastchar_s`] finds the last occurrence of a byte in a nul-terminated
//! string without reading past a caller-declared maximum or past the
//! terminator. Every argument is validated before the buffer is touched, and
//! failures come back as explicit status codes.
//!
//! ```rust
//! use boundstr::{Buffer, Status, strlastchar_s};
//!
//! let mut last = None;
//! let status = strlastchar_s(Buffer::from_slice(b"banana\0"), 7, b'a', Some(&mut last));
//! assert_eq!(status, Status::Success);
//! assert_eq!(last, Some(5));
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod buffer;
mod check;
mod error;
mod limits;
mod options;
mod scan;


use log::debug;

pub use buffer::{BoundsOracle, Buffer, NoBounds};
pub use error::{
    ConstraintError, ConstraintViolation, EOK, EOVERFLOW, ESLEMAX, ESNOTFND, ESNULLP, ESZEROL,
    Status,
};
pub use limits::{BOS_UNKNOWN, NUL, RSIZE_MAX_STR, RSIZE_MIN_STR};
pub use options::{CheckOptions, ConstraintHandler};

const STRLASTCHAR_S: &str = "strlastchar_s";

/// Index of the last `c` in `dest`, scanning at most `dmax` bytes and stopping
/// at the first terminator.
///
/// `Ok(None)` means the call was valid and nothing matched.
///
/// # Errors
///
/// [`ConstraintError::ZeroLength`] if `dmax` is zero and
/// [`ConstraintError::LengthExceedsAllocation`] if `dmax` is larger than
/// `dest`.
pub fn last_char(dest: &[u8], dmax: usize, c: u8) -> Result<Option<usize>, ConstraintError> {
    last_char_with(
        Buffer::from_slice(dest),
        dmax,
        c,
        &CheckOptions::default(),
        &NoBounds,
    )
}

/// [`last_char`] over any [`Buffer`], with explicit options and bounds
/// collaborator.
///
/// # Errors
///
/// The first failing precondition, in this order: null buffer, zero `dmax`,
/// then either the allocation size (when `dest` carries one) or the ceiling
/// followed by the oracle (when it does not).
pub fn last_char_with<O: BoundsOracle + ?Sized>(
    dest: Buffer<'_>,
    dmax: usize,
    c: u8,
    options: &CheckOptions,
    oracle: &O,
) -> Result<Option<usize>, ConstraintError> {
    check::dest_and_dmax(STRLASTCHAR_S, &dest, dmax, oracle, options)?;
    // SAFETY: non-null, and `dmax` is within the allocation when one is
    // known. Otherwise `Buffer`'s constructor contract covers the read.
    let found = unsafe { scan::last_char(&dest, dmax, c) };
    debug!("{STRLASTCHAR_S} - c: {c:#04x}, found: {found:?}");
    Ok(found)
}

/// Status-code form of [`last_char`].
///
/// `lastp` is the output slot. It is reset to `None` as soon as it is known to
/// exist, so every later exit leaves it defined; on [`Status::Success`] it
/// holds the index of the match.
///
/// ```rust
/// use boundstr::{Buffer, Status, strlastchar_s};
///
/// let mut last = Some(99);
/// let status = strlastchar_s(Buffer::from_slice(b"ab\0cd"), 5, b'c', Some(&mut last));
/// assert_eq!(status, Status::NotFound);
/// assert_eq!(last, None);
/// ```
pub fn strlastchar_s(
    dest: Buffer<'_>,
    dmax: usize,
    c: u8,
    lastp: Option<&mut Option<usize>>,
) -> Status {
    strlastchar_s_with(dest, dmax, c, lastp, &CheckOptions::default(), &NoBounds)
}

/// [`strlastchar_s`] with explicit options and bounds collaborator.
pub fn strlastchar_s_with<O: BoundsOracle + ?Sized>(
    dest: Buffer<'_>,
    dmax: usize,
    c: u8,
    lastp: Option<&mut Option<usize>>,
    options: &CheckOptions,
    oracle: &O,
) -> Status {
    let lastp = match check::output_non_null(STRLASTCHAR_S, lastp, options) {
        Ok(slot) => slot,
        Err(e) => return e.status(),
    };
    *lastp = None;

    match last_char_with(dest, dmax, c, options, oracle) {
        Ok(Some(i)) => {
            *lastp = Some(i);
            Status::Success
        }
        Ok(None) => Status::NotFound,
        Err(e) => e.status(),
    }
}
