//! C ABI for `boundstr`.
//!
//! Drop-in replacements for the bounds-checked `strlastchar_s` family. Return
//! values are the numeric `errno_t` codes of the C bounds-checking
//! interfaces.

use core::{
    ffi::{c_char, c_int},
    ptr,
};

use boundstr::{BOS_UNKNOWN, Buffer, CheckOptions, NoBounds, Status, strlastchar_s_with};
use log::trace;

/// `rsize_t`
#[allow(non_camel_case_types)]
pub type rsize_t = usize;

/// `errno_t`
#[allow(non_camel_case_types)]
pub type errno_t = c_int;

/// Stores a pointer to the last `c` in `dest` into `*lastp`, scanning at most
/// `dmax` characters and stopping at the terminator. `*lastp` is null on every
/// other outcome.
///
/// # Safety
///
/// `lastp` must be null or valid for writes. `dest` must be null or readable
/// up to its terminator or `dmax` bytes, whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlastchar_s(
    dest: *mut c_char,
    dmax: rsize_t,
    c: c_char,
    lastp: *mut *mut c_char,
) -> errno_t {
    unsafe { _strlastchar_s_chk(dest, dmax, c, lastp, BOS_UNKNOWN) }
}

/// [`strlastchar_s`] with the compiler-provided object size of `dest`, or
/// `BOS_UNKNOWN`.
///
/// # Safety
///
/// As [`strlastchar_s`]. When `destbos` is not `BOS_UNKNOWN`, `destbos` bytes
/// starting at `dest` must be readable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _strlastchar_s_chk(
    dest: *mut c_char,
    dmax: rsize_t,
    c: c_char,
    lastp: *mut *mut c_char,
    destbos: usize,
) -> errno_t {
    trace!("strlastchar_s - dest: {dest:p}, dmax: {dmax:#x}, lastp: {lastp:p}, bos: {destbos:#x}");

    let object_size = (destbos != BOS_UNKNOWN).then_some(destbos);
    // SAFETY: forwarded from the caller.
    let buffer = unsafe { Buffer::from_raw_parts(dest.cast_const().cast(), object_size) };

    // SAFETY: non-null `lastp` is valid for writes per the caller.
    let slot = unsafe { lastp.as_mut() };
    let mut found = None;
    let status = strlastchar_s_with(
        buffer,
        dmax,
        c as u8,
        slot.is_some().then_some(&mut found),
        &CheckOptions::default(),
        &NoBounds,
    );

    if let Some(slot) = slot {
        *slot = match found {
            // SAFETY: `i` is an index the scan read, so it lies inside `dest`.
            Some(i) => unsafe { dest.add(i) },
            None => ptr::null_mut(),
        };
    }
    debug_assert_eq!(found.is_some(), status == Status::Success);
    status.errno()
}

#[cfg(test)]
mod tests {
    use core::ptr::null_mut;

    use boundstr::{ESNOTFND, ESNULLP};

    use super::*;

    #[test]
    fn sets_slot_to_null_on_failure() {
        let mut s = *b"abc\0";
        let mut out = s.as_mut_ptr().cast::<c_char>();
        let ret = unsafe { strlastchar_s(s.as_mut_ptr().cast(), 4, b'z' as c_char, &mut out) };
        assert_eq!(ret, ESNOTFND);
        assert_eq!(out, null_mut());
    }

    #[test]
    fn null_lastp() {
        let mut s = *b"abc\0";
        let ret = unsafe { strlastchar_s(s.as_mut_ptr().cast(), 4, b'a' as c_char, null_mut()) };
        assert_eq!(ret, ESNULLP);
    }
}
