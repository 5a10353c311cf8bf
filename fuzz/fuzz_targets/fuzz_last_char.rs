#![no_main]

use arbitrary::Arbitrary;
use boundstr::{
    Buffer, CheckOptions, ConstraintError, ConstraintHandler, NUL, NoBounds, Status,
    last_char_with, strlastchar_s_with,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    dmax: u16,
    c: u8,
    /// Pretend the allocation size is unknown; the bytes are still
    /// terminated so the scan stays in bounds.
    unknown_size: bool,
    readable: Option<u16>,
    max_str_len: u16,
}

/// Reference model: the prefix before the first terminator, cut at `dmax`.
fn model(bytes: &[u8], dmax: usize, c: u8) -> Option<usize> {
    let window = &bytes[..dmax.min(bytes.len())];
    let end = window.iter().position(|&b| b == NUL).unwrap_or(window.len());
    window[..end].iter().rposition(|&b| b == c)
}

fuzz_target!(|input: Input| {
    let Input {
        mut bytes,
        dmax,
        c,
        unknown_size,
        readable,
        max_str_len,
    } = input;
    let dmax = usize::from(dmax);
    let options = CheckOptions {
        max_str_len: usize::from(max_str_len),
        handler: ConstraintHandler::Ignore,
    };
    let oracle = |_: *const u8| readable.map(usize::from);

    let result = if unknown_size {
        bytes.push(NUL);
        let dest = unsafe { Buffer::from_ptr(bytes.as_ptr()) };
        last_char_with(dest, dmax, c, &options, &oracle)
    } else {
        last_char_with(Buffer::from_slice(&bytes), dmax, c, &options, &NoBounds)
    };

    let expected = if dmax == 0 {
        Err(ConstraintError::ZeroLength)
    } else if !unknown_size && dmax > bytes.len() {
        Err(ConstraintError::LengthExceedsAllocation {
            dmax,
            size: bytes.len(),
        })
    } else if unknown_size && dmax > options.max_str_len {
        Err(ConstraintError::LengthExceedsCeiling {
            dmax,
            max: options.max_str_len,
        })
    } else if let Some(r) = readable.map(usize::from).filter(|&r| unknown_size && dmax > r) {
        Err(ConstraintError::BoundsViolation { dmax, readable: r })
    } else {
        Ok(model(&bytes, dmax, c))
    };
    assert_eq!(result, expected);

    let mut last = Some(usize::MAX);
    let status = strlastchar_s_with(
        Buffer::from_slice(&bytes),
        dmax,
        c,
        Some(&mut last),
        &options,
        &NoBounds,
    );
    assert_eq!(status == Status::Success, last.is_some());
});
