//! Precondition checks shared by the bounds-checked string operations.
//!
//! Each check takes the operation name so the constraint handler can report
//! which call failed. Checks run in a fixed order and the first failure wins;
//! none of them reads the buffer contents.

use log::trace;

use crate::{
    buffer::{BoundsOracle, Buffer},
    error::{ConstraintError, ConstraintViolation},
    limits::RSIZE_MIN_STR,
    options::CheckOptions,
};

/// Reports `error` through the configured handler and hands it back.
fn violation(
    op: &'static str,
    error: ConstraintError,
    options: &CheckOptions,
) -> ConstraintError {
    options.handler.invoke(&ConstraintViolation { op, error });
    error
}

pub(crate) fn output_non_null<'s, T>(
    op: &'static str,
    slot: Option<&'s mut T>,
    options: &CheckOptions,
) -> Result<&'s mut T, ConstraintError> {
    slot.ok_or_else(|| violation(op, ConstraintError::NullOutputPointer, options))
}

fn dest_non_null(
    op: &'static str,
    dest: &Buffer<'_>,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    if dest.is_null() {
        return Err(violation(op, ConstraintError::NullBufferPointer, options));
    }
    Ok(())
}

fn dmax_non_zero(
    op: &'static str,
    dmax: usize,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    if dmax < RSIZE_MIN_STR {
        return Err(violation(op, ConstraintError::ZeroLength, options));
    }
    Ok(())
}

fn dmax_within_ceiling(
    op: &'static str,
    dmax: usize,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    let max = options.max_str_len;
    if dmax > max {
        return Err(violation(
            op,
            ConstraintError::LengthExceedsCeiling { dmax, max },
            options,
        ));
    }
    Ok(())
}

fn dmax_within_bounds<O: BoundsOracle + ?Sized>(
    op: &'static str,
    dest: &Buffer<'_>,
    dmax: usize,
    oracle: &O,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    match oracle.readable_len(dest.as_ptr()) {
        Some(readable) if dmax > readable => Err(violation(
            op,
            ConstraintError::BoundsViolation { dmax, readable },
            options,
        )),
        _ => Ok(()),
    }
}

fn dmax_within_allocation(
    op: &'static str,
    dmax: usize,
    size: usize,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    if dmax > size {
        return Err(violation(
            op,
            ConstraintError::LengthExceedsAllocation { dmax, size },
            options,
        ));
    }
    Ok(())
}

/// Everything that must hold about the buffer and its declared maximum before
/// the first byte is read.
///
/// With a known allocation size only that size bounds `dmax`; the ceiling and
/// the oracle are consulted only when the size is unknown.
pub(crate) fn dest_and_dmax<O: BoundsOracle + ?Sized>(
    op: &'static str,
    dest: &Buffer<'_>,
    dmax: usize,
    oracle: &O,
    options: &CheckOptions,
) -> Result<(), ConstraintError> {
    trace!(
        "{op} - dest: {:p}, dmax: {dmax:#x}, bos: {:?}",
        dest.as_ptr(),
        dest.object_size()
    );
    dest_non_null(op, dest, options)?;
    dmax_non_zero(op, dmax, options)?;
    match dest.object_size() {
        None => {
            dmax_within_ceiling(op, dmax, options)?;
            dmax_within_bounds(op, dest, dmax, oracle, options)
        }
        Some(size) => dmax_within_allocation(op, dmax, size, options),
    }
}
