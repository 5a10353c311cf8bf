use core::fmt;

use thiserror::Error;

/// `EOK`
pub const EOK: i32 = 0;
/// `ESNULLP`: null pointer.
pub const ESNULLP: i32 = 400;
/// `ESZEROL`: length is zero.
pub const ESZEROL: i32 = 401;
/// `ESLEMAX`: length exceeds max.
pub const ESLEMAX: i32 = 403;
/// `ESNOTFND`: not found.
pub const ESNOTFND: i32 = 409;
/// `EOVERFLOW` as defined on Linux.
pub const EOVERFLOW: i32 = 75;

/// A failed precondition. Detected before the buffer is read.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    /// The output slot reference is null.
    #[error("lastp is null")]
    NullOutputPointer,
    /// The buffer reference is null.
    #[error("dest is null")]
    NullBufferPointer,
    /// The declared maximum length is zero.
    #[error("dmax is 0")]
    ZeroLength,
    /// The declared maximum exceeds the configured ceiling.
    #[error("dmax exceeds max ({dmax} > {max})")]
    LengthExceedsCeiling {
        /// Declared maximum.
        dmax: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// The declared maximum exceeds the buffer's known allocation.
    #[error("dmax exceeds dest ({dmax} > {size})")]
    LengthExceedsAllocation {
        /// Declared maximum.
        dmax: usize,
        /// Known allocation size.
        size: usize,
    },
    /// The bounds collaborator can prove fewer readable bytes than declared.
    #[error("dest overflow ({dmax} > {readable} readable)")]
    BoundsViolation {
        /// Declared maximum.
        dmax: usize,
        /// Bytes the collaborator vouches for.
        readable: usize,
    },
}

impl ConstraintError {
    /// The status code a caller of the status-returning API observes.
    #[must_use]
    pub fn status(self) -> Status {
        match self {
            Self::NullOutputPointer => Status::NullOutputPointer,
            Self::NullBufferPointer => Status::NullBufferPointer,
            Self::ZeroLength => Status::ZeroLength,
            Self::LengthExceedsCeiling { .. } => Status::LengthExceedsCeiling,
            Self::LengthExceedsAllocation { .. } => Status::LengthExceedsAllocation,
            Self::BoundsViolation { .. } => Status::BoundsViolation,
        }
    }
}

/// A [`ConstraintError`] tagged with the operation that raised it. This is
/// what constraint handlers receive.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{op}: {error}")]
pub struct ConstraintViolation {
    /// Name of the failing operation, e.g. `strlastchar_s`.
    pub op: &'static str,
    /// The precondition that failed.
    pub error: ConstraintError,
}

/// Outcome of a status-returning call.
///
/// `NotFound` is an ordinary result of a valid call; every other variant
/// besides `Success` is a caller defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A match was found and written to the output slot.
    Success,
    /// Valid call, no match in the scanned range.
    NotFound,
    /// See [`ConstraintError::NullBufferPointer`].
    NullBufferPointer,
    /// See [`ConstraintError::NullOutputPointer`].
    NullOutputPointer,
    /// See [`ConstraintError::ZeroLength`].
    ZeroLength,
    /// See [`ConstraintError::LengthExceedsCeiling`].
    LengthExceedsCeiling,
    /// See [`ConstraintError::LengthExceedsAllocation`].
    LengthExceedsAllocation,
    /// See [`ConstraintError::BoundsViolation`].
    BoundsViolation,
}

impl Status {
    /// Numeric code compatible with the C bounds-checking interfaces.
    ///
    /// Both null-pointer kinds share `ESNULLP`, and both overrun kinds share
    /// `EOVERFLOW`.
    #[must_use]
    pub const fn errno(self) -> i32 {
        match self {
            Self::Success => EOK,
            Self::NotFound => ESNOTFND,
            Self::NullBufferPointer | Self::NullOutputPointer => ESNULLP,
            Self::ZeroLength => ESZEROL,
            Self::LengthExceedsCeiling => ESLEMAX,
            Self::LengthExceedsAllocation | Self::BoundsViolation => EOVERFLOW,
        }
    }

    /// `true` for precondition failures, `false` for `Success` and `NotFound`.
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Success | Self::NotFound)
    }
}

impl From<ConstraintError> for Status {
    fn from(error: ConstraintError) -> Self {
        error.status()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "EOK",
            Self::NotFound => "ESNOTFND",
            Self::NullBufferPointer | Self::NullOutputPointer => "ESNULLP",
            Self::ZeroLength => "ESZEROL",
            Self::LengthExceedsCeiling => "ESLEMAX",
            Self::LengthExceedsAllocation | Self::BoundsViolation => "EOVERFLOW",
        };
        write!(f, "{name} ({})", self.errno())
    }
}
