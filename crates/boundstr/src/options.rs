use log::warn;

use crate::{error::ConstraintViolation, limits::RSIZE_MAX_STR};

/// Configuration for the precondition checks.
///
/// # Examples
///
/// ```rust
/// use boundstr::{CheckOptions, ConstraintHandler};
///
/// let options = CheckOptions {
///     max_str_len: 64,
///     handler: ConstraintHandler::Ignore,
/// };
/// assert_eq!(CheckOptions::default().max_str_len, boundstr::RSIZE_MAX_STR);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckOptions {
    /// Ceiling applied to the declared maximum when the buffer's allocation
    /// size is unknown.
    ///
    /// A ceiling of zero rejects every call with an unknown allocation size.
    ///
    /// # Default
    ///
    /// [`RSIZE_MAX_STR`]
    pub max_str_len: usize,

    /// Called once for each failed precondition, before the error is
    /// returned. Never called for a valid call that finds nothing.
    ///
    /// # Default
    ///
    /// [`ConstraintHandler::Log`]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub handler: ConstraintHandler,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_str_len: RSIZE_MAX_STR,
            handler: ConstraintHandler::default(),
        }
    }
}

/// What to do when a precondition fails.
///
/// The failing call returns its error after the handler runs. No handler
/// aborts the process.
#[derive(Debug, Clone, Copy, Default)]
pub enum ConstraintHandler {
    /// Report through the `log` facade at `warn` level.
    #[default]
    Log,
    /// Do nothing.
    Ignore,
    /// Call a user function.
    Custom(fn(&ConstraintViolation)),
}

impl ConstraintHandler {
    pub(crate) fn invoke(self, violation: &ConstraintViolation) {
        match self {
            ConstraintHandler::Log => warn!("{violation}"),
            ConstraintHandler::Ignore => {}
            ConstraintHandler::Custom(f) => f(violation),
        }
    }
}
