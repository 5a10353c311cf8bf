//! Size limits shared by every bounds-checked string operation.

/// Ceiling on any declared maximum length when the buffer's real size is not
/// known. Guards against absurd or attacker-controlled sizes.
pub const RSIZE_MAX_STR: usize = 4 << 10;

/// The shortest string is the empty string, which still needs room for its
/// terminator.
pub const RSIZE_MIN_STR: usize = 1;

/// Object-size hint meaning "allocation size unknown", as passed across the C
/// ABI.
pub const BOS_UNKNOWN: usize = usize::MAX;

/// Terminator byte marking the logical end of a string.
pub const NUL: u8 = 0;
