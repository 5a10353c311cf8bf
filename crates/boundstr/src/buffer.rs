//! Buffer references and the bounds collaborator.
//!
//! A [`Buffer`] is a read-only view over caller memory that may or may not
//! carry a verified allocation size. Views built from Rust slices always know
//! their size; views built from raw pointers usually don't, in which case the
//! checks fall back to the ceiling and to whatever a [`BoundsOracle`] can prove.

use core::{ffi::CStr, fmt, marker::PhantomData, ptr};

/// Borrowed view over a caller-owned byte string.
#[derive(Clone, Copy)]
pub struct Buffer<'a> {
    ptr: *const u8,
    object_size: Option<usize>,
    _borrow: PhantomData<&'a [u8]>,
}

impl<'a> Buffer<'a> {
    /// View over a slice. The allocation size is the slice length.
    #[must_use]
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            ptr: bytes.as_ptr(),
            object_size: Some(bytes.len()),
            _borrow: PhantomData,
        }
    }

    /// View over a C string. The allocation size includes the terminator.
    #[must_use]
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self::from_slice(s.to_bytes_with_nul())
    }

    /// The null buffer reference.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null(),
            object_size: None,
            _borrow: PhantomData,
        }
    }

    /// View over raw memory of unknown size.
    ///
    /// # Safety
    ///
    /// `ptr` must be null, or every byte from `ptr` up to the first terminator
    /// or up to the declared maximum passed alongside it (whichever comes
    /// first) must be readable and not mutated for `'a`.
    #[must_use]
    pub const unsafe fn from_ptr(ptr: *const u8) -> Self {
        Self {
            ptr,
            object_size: None,
            _borrow: PhantomData,
        }
    }

    /// View over raw memory with an optional allocation-size hint.
    ///
    /// # Safety
    ///
    /// As [`Buffer::from_ptr`]. When `object_size` is `Some(n)`, `n` bytes
    /// starting at `ptr` must be readable for `'a`.
    #[must_use]
    pub const unsafe fn from_raw_parts(ptr: *const u8, object_size: Option<usize>) -> Self {
        Self {
            ptr,
            object_size,
            _borrow: PhantomData,
        }
    }

    /// `true` for the null reference.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Verified allocation size, when known.
    #[must_use]
    pub fn object_size(&self) -> Option<usize> {
        self.object_size
    }

    /// Start of the view.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }
}

// SAFETY: the view only ever reads, and the memory it reads stays valid and
// unmutated for `'a` by the constructors' contracts, exactly as for `&'a [u8]`.
unsafe impl Send for Buffer<'_> {}
// SAFETY: as above; shared access is read-only.
unsafe impl Sync for Buffer<'_> {}

impl<'a> From<&'a [u8]> for Buffer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a> From<&'a CStr> for Buffer<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_cstr(s)
    }
}

// Never prints the contents: formatting must not read the buffer.
impl fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("object_size", &self.object_size)
            .finish()
    }
}

/// Runtime bounds information for memory whose allocation size is not carried
/// by the [`Buffer`] itself, e.g. an allocator or shadow-memory lookup.
pub trait BoundsOracle {
    /// Number of bytes known to be readable starting at `ptr`, or `None` if
    /// nothing is known.
    fn readable_len(&self, ptr: *const u8) -> Option<usize>;
}

/// An oracle that never knows anything. The bounds check always passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounds;

impl BoundsOracle for NoBounds {
    fn readable_len(&self, _ptr: *const u8) -> Option<usize> {
        None
    }
}

impl<F> BoundsOracle for F
where
    F: Fn(*const u8) -> Option<usize>,
{
    fn readable_len(&self, ptr: *const u8) -> Option<usize> {
        self(ptr)
    }
}
