use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::null_mut;

/// Statically binds a resource type to its native release function.
pub(crate) trait Dispose<T> {
    unsafe fn dispose(ptr: *mut T);
}

/// Owning pointer with a statically-bound release function.
///
/// The release function runs at most once, on drop or [`reset`](ScopedPtr::reset),
/// and never on a null pointer. [`take`](ScopedPtr::take) hands the resource
/// out without releasing it. Move-only.
pub(crate) struct ScopedPtr<T, D: Dispose<T>> {
    ptr: *mut T,
    _dispose: PhantomData<D>,
}

impl<T, D: Dispose<T>> ScopedPtr<T, D> {
    pub(crate) fn new(ptr: *mut T) -> Self {
        Self {
            ptr,
            _dispose: PhantomData,
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Hand the resource to the caller; nothing is released.
    pub(crate) fn take(&mut self) -> *mut T {
        mem::replace(&mut self.ptr, null_mut())
    }

    /// Release the current resource (if any) and adopt `ptr`.
    ///
    /// # Safety
    /// The held pointer must still be valid for its release function, and
    /// `ptr` must be null or valid for a later release.
    pub(crate) unsafe fn reset(&mut self, ptr: *mut T) {
        let old = mem::replace(&mut self.ptr, ptr);
        if !old.is_null() {
            D::dispose(old);
        }
    }
}

impl<T, D: Dispose<T>> Drop for ScopedPtr<T, D> {
    fn drop(&mut self) {
        unsafe { self.reset(null_mut()) }
    }
}

impl<T, D: Dispose<T>> fmt::Debug for ScopedPtr<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopedPtr").field(&self.ptr).finish()
    }
}
