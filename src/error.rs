use core::fmt;

/// Returned by the push operations of a bounded [`Deque`](crate::Deque) that is already
/// at its maximum length. The rejected element is handed back untouched.
#[derive(Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("deque is at its maximum length of {max_len}")]
pub struct CapacityError<T> {
    element: T,
    max_len: usize,
}

impl<T> CapacityError<T> {
    #[inline]
    pub(crate) const fn new(element: T, max_len: usize) -> Self {
        Self { element, max_len }
    }

    /// The bound the deque was constructed with.
    #[inline]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Takes back the element that could not be pushed.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }
}

// written by hand so that `T: Debug` isn't required
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError").field("max_len", &self.max_len).finish_non_exhaustive()
    }
}
