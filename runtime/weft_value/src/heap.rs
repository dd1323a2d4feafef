//! Factory-enforced shared allocation.

// Rc is the intentional implementation detail of Heap<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the whole point of Heap<T>"
)]

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared immutable allocation backing the heap variants of
/// [`Value`](crate::Value).
///
/// The constructor is crate-private so that every heap value is built
/// through a `Value` factory method; cloning a heap value is a reference
/// count bump, never a deep copy.
///
/// # Thread Safety
///
/// `Heap<T>` is NOT thread-safe. It wraps `Rc`, which is faster than `Arc`
/// but cannot cross threads. Rendering in the host runs single-threaded,
/// so values never need to.
///
/// # Zero-Cost Abstraction
///
/// `#[repr(transparent)]` guarantees the same layout as `Rc<T>`; the wrapper
/// only restricts construction.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    /// Allocate a shared value. Crate-private: use `Value` factories.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
