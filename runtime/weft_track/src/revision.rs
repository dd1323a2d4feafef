//! Monotonic clock values.

use std::fmt;

/// A point on the tracking clock.
///
/// Revisions are opaque and totally ordered; the clock only ever moves
/// forward. Consumers snapshot a revision when they cache a value and later
/// compare a tag against that snapshot to decide whether the cache is still
/// current.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// The revision of data that can never change.
    ///
    /// Compares below every clock value, so validation against any snapshot
    /// always succeeds.
    pub const CONSTANT: Revision = Revision(0);

    /// The value a fresh clock starts at.
    pub const INITIAL: Revision = Revision(1);

    /// The tick after this one.
    #[inline]
    #[must_use]
    pub(crate) fn next(self) -> Revision {
        Revision(self.0 + 1)
    }
}

impl fmt::Debug for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
