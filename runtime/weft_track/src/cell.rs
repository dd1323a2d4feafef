//! Tracked mutable roots.

// Rc is the implementation - clones alias one cell
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of the shared TrackedCell handle"
)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::revision::Revision;
use crate::tag::Tag;
use crate::tracker::Tracker;

/// A mutable root value with an attached dirtyable tag.
///
/// Cells are where change enters the system: every other invalidation in the
/// runtime traces back to a `set` on some cell. Reads consume the cell's tag
/// so enclosing tracked computations pick up the dependency; writes advance
/// the shared clock and dirty the tag.
///
/// `TrackedCell` is a cheap-clone handle; clones alias the same cell.
pub struct TrackedCell<T> {
    inner: Rc<CellInner<T>>,
}

struct CellInner<T> {
    tracker: Tracker,
    tag: Tag,
    value: RefCell<T>,
    /// Diagnostic only; shows up in trace output on writes.
    label: Option<Box<str>>,
}

impl<T: Clone> TrackedCell<T> {
    /// Create a cell owned by `tracker`.
    pub fn new(tracker: &Tracker, value: T) -> Self {
        Self::build(tracker, value, None)
    }

    /// Create a cell with a diagnostic label.
    pub fn labeled(tracker: &Tracker, value: T, label: impl Into<Box<str>>) -> Self {
        Self::build(tracker, value, Some(label.into()))
    }

    fn build(tracker: &Tracker, value: T, label: Option<Box<str>>) -> Self {
        TrackedCell {
            inner: Rc::new(CellInner {
                tracker: tracker.clone(),
                tag: Tag::dirtyable(tracker),
                value: RefCell::new(value),
                label,
            }),
        }
    }

    /// Current value; consumes the cell's tag.
    pub fn get(&self) -> T {
        self.inner.tracker.consume(&self.inner.tag);
        self.inner.value.borrow().clone()
    }

    /// Replace the value, advancing the clock and invalidating dependents.
    ///
    /// Dirties unconditionally; no equality gate on the old value.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        let advanced_to = self.inner.tracker.advance();
        self.inner.tag.dirty(advanced_to);
        tracing::trace!(
            label = self.inner.label.as_deref(),
            revision = ?advanced_to,
            "cell dirtied"
        );
    }

    /// Revision of the most recent write (cell creation counts as one).
    pub fn last_written(&self) -> Revision {
        self.inner.tag.revision()
    }

    /// The tracker whose clock this cell advances on writes.
    pub fn tracker(&self) -> &Tracker {
        &self.inner.tracker
    }

    /// Diagnostic label, if any.
    pub fn debug_label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }
}

impl<T> Clone for TrackedCell<T> {
    fn clone(&self) -> Self {
        TrackedCell {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TrackedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TrackedCell");
        if let Some(label) = &self.inner.label {
            s.field("label", label);
        }
        s.field("value", &*self.inner.value.borrow()).finish()
    }
}
