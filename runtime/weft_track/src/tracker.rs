//! The tracking clock and consumption frames.

// Rc is the implementation - all access goes through the Tracker handle
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of the shared Tracker handle"
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::revision::Revision;
use crate::tag::{ConsumedTags, Tag};

/// One open consumption frame.
enum Frame {
    /// Consumption records dependencies.
    Tracking(ConsumedTags),
    /// Consumption is suppressed (`untrack`).
    Inert,
}

/// Single-threaded tracking runtime: a revision clock plus a stack of open
/// consumption frames.
///
/// `Tracker` is a cheap-clone handle; clones share the same clock and frame
/// stack. Everything that participates in invalidation (cells, references,
/// argument bags) captures a handle at creation time and uses it whenever it
/// is read or written later.
///
/// # Thread Safety
///
/// `Tracker` is NOT thread-safe. Template evaluation in the host runs
/// single-threaded, so the clock is a plain `Cell` and the frame stack a
/// `RefCell` rather than their atomic/locked counterparts.
#[derive(Clone)]
pub struct Tracker {
    state: Rc<TrackerState>,
}

struct TrackerState {
    /// Current clock value; advanced by every tracked write.
    revision: Cell<Revision>,
    /// Open consumption frames, innermost last.
    frames: RefCell<Vec<Frame>>,
}

/// RAII guard pairing every frame push with exactly one pop.
///
/// A closure that panics unwinds through the guard, which pops (and
/// discards) the frame so the stack stays balanced for whoever catches the
/// panic. The normal path goes through [`FrameGuard::finish`], which
/// disarms the drop and hands the frame back.
struct FrameGuard<'a> {
    state: &'a TrackerState,
    armed: bool,
}

impl<'a> FrameGuard<'a> {
    fn push(state: &'a TrackerState, frame: Frame) -> Self {
        state.frames.borrow_mut().push(frame);
        FrameGuard { state, armed: true }
    }

    /// Pop and return the frame, disarming the drop path.
    fn finish(mut self) -> Option<Frame> {
        self.armed = false;
        self.state.frames.borrow_mut().pop()
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.state.frames.borrow_mut().pop();
        }
    }
}

impl Tracker {
    /// Create a tracker with a fresh clock.
    pub fn new() -> Self {
        Tracker {
            state: Rc::new(TrackerState {
                revision: Cell::new(Revision::INITIAL),
                frames: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Current clock value.
    #[inline]
    pub fn revision(&self) -> Revision {
        self.state.revision.get()
    }

    /// Advance the clock by one tick, returning the new value.
    pub(crate) fn advance(&self) -> Revision {
        let next = self.state.revision.get().next();
        self.state.revision.set(next);
        next
    }

    /// Run `f` inside a fresh tracking frame.
    ///
    /// Every tag consumed while `f` runs is folded into the returned
    /// combined tag. The tag is returned unconditionally; whether `f`'s
    /// result represents success is the caller's concern. If `f` panics,
    /// the frame is popped and discarded during unwinding.
    ///
    /// Nested frames are independent: consumption lands in the innermost
    /// frame only, and an inner frame's combined tag reaches the outer frame
    /// only if the caller consumes it there explicitly.
    pub fn track<T>(&self, f: impl FnOnce() -> T) -> (T, Tag) {
        let guard = FrameGuard::push(&self.state, Frame::Tracking(ConsumedTags::new()));
        let value = f();
        let tag = match guard.finish() {
            Some(Frame::Tracking(tags)) => Tag::combine(self, tags),
            _ => {
                debug_assert!(false, "tracking frame stack out of balance");
                Tag::constant()
            }
        };
        (value, tag)
    }

    /// Run `f` with consumption suppressed.
    ///
    /// Reads inside `f` do not register dependencies in any enclosing frame.
    /// A nested [`track`](Tracker::track) inside `f` re-enables consumption
    /// for its own frame.
    pub fn untrack<T>(&self, f: impl FnOnce() -> T) -> T {
        let guard = FrameGuard::push(&self.state, Frame::Inert);
        let value = f();
        let frame = guard.finish();
        debug_assert!(
            matches!(frame, Some(Frame::Inert)),
            "tracking frame stack out of balance"
        );
        value
    }

    /// Record `tag` as a dependency of the innermost open frame.
    ///
    /// No-op outside any frame, inside [`untrack`](Tracker::untrack), and
    /// for constant tags. Consuming the same tag repeatedly within one frame
    /// records it once (node identity).
    pub fn consume(&self, tag: &Tag) {
        if tag.is_constant() {
            return;
        }
        if let Some(Frame::Tracking(tags)) = self.state.frames.borrow_mut().last_mut() {
            if !tags.iter().any(|seen| seen.same_node(tag)) {
                tags.push(tag.clone());
            }
        }
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
