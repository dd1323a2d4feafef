//! Validation tags.
//!
//! A tag answers: has anything underneath it changed since a given snapshot
//! was taken? Tags are created in three ways:
//!
//! - constant: nothing underneath can ever change;
//! - dirtyable: owned by a [`TrackedCell`](crate::TrackedCell), bumped on
//!   every write;
//! - combined: the fold of every tag consumed during one tracked
//!   computation, produced by [`Tracker::track`](crate::Tracker::track).
//!
//! Combined tags memoize their revision per clock tick: within one tick no
//! tag can change (any write advances the clock first), so a whole
//! validation pass over a deep graph touches each node at most once.

// Rc is the implementation - all sharing goes through Tag clones
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of the shared Tag node"
)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::revision::Revision;
use crate::tracker::Tracker;

/// Tags consumed by a single tracking frame.
///
/// Call sites consume a handful of tags at most, so the storage is inline.
pub(crate) type ConsumedTags = SmallVec<[Tag; 4]>;

/// Shared validation node.
///
/// Cheap to clone; clones alias the same node. Node identity (not value) is
/// what deduplicates consumption within a tracking frame.
#[derive(Clone)]
pub struct Tag {
    node: Rc<TagNode>,
}

enum TagNode {
    /// Never invalidates.
    Constant,
    /// Owned by a tracked cell; `last_dirtied` is bumped on every write.
    Dirtyable { last_dirtied: Cell<Revision> },
    /// Max over a fixed set of child tags, memoized per clock tick.
    Combined {
        tracker: Tracker,
        children: Box<[Tag]>,
        last_checked: Cell<Revision>,
        last_value: Cell<Revision>,
    },
}

impl Tag {
    /// The tag of data that can never change.
    ///
    /// Consuming a constant tag is a no-op, and a computation that only
    /// consumed constant tags is itself permanently valid.
    pub fn constant() -> Tag {
        Tag {
            node: Rc::new(TagNode::Constant),
        }
    }

    /// Create a dirtyable tag stamped with the clock's current value.
    ///
    /// Stamping with the current revision (rather than the clock's initial
    /// value) makes snapshots taken *before* the owning cell existed
    /// correctly invalid.
    pub(crate) fn dirtyable(tracker: &Tracker) -> Tag {
        Tag {
            node: Rc::new(TagNode::Dirtyable {
                last_dirtied: Cell::new(tracker.revision()),
            }),
        }
    }

    /// Fold the tags consumed by one tracking frame into a single tag.
    ///
    /// Zero consumed tags fold to the constant tag; exactly one is returned
    /// as-is rather than wrapped.
    pub(crate) fn combine(tracker: &Tracker, mut tags: ConsumedTags) -> Tag {
        match tags.len() {
            0 => Tag::constant(),
            1 => tags.pop().unwrap_or_else(Tag::constant),
            _ => Tag {
                node: Rc::new(TagNode::Combined {
                    tracker: tracker.clone(),
                    children: tags.into_vec().into_boxed_slice(),
                    last_checked: Cell::new(Revision::CONSTANT),
                    last_value: Cell::new(Revision::CONSTANT),
                }),
            },
        }
    }

    /// Latest revision at which anything under this tag changed.
    pub fn revision(&self) -> Revision {
        match &*self.node {
            TagNode::Constant => Revision::CONSTANT,
            TagNode::Dirtyable { last_dirtied } => last_dirtied.get(),
            TagNode::Combined {
                tracker,
                children,
                last_checked,
                last_value,
            } => {
                let now = tracker.revision();
                if last_checked.get() == now {
                    return last_value.get();
                }
                let mut max = Revision::CONSTANT;
                for child in children.iter() {
                    max = max.max(child.revision());
                }
                last_checked.set(now);
                last_value.set(max);
                max
            }
        }
    }

    /// True when nothing under this tag has changed since `snapshot`.
    #[inline]
    pub fn validate(&self, snapshot: Revision) -> bool {
        self.revision() <= snapshot
    }

    /// True for tags that can never invalidate.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(&*self.node, TagNode::Constant)
    }

    /// Record a write on a dirtyable tag.
    ///
    /// `advanced_to` must be the clock value the owning tracker advanced to
    /// for this write.
    pub(crate) fn dirty(&self, advanced_to: Revision) {
        match &*self.node {
            TagNode::Dirtyable { last_dirtied } => last_dirtied.set(advanced_to),
            _ => debug_assert!(false, "only dirtyable tags can be dirtied"),
        }
    }

    /// Node identity, used to deduplicate consumption within a frame.
    #[inline]
    pub(crate) fn same_node(&self, other: &Tag) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            TagNode::Constant => write!(f, "Tag(constant)"),
            TagNode::Dirtyable { last_dirtied } => {
                write!(f, "Tag(dirtyable, last {:?})", last_dirtied.get())
            }
            TagNode::Combined { children, .. } => {
                write!(f, "Tag(combined, {} children)", children.len())
            }
        }
    }
}
