//! Weft Reference - reactive reference nodes for the Weft render runtime.
//!
//! A [`Reference`] is a lazily evaluated, memoized view of one value in a
//! rendered template: a constant, a tracked cell, a computation over other
//! references, or a property of any of those. Reading a reference returns
//! its current value; the reference remembers what it read and recomputes
//! only when one of those inputs has been written since.
//!
//! # Architecture
//!
//! References sit directly on top of `weft_track`:
//!
//! - a read runs the node's computation inside [`Tracker::track`] and keeps
//!   the combined [`Tag`] next to the cached value;
//! - the next read validates that tag against the snapshot taken at cache
//!   time and only recomputes behind a failed validation;
//! - either way the tag is consumed again, so an enclosing computation
//!   inherits the node's dependencies without re-running it.
//!
//! Property access goes through [`Reference::child`], which builds a
//! reference that reads the parent and resolves one path segment. Children
//! are cached per segment on the parent, weakly, so a parent and its
//! children never keep each other alive.
//!
//! # Thread Safety
//!
//! Not `Send` or `Sync`. Reference graphs live on the rendering thread,
//! next to the tracker whose clock they validate against.
//!
//! [`Tracker::track`]: weft_track::Tracker::track
//! [`Tag`]: weft_track::Tag

mod reference;


pub use reference::Reference;
