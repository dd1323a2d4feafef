//! Weft Track - revision clock and dependency tracking.
//!
//! This crate is the invalidation substrate for the Weft render runtime.
//! It answers one question cheaply: *is this cached value still current?*
//!
//! # Architecture
//!
//! Three layers, bottom up:
//!
//! - [`Revision`]: a point on a monotonic clock. Every mutation of tracked
//!   state advances the clock by one tick.
//! - [`Tag`]: a shared validation node. Reading tracked state *consumes* its
//!   tag; a tag can later report the latest revision at which anything under
//!   it changed, and validate a previously taken snapshot against it.
//! - [`Tracker`]: the clock plus a stack of consumption frames.
//!   [`Tracker::track`] runs a closure in a fresh frame and folds every tag
//!   consumed inside it into one combined tag; [`Tracker::untrack`]
//!   suppresses consumption for embedder reads that must stay invisible.
//!
//! [`TrackedCell`] is the mutable root: writes dirty its tag, reads consume
//! it. Everything else in the runtime derives its invalidation from cells.
//!
//! # Pull-based by construction
//!
//! Nothing here pushes notifications. Consumers snapshot a tag's revision
//! when they cache a value and re-validate on the next read; recomputation
//! happens only behind a failed validation. This is what keeps template
//! re-rendering proportional to what is actually read.
//!
//! # Thread Safety
//!
//! None of these types are `Send` or `Sync`. Template evaluation in the host
//! is synchronous and single-threaded, so the clock and frame stack use
//! `Rc`/`Cell` interior mutability rather than atomics.

mod cell;
mod revision;
mod tag;
mod tracker;

pub use cell::TrackedCell;
pub use revision::Revision;
pub use tag::Tag;
pub use tracker::Tracker;
