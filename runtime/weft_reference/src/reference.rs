//! Reference nodes and their read/update protocol.

// Rc is the implementation of the shared reference node
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of the shared reference node"
)]

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use weft_track::{Revision, Tag, TrackedCell, Tracker};
use weft_value::{read_only_reference, RenderResult, Value};

type ComputeFn = Box<dyn Fn() -> RenderResult<Value>>;
type UpdateFn = Box<dyn Fn(Value) -> RenderResult<()>>;

/// Cached result of the most recent successful computation.
struct ComputeCache {
    tag: Tag,
    /// The tag's revision at cache time; compared on the next read.
    snapshot: Revision,
    value: Value,
}

enum RefKind {
    /// Fixed value decided at construction. Reads never track.
    Constant(Value),
    /// Lazily evaluated, memoized computation.
    Compute {
        tracker: Tracker,
        compute: ComputeFn,
        update: Option<UpdateFn>,
        cache: RefCell<Option<ComputeCache>>,
    },
}

struct ReferenceNode {
    kind: RefKind,
    /// Diagnostic only; never affects behavior.
    label: Option<Box<str>>,
    /// Child references by path segment. Weak so a parent and its children
    /// never form a strong cycle: each child's closure holds the parent.
    children: RefCell<FxHashMap<Box<str>, Weak<ReferenceNode>>>,
}

/// Shared handle to a reference node.
///
/// Clones alias the same node; node identity is observable through
/// [`Reference::ptr_eq`]. See the crate docs for the read protocol.
#[derive(Clone)]
pub struct Reference {
    node: Rc<ReferenceNode>,
}

impl Reference {
    /// A reference that always yields `value`.
    pub fn constant(value: Value) -> Reference {
        Reference::from_node(RefKind::Constant(value), None)
    }

    /// The constant `undefined` reference.
    pub fn undefined() -> Reference {
        Reference::constant(Value::Undefined)
    }

    /// A memoized computation with no update handler and no label.
    pub fn compute(
        tracker: &Tracker,
        compute: impl Fn() -> RenderResult<Value> + 'static,
    ) -> Reference {
        Reference::build_compute(tracker, Box::new(compute), None, None)
    }

    /// A memoized computation carrying a diagnostic label.
    pub fn compute_labeled(
        tracker: &Tracker,
        compute: impl Fn() -> RenderResult<Value> + 'static,
        label: impl Into<Box<str>>,
    ) -> Reference {
        Reference::build_compute(tracker, Box::new(compute), None, Some(label.into()))
    }

    /// A memoized computation that also accepts updates.
    pub fn compute_updatable(
        tracker: &Tracker,
        compute: impl Fn() -> RenderResult<Value> + 'static,
        update: impl Fn(Value) -> RenderResult<()> + 'static,
        label: impl Into<Box<str>>,
    ) -> Reference {
        Reference::build_compute(
            tracker,
            Box::new(compute),
            Some(Box::new(update)),
            Some(label.into()),
        )
    }

    /// Bridge a [`TrackedCell`] into the reference graph.
    ///
    /// Reads consume the cell's tag; updates write straight through to the
    /// cell. The cell's label, if any, carries over.
    pub fn cell(cell: &TrackedCell<Value>) -> Reference {
        let read = cell.clone();
        let write = cell.clone();
        Reference::build_compute(
            cell.tracker(),
            Box::new(move || Ok(read.get())),
            Some(Box::new(move |value| {
                write.set(value);
                Ok(())
            })),
            cell.debug_label().map(Box::from),
        )
    }

    fn build_compute(
        tracker: &Tracker,
        compute: ComputeFn,
        update: Option<UpdateFn>,
        label: Option<Box<str>>,
    ) -> Reference {
        Reference::from_node(
            RefKind::Compute {
                tracker: tracker.clone(),
                compute,
                update,
                cache: RefCell::new(None),
            },
            label,
        )
    }

    fn from_node(kind: RefKind, label: Option<Box<str>>) -> Reference {
        Reference {
            node: Rc::new(ReferenceNode {
                kind,
                label,
                children: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    /// Current value of the reference.
    ///
    /// Constant references clone their value and register nothing. Compute
    /// references validate the cached tag against its snapshot, re-run the
    /// computation in a fresh tracking frame on a miss, and consume the tag
    /// either way so enclosing computations inherit the dependency.
    ///
    /// A failed computation leaves the cache cold (the next read runs the
    /// computation again) and registers nothing with the enclosing frame.
    pub fn value(&self) -> RenderResult<Value> {
        match &self.node.kind {
            RefKind::Constant(value) => Ok(value.clone()),
            RefKind::Compute {
                tracker,
                compute,
                cache,
                ..
            } => {
                let hit = cache
                    .borrow()
                    .as_ref()
                    .filter(|entry| entry.tag.validate(entry.snapshot))
                    .map(|entry| (entry.tag.clone(), entry.value.clone()));
                if let Some((tag, value)) = hit {
                    tracker.consume(&tag);
                    return Ok(value);
                }

                let (result, tag) = tracker.track(|| compute());
                let value = match result {
                    Ok(value) => value,
                    Err(error) => {
                        *cache.borrow_mut() = None;
                        return Err(error);
                    }
                };

                let snapshot = tag.revision();
                *cache.borrow_mut() = Some(ComputeCache {
                    tag: tag.clone(),
                    snapshot,
                    value: value.clone(),
                });
                tracker.consume(&tag);
                tracing::trace!(
                    label = self.node.label.as_deref(),
                    snapshot = ?snapshot,
                    "reference recomputed"
                );
                Ok(value)
            }
        }
    }

    /// Push a value back through the update handler.
    ///
    /// References without a handler are read-only and reject the update.
    pub fn update(&self, value: Value) -> RenderResult<()> {
        match &self.node.kind {
            RefKind::Compute {
                update: Some(update),
                ..
            } => update(value),
            _ => Err(read_only_reference(self.debug_label())),
        }
    }

    pub fn is_updatable(&self) -> bool {
        matches!(&self.node.kind, RefKind::Compute { update: Some(_), .. })
    }

    /// Whether reads of this reference can never change: either a constant
    /// node, or a computation whose first run consumed nothing tracked.
    pub fn is_constant(&self) -> bool {
        match &self.node.kind {
            RefKind::Constant(_) => true,
            RefKind::Compute { cache, .. } => cache
                .borrow()
                .as_ref()
                .is_some_and(|entry| entry.tag.is_constant()),
        }
    }

    /// The property reference for one path segment of this reference.
    ///
    /// Children are cached per segment: asking for the same segment twice
    /// while the first child is alive yields the same node. Missing
    /// segments resolve to `undefined`, not an error.
    pub fn child(&self, segment: &str) -> Reference {
        if let Some(node) = self
            .node
            .children
            .borrow()
            .get(segment)
            .and_then(Weak::upgrade)
        {
            return Reference { node };
        }

        let child = self.build_child(segment);
        self.node
            .children
            .borrow_mut()
            .insert(segment.into(), Rc::downgrade(&child.node));
        child
    }

    fn build_child(&self, segment: &str) -> Reference {
        let label: Option<Box<str>> = self
            .node
            .label
            .as_deref()
            .map(|parent| format!("{parent}.{segment}").into());

        match &self.node.kind {
            // The parent can never change, so resolve eagerly.
            RefKind::Constant(value) => {
                Reference::from_node(RefKind::Constant(value.get_path_segment(segment)), label)
            }
            RefKind::Compute { tracker, .. } => {
                let parent = self.clone();
                let segment: Box<str> = segment.into();
                Reference::build_compute(
                    tracker,
                    Box::new(move || Ok(parent.value()?.get_path_segment(&segment))),
                    None,
                    label,
                )
            }
        }
    }

    /// A read-only view of this reference.
    ///
    /// Already-read-only references come back as the same node; updatable
    /// ones get a forwarding node that keeps the label and the dependency
    /// flow but rejects updates.
    pub fn read_only(&self) -> Reference {
        match &self.node.kind {
            RefKind::Compute {
                tracker,
                update: Some(_),
                ..
            } => {
                let inner = self.clone();
                Reference::build_compute(
                    tracker,
                    Box::new(move || inner.value()),
                    None,
                    self.node.label.clone(),
                )
            }
            _ => self.clone(),
        }
    }

    /// Diagnostic label, if any.
    pub fn debug_label(&self) -> Option<&str> {
        self.node.label.as_deref()
    }

    /// Whether two handles alias the same node.
    pub fn ptr_eq(&self, other: &Reference) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.node.kind {
            RefKind::Constant(_) => "constant",
            RefKind::Compute { .. } => "compute",
        };
        let mut s = f.debug_struct("Reference");
        s.field("kind", &kind);
        if let Some(label) = &self.node.label {
            s.field("label", label);
        }
        s.finish()
    }
}

#[cfg(test)]
mod node_tests {
    use pretty_assertions::assert_eq;
    use weft_value::Dict;

    use super::*;

    fn person(name: &str) -> Value {
        let mut dict = Dict::new();
        dict.insert("name", Value::string(name));
        Value::dict(dict)
    }

    #[test]
    fn dropping_the_last_child_handle_releases_its_node() {
        let tracker = Tracker::new();
        let cell = TrackedCell::new(&tracker, person("Sarah"));
        let parent = Reference::cell(&cell);

        let child = parent.child("name");
        assert_eq!(Rc::strong_count(&parent.node), 2);

        drop(child);
        assert_eq!(Rc::strong_count(&parent.node), 1);
    }

    #[test]
    fn stale_child_entries_are_replaced_not_duplicated() {
        let tracker = Tracker::new();
        let cell = TrackedCell::new(&tracker, person("Sarah"));
        let parent = Reference::cell(&cell);

        let first = parent.child("name");
        drop(first);

        let second = parent.child("name");
        assert_eq!(second.value(), Ok(Value::string("Sarah")));
        assert_eq!(parent.node.children.borrow().len(), 1);
    }
}
