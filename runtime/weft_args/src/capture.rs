//! Captured argument snapshots and reification.

use weft_reference::Reference;
use weft_value::{Dict, RenderResult, Value};

use crate::args::{NamedEntries, PositionalEntries};

/// Snapshot of which positional references an invocation supplied.
///
/// Holds the references themselves, not their values; cheap to clone into
/// a compute closure.
#[derive(Clone)]
pub struct CapturedPositional {
    pub(crate) entries: PositionalEntries,
}

impl CapturedPositional {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot of which named references an invocation supplied, in call-site
/// entry order.
#[derive(Clone)]
pub struct CapturedNamed {
    pub(crate) entries: NamedEntries,
}

impl CapturedNamed {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read every captured named reference and build the plain mapping.
///
/// Runs inside whatever tracking frame the caller has open, so each read
/// registers its dependencies there. Errors from any reference propagate
/// unchanged.
pub fn reify_named(captured: &CapturedNamed) -> RenderResult<Dict> {
    let mut dict = Dict::with_capacity(captured.entries.len());
    for (name, reference) in &captured.entries {
        dict.insert(name.clone(), reference.value()?);
    }
    Ok(dict)
}

/// Read every captured positional reference, in order.
pub fn reify_positional(captured: &CapturedPositional) -> RenderResult<Vec<Value>> {
    captured.entries.iter().map(Reference::value).collect()
}
