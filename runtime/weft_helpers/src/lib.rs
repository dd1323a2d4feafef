//! Weft Helpers - the built-in helper family.
//!
//! Each helper is a boundary adapter between the host's template
//! invocation protocol and the reference graph: it takes the invocation's
//! [`CallArguments`], captures the argument references it cares about, and
//! returns a [`Reference`] that recomputes from that capture. Invoking a
//! helper reads nothing; reading the returned reference does.
//!
//! The family:
//!
//! - [`hash`]: a dict over the named arguments
//! - [`array`]: a list over the positional arguments
//! - [`concat`]: the joined rendered text of the positional arguments
//! - [`get`]: a path lookup rooted at a base value
//!
//! [`builtin_helper`] resolves a template-facing name to its
//! implementation for the host's resolver.

use weft_args::CallArguments;
use weft_reference::Reference;

mod array;
mod concat;
mod get;
mod hash;

#[cfg(test)]
mod tests;

pub use array::array;
pub use concat::concat;
pub use get::get;
pub use hash::hash;

/// A helper implementation: arguments bag in, reference out.
pub type HelperFn = fn(&CallArguments) -> Reference;

/// Resolve a built-in helper by its template-facing name.
pub fn builtin_helper(name: &str) -> Option<HelperFn> {
    match name {
        "hash" => Some(hash),
        "array" => Some(array),
        "concat" => Some(concat),
        "get" => Some(get),
        _ => None,
    }
}
