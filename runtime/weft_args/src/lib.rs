//! Weft Args - call-site arguments for helper invocations.
//!
//! A [`CallArguments`] bag is what the host's template machinery hands to a
//! helper: ordered positional references plus named references, all still
//! unevaluated. Helpers that outlive the invocation *capture* the views
//! they care about ([`PositionalArguments::capture`],
//! [`NamedArguments::capture`]) and reify them later, inside their own
//! tracked computation, with [`reify_positional`] / [`reify_named`].
//!
//! Capturing records *which* references were supplied, never their values;
//! reading happens only at reification time, which is what lets a helper's
//! output stay live against argument writes.

mod args;
mod capture;

pub use args::{CallArguments, CallArgumentsBuilder, NamedArguments, PositionalArguments};
pub use capture::{reify_named, reify_positional, CapturedNamed, CapturedPositional};
