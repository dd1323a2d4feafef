//! The `hash` helper.

use weft_args::{reify_named, CallArguments};
use weft_reference::Reference;
use weft_value::Value;

/// Build a reactive dict over the invocation's named arguments.
///
/// ```text
/// {{yield (hash name="Sarah" title=office)}}
/// ```
///
/// Reading the returned reference yields a plain mapping holding exactly
/// the supplied names; `title` above stays bound to writes of `office`.
/// The mapping has no entries beyond what was supplied, so looking up a
/// generic method-like name misses. The reference is read-only.
///
/// The names are captured here, once; every evaluation re-reads the
/// captured references and assembles the mapping fresh, which is what
/// keeps the result live without copying any argument value eagerly.
pub fn hash(args: &CallArguments) -> Reference {
    let captured = args.named().capture();

    Reference::compute_labeled(
        args.tracker(),
        move || reify_named(&captured).map(Value::dict),
        "hash",
    )
}
