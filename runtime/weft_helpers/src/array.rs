//! The `array` helper.

use weft_args::{reify_positional, CallArguments};
use weft_reference::Reference;
use weft_value::Value;

/// Build a reactive list over the invocation's positional arguments.
///
/// ```text
/// {{#each (array first second "fixed") as |item|}}
/// ```
///
/// Element order is call-site order, and every element stays bound to its
/// argument reference. Read-only.
pub fn array(args: &CallArguments) -> Reference {
    let captured = args.positional().capture();

    Reference::compute_labeled(
        args.tracker(),
        move || reify_positional(&captured).map(Value::list),
        "array",
    )
}
