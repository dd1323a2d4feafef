//! The `get` helper.

use weft_args::CallArguments;
use weft_reference::Reference;

/// Look up a dot-separated path on a base value.
///
/// ```text
/// {{get user "address.city"}}
/// {{get user key}}
/// ```
///
/// The base is `positional[0]`, the path `positional[1]`. A constant path
/// is resolved once, into a chain of child references rooted at the base;
/// a dynamic path re-reads both arguments on every evaluation. Either
/// way, a missing or non-traversable segment resolves to `undefined`.
/// Read-only.
pub fn get(args: &CallArguments) -> Reference {
    let base = args.positional().at(0);
    let path = args.positional().at(1);

    if path.is_constant() {
        if let Ok(value) = path.value() {
            return child_chain(&base, &value.to_string());
        }
    }

    Reference::compute_labeled(
        args.tracker(),
        move || {
            let mut current = base.value()?;
            let segments = path.value()?.to_string();
            for segment in segments.split('.') {
                current = current.get_path_segment(segment);
            }
            Ok(current)
        },
        "get",
    )
}

fn child_chain(base: &Reference, path: &str) -> Reference {
    let mut current = base.clone();
    for segment in path.split('.') {
        current = current.child(segment);
    }
    current
}
