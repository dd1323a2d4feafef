//! The `concat` helper.

use weft_args::{reify_positional, CallArguments};
use weft_reference::Reference;
use weft_value::Value;

/// Join the rendered text of every positional argument.
///
/// ```text
/// {{concat user.name " (" user.title ")"}}
/// ```
///
/// Parts render the way template interpolation renders them, so
/// `undefined` and `null` contribute nothing. Read-only.
pub fn concat(args: &CallArguments) -> Reference {
    let captured = args.positional().capture();

    Reference::compute_labeled(
        args.tracker(),
        move || {
            let parts = reify_positional(&captured)?;
            let text: String = parts.iter().map(ToString::to_string).collect();
            Ok(Value::string(text))
        },
        "concat",
    )
}
