//! The arguments bag and its positional/named views.

use std::fmt;

use smallvec::SmallVec;
use weft_reference::Reference;
use weft_track::Tracker;

use crate::capture::{CapturedNamed, CapturedPositional};

/// Most call sites pass a handful of arguments; stay inline for those.
pub(crate) type PositionalEntries = SmallVec<[Reference; 4]>;
pub(crate) type NamedEntries = SmallVec<[(Box<str>, Reference); 4]>;

/// Arguments for one helper invocation.
///
/// Built once by the embedder, then handed to the helper by shared
/// reference. The bag carries the tracker the references were created
/// against so helpers can construct their own compute references on the
/// same clock.
pub struct CallArguments {
    tracker: Tracker,
    positional: PositionalArguments,
    named: NamedArguments,
}

impl CallArguments {
    /// Start building an arguments bag on `tracker`'s clock.
    pub fn builder(tracker: &Tracker) -> CallArgumentsBuilder {
        CallArgumentsBuilder {
            tracker: tracker.clone(),
            positional: SmallVec::new(),
            named: SmallVec::new(),
        }
    }

    /// An invocation with no arguments at all.
    pub fn empty(tracker: &Tracker) -> CallArguments {
        CallArguments::builder(tracker).build()
    }

    /// The clock every argument reference was created against.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn positional(&self) -> &PositionalArguments {
        &self.positional
    }

    pub fn named(&self) -> &NamedArguments {
        &self.named
    }
}

impl fmt::Debug for CallArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallArguments")
            .field("positional", &self.positional.len())
            .field("named", &self.named.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`CallArguments`].
///
/// Entry order is call-site order; a duplicate name replaces the earlier
/// value in place.
pub struct CallArgumentsBuilder {
    tracker: Tracker,
    positional: PositionalEntries,
    named: NamedEntries,
}

impl CallArgumentsBuilder {
    /// Append a positional argument.
    #[must_use]
    pub fn positional(mut self, reference: Reference) -> Self {
        self.positional.push(reference);
        self
    }

    /// Add a named argument. Reusing a name keeps its original position
    /// but takes the new reference.
    #[must_use]
    pub fn named(mut self, name: impl Into<Box<str>>, reference: Reference) -> Self {
        let name = name.into();
        if let Some(entry) = self.named.iter_mut().find(|entry| entry.0 == name) {
            entry.1 = reference;
        } else {
            self.named.push((name, reference));
        }
        self
    }

    pub fn build(self) -> CallArguments {
        CallArguments {
            tracker: self.tracker,
            positional: PositionalArguments {
                entries: self.positional,
            },
            named: NamedArguments {
                entries: self.named,
            },
        }
    }
}

/// Ordered positional arguments.
pub struct PositionalArguments {
    entries: PositionalEntries,
}

impl PositionalArguments {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The reference at `index`; out of range is the constant `undefined`
    /// reference, not an error.
    pub fn at(&self, index: usize) -> Reference {
        self.entries
            .get(index)
            .cloned()
            .unwrap_or_else(Reference::undefined)
    }

    /// Snapshot which references were supplied. Values are not read.
    pub fn capture(&self) -> CapturedPositional {
        CapturedPositional {
            entries: self.entries.clone(),
        }
    }
}

/// Named arguments in call-site entry order.
pub struct NamedArguments {
    entries: NamedEntries,
}

impl NamedArguments {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| &*entry.0 == name)
    }

    /// The reference for `name`; absent names are the constant `undefined`
    /// reference, not an error.
    pub fn get(&self, name: &str) -> Reference {
        self.entries
            .iter()
            .find(|entry| &*entry.0 == name)
            .map(|entry| entry.1.clone())
            .unwrap_or_else(Reference::undefined)
    }

    /// Names in call-site entry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| &*entry.0)
    }

    /// Snapshot which references were supplied. Values are not read.
    pub fn capture(&self) -> CapturedNamed {
        CapturedNamed {
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use weft_value::Value;

    use super::*;

    #[test]
    fn positional_entries_keep_call_site_order() {
        let tracker = Tracker::new();
        let args = CallArguments::builder(&tracker)
            .positional(Reference::constant(Value::Int(1)))
            .positional(Reference::constant(Value::Int(2)))
            .build();

        assert_eq!(args.positional().len(), 2);
        assert!(!args.positional().is_empty());
        assert_eq!(args.positional().at(0).value(), Ok(Value::Int(1)));
        assert_eq!(args.positional().at(1).value(), Ok(Value::Int(2)));
    }

    #[test]
    fn out_of_range_positional_is_constant_undefined() {
        let tracker = Tracker::new();
        let args = CallArguments::empty(&tracker);

        let missing = args.positional().at(7);
        assert!(missing.is_constant());
        assert_eq!(missing.value(), Ok(Value::Undefined));
    }

    #[test]
    fn named_entries_keep_call_site_order() {
        let tracker = Tracker::new();
        let args = CallArguments::builder(&tracker)
            .named("title", Reference::constant(Value::string("Manager")))
            .named("name", Reference::constant(Value::string("Sarah")))
            .build();

        let names: Vec<&str> = args.named().names().collect();
        assert_eq!(names, vec!["title", "name"]);
        assert!(args.named().has("name"));
        assert!(!args.named().has("age"));
        assert_eq!(args.named().get("name").value(), Ok(Value::string("Sarah")));
    }

    #[test]
    fn absent_named_lookup_is_constant_undefined() {
        let tracker = Tracker::new();
        let args = CallArguments::empty(&tracker);

        let missing = args.named().get("anything");
        assert!(missing.is_constant());
        assert_eq!(missing.value(), Ok(Value::Undefined));
    }

    #[test]
    fn duplicate_names_keep_position_and_take_last_value() {
        let tracker = Tracker::new();
        let args = CallArguments::builder(&tracker)
            .named("title", Reference::constant(Value::string("Manager")))
            .named("name", Reference::constant(Value::string("Sarah")))
            .named("title", Reference::constant(Value::string("Director")))
            .build();

        assert_eq!(args.named().len(), 2);
        let names: Vec<&str> = args.named().names().collect();
        assert_eq!(names, vec!["title", "name"]);
        assert_eq!(args.named().get("title").value(), Ok(Value::string("Director")));
    }

    #[test]
    fn empty_arguments_have_empty_views() {
        let tracker = Tracker::new();
        let args = CallArguments::empty(&tracker);

        assert!(args.positional().is_empty());
        assert!(args.named().is_empty());
        assert_eq!(args.named().len(), 0);
    }

    #[test]
    fn bag_shares_the_construction_tracker() {
        let tracker = Tracker::new();
        let args = CallArguments::empty(&tracker);
        assert_eq!(args.tracker().revision(), tracker.revision());
    }

    #[test]
    fn debug_output_summarizes_both_views() {
        let tracker = Tracker::new();
        let args = CallArguments::builder(&tracker)
            .positional(Reference::undefined())
            .named("name", Reference::undefined())
            .build();

        assert_eq!(
            format!("{args:?}"),
            r#"CallArguments { positional: 1, named: ["name"] }"#
        );
    }
}
