//! String-keyed value mapping.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// An ordered-agnostic mapping from string keys to [`Value`]s.
///
/// A `Dict` owns exactly the entries inserted into it; lookups for any
/// other key miss, no matter how method-like the key looks. Iteration
/// order is unspecified, so [`fmt::Display`] sorts keys to keep rendered
/// text deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct Dict {
    entries: FxHashMap<Box<str>, Value>,
}

impl Dict {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Dict {
            entries: FxHashMap::default(),
        }
    }

    /// Create an empty mapping with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict {
            entries: FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher),
        }
    }

    /// Insert an entry, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<Box<str>>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Look up a key. Absent keys are `None`; there are no implicit entries.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (&**key, value))
    }

    /// Iterate over keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| &**key)
    }
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Dict {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        let mut map = f.debug_map();
        for key in keys {
            if let Some(value) = self.get(key) {
                map.entry(&key, value);
            }
        }
        map.finish()
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        write!(f, "{{")?;
        for (index, key) in keys.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: ")?;
            if let Some(value) = self.get(key) {
                write!(f, "{value}")?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut dict = Dict::new();
        dict.insert("name", Value::string("Sarah"));
        assert_eq!(dict.get("name"), Some(&Value::string("Sarah")));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut dict = Dict::new();
        dict.insert("title", Value::string("Manager"));
        let previous = dict.insert("title", Value::string("Director"));
        assert_eq!(previous, Some(Value::string("Manager")));
        assert_eq!(dict.get("title"), Some(&Value::string("Director")));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn lookups_only_hit_inserted_entries() {
        let mut dict = Dict::new();
        dict.insert("age", Value::Int(29));
        // Keys that name common object machinery are misses like any other.
        assert_eq!(dict.get("to_string"), None);
        assert_eq!(dict.get("constructor"), None);
        assert_eq!(dict.get("len"), None);
        assert!(!dict.contains_key("keys"));
        assert!(dict.contains_key("age"));
    }

    #[test]
    fn display_sorts_keys() {
        let mut dict = Dict::new();
        dict.insert("b", Value::Int(2));
        dict.insert("a", Value::Int(1));
        dict.insert("c", Value::string("x"));
        assert_eq!(dict.to_string(), "{a: 1, b: 2, c: x}");
    }

    #[test]
    fn from_iterator_collects_entries() {
        let dict: Dict = [("x", Value::Int(1)), ("y", Value::Int(2))]
            .into_iter()
            .collect();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("y"), Some(&Value::Int(2)));
    }

    #[test]
    fn empty_dict_displays_as_braces() {
        assert_eq!(Dict::new().to_string(), "{}");
        assert!(Dict::new().is_empty());
    }
}
