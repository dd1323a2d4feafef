//! The template-runtime value model.

use std::fmt;

use crate::{Dict, Heap};

/// A value flowing through template rendering.
///
/// Scalar variants are inline; `Str`, `List`, and `Dict` live behind
/// [`Heap`] so cloning a value is always cheap. `Undefined` is the result
/// of resolving something that does not exist and is distinct from an
/// explicit `Null`.
#[derive(Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    Dict(Heap<Dict>),
}

impl Value {
    /// Create a string value.
    #[inline]
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    #[must_use]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a dict value.
    #[inline]
    #[must_use]
    pub fn dict(entries: Dict) -> Self {
        Value::Dict(Heap::new(entries))
    }

    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }

    /// Resolve one path segment against this value.
    ///
    /// Dict values resolve string keys; list values resolve decimal
    /// indexes. Every miss, including a segment against a scalar, is
    /// `Undefined` rather than an error.
    #[must_use]
    pub fn get_path_segment(&self, segment: &str) -> Value {
        match self {
            Value::Dict(dict) => dict.get(segment).cloned().unwrap_or(Value::Undefined),
            Value::List(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .cloned()
                .unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Dict(dict) => write!(f, "Dict({:?})", &**dict),
        }
    }
}

/// Template text for a value.
///
/// `Undefined` and `Null` render as nothing, strings render raw, lists
/// render comma-joined, dicts render with keys sorted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined | Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{}", &**s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Dict(dict) => write!(f, "{}", &**dict),
        }
    }
}
