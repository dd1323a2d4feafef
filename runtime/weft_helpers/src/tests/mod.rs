//! Helper behavior tests.
//!
//! Suites exceeding 200 lines live here rather than inline in the
//! implementation files.


use weft_reference::Reference;
use weft_track::{TrackedCell, Tracker};
use weft_value::{Dict, Value};

/// One labeled string cell on `tracker`.
fn string_cell(tracker: &Tracker, label: &str, text: &str) -> TrackedCell<Value> {
    TrackedCell::labeled(tracker, Value::string(text), label)
}

/// Nested fixture: `{name, title, address: {city}}`.
fn user_value(name: &str, title: &str, city: &str) -> Value {
    let mut address = Dict::new();
    address.insert("city", Value::string(city));
    let mut user = Dict::new();
    user.insert("name", Value::string(name));
    user.insert("title", Value::string(title));
    user.insert("address", Value::dict(address));
    Value::dict(user)
}

/// Read a reference that must yield a dict.
fn read_dict(reference: &Reference) -> Dict {
    match reference.value() {
        Ok(Value::Dict(dict)) => (*dict).clone(),
        other => panic!("expected a dict value, got {other:?}"),
    }
}

/// Read a reference that must yield a list.
fn read_list(reference: &Reference) -> Vec<Value> {
    match reference.value() {
        Ok(Value::List(items)) => (*items).clone(),
        other => panic!("expected a list value, got {other:?}"),
    }
}

/// Read a reference that must yield a string.
fn read_text(reference: &Reference) -> String {
    match reference.value() {
        Ok(Value::Str(text)) => (*text).clone(),
        other => panic!("expected a string value, got {other:?}"),
    }
}
