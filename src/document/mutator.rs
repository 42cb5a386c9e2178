//! Report document mutation
//!
//! Pure get/set/append/remove over `serde_json::Value` trees. Every function
//! takes a document snapshot and returns a new snapshot; the caller owns
//! persistence and re-render triggering.
//!
//! Writes create missing intermediate containers: a mapping by default, a
//! list when the next segment is all digits. An intermediate of the wrong
//! shape is replaced outright and its content is lost; form editors rely
//! on this when a field is retyped from scalar to table.

use serde_json::{json, Map, Value};

use super::path::{parse_index, Path};

/// Read the node at `path`. Missing or mistyped segments yield `None`; the
/// empty path yields the document itself.
pub fn get<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut node = doc;
    for segment in path.segments() {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Write `value` at `path`, creating intermediate containers as needed.
/// Setting at the empty path replaces the whole document.
pub fn set(doc: &Value, path: &Path, value: Value) -> Value {
    if path.is_empty() {
        return value;
    }
    let mut out = doc.clone();
    set_in_place(&mut out, path.segments(), value);
    out
}

fn set_in_place(node: &mut Value, segments: &[String], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    match parse_index(segment) {
        Some(index) => {
            if !matches!(node, Value::Array(_)) {
                *node = Value::Array(Vec::new());
            }
            if let Value::Array(items) = node {
                // Slots below the target index materialize as null.
                while items.len() <= index {
                    items.push(Value::Null);
                }
                set_in_place(&mut items[index], rest, value);
            }
        }
        None => {
            if !matches!(node, Value::Object(_)) {
                *node = Value::Object(Map::new());
            }
            if let Value::Object(map) = node {
                let child = map.entry(segment.clone()).or_insert(Value::Null);
                set_in_place(child, rest, value);
            }
        }
    }
}

/// Append one row to the list at `base_path`, creating the list if absent.
///
/// With a template the new row mirrors its key structure with every leaf
/// cleared to `""`; without one the row is `{"value": ""}`.
pub fn append_row(doc: &Value, base_path: &Path, template: Option<&Value>) -> Value {
    let mut rows = match get(doc, base_path) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };
    let row = match template {
        Some(template) => blank_like(template),
        None => json!({ "value": "" }),
    };
    rows.push(row);
    set(doc, base_path, Value::Array(rows))
}

/// Delete the row at `index` from the list at `base_path`. An out-of-range
/// index or a non-list target is a no-op.
pub fn remove_row(doc: &Value, base_path: &Path, index: usize) -> Value {
    match get(doc, base_path) {
        Some(Value::Array(items)) if index < items.len() => {
            let mut rows = items.clone();
            rows.remove(index);
            set(doc, base_path, Value::Array(rows))
        }
        _ => doc.clone(),
    }
}

/// Mirror a template's structure with every leaf reset to an empty string.
/// Shape is preserved; content is cleared.
pub fn blank_like(template: &Value) -> Value {
    match template {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), blank_like(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(blank_like).collect()),
        _ => Value::String(String::new()),
    }
}
