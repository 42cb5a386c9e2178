//! Corrected-array pass
//!
//! Rebuilds the corrected sibling of every test-reading array at the top
//! level of a report. The pass is recomputation, not bookkeeping: it
//! derives every corrected array from its source array and the current
//! factor, so running it twice with the same inputs is a no-op.

use serde_json::{Map, Value};

use crate::correction::multiply_by_tcf;

/// Name of the corrected sibling for a source array key.
pub fn derived_key(key: &str) -> String {
    let lower = key.to_lowercase();
    if lower.contains("insulation") {
        "temperatureCorrectedTests".to_string()
    } else if key == "tests" {
        "correctedTests".to_string()
    } else {
        format!("corrected{}", capitalize(key))
    }
}

/// First character uppercased, the rest verbatim.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Keys the pass itself writes. Never treated as source arrays, which keeps
/// repeated passes from deriving corrections of corrections.
pub fn is_derived_key(key: &str) -> bool {
    key.starts_with("corrected") || key.starts_with("temperatureCorrected")
}

/// Recompute every corrected sibling array for the given factor.
pub fn apply_corrections(doc: &Value, tcf: f64) -> Value {
    let Some(map) = doc.as_object() else {
        return doc.clone();
    };
    let mut out = map.clone();
    for (key, value) in map {
        if is_derived_key(key) {
            continue;
        }
        let Some(items) = value.as_array() else {
            continue;
        };
        if !is_correctable(key, items) {
            continue;
        }
        let corrected: Vec<Value> = items
            .iter()
            .filter_map(Value::as_object)
            .map(|row| correct_row(row, tcf))
            .collect();
        out.insert(derived_key(key), Value::Array(corrected));
    }
    Value::Object(out)
}

/// A source array qualifies when it is a non-empty list of objects and
/// either its key names a test area, every row carries a nested `values`
/// map, or at least one row field reads as a number.
fn is_correctable(key: &str, items: &[Value]) -> bool {
    if items.is_empty() || !items.iter().all(Value::is_object) {
        return false;
    }
    let lower = key.to_lowercase();
    if lower.contains("test") || lower.contains("resistance") || lower.contains("insulation") {
        return true;
    }
    if items
        .iter()
        .all(|item| item.get("values").is_some_and(Value::is_object))
    {
        return true;
    }
    items
        .iter()
        .filter_map(Value::as_object)
        .any(|row| row.values().any(is_numeric_text))
}

fn correct_row(row: &Map<String, Value>, tcf: f64) -> Value {
    // Rows with a nested `values` map keep their identity fields as-is and
    // correct inside `values` only.
    if let Some(Value::Object(values)) = row.get("values") {
        let mut out = row.clone();
        out.insert(
            "values".to_string(),
            Value::Object(correct_fields(values, tcf)),
        );
        return Value::Object(out);
    }
    Value::Object(correct_fields(row, tcf))
}

fn correct_fields(fields: &Map<String, Value>, tcf: f64) -> Map<String, Value> {
    let mut out = Map::with_capacity(fields.len());
    for (field, value) in fields {
        if is_passthrough_field(field) {
            out.insert(field.clone(), value.clone());
        } else {
            out.insert(field.clone(), corrected_value(value, tcf));
        }
    }
    out
}

/// Labels and setup data must survive correction verbatim.
fn is_passthrough_field(field: &str) -> bool {
    let lower = field.to_lowercase();
    lower.contains("section")
        || lower.contains("voltage")
        || lower.contains("unit")
        || lower.contains("description")
}

fn corrected_value(value: &Value, tcf: f64) -> Value {
    match value {
        Value::String(text) => Value::String(multiply_by_tcf(text, tcf)),
        Value::Number(number) => Value::String(multiply_by_tcf(&number.to_string(), tcf)),
        other => other.clone(),
    }
}

fn is_numeric_text(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => text.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}
