//! Unified Edit Model
//!
//! All report edits route through this enum. Structural row operations are
//! first-class variants instead of magic path suffixes, so an append or
//! remove can never be mistaken for a scalar write.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{self, Path};

use super::errors::EditError;

const ADD_ROW_SUFFIX: &str = "_ADD_ROW_";
const REMOVE_ROW_MARKER: &str = "_REMOVE_ROW_";

/// All report edits route through this enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Write a value at a path, creating intermediate containers.
    Set {
        path: String,
        value: Value,
    },
    /// Append a row to the list at `path`, blank or cloned-blank from a
    /// template row.
    AppendRow {
        path: String,
        #[serde(default)]
        template: Option<Value>,
    },
    /// Delete the row at `index` from the list at `path`.
    RemoveRow {
        path: String,
        index: usize,
    },
}

impl EditOp {
    /// Decode the legacy wire form where structural operations ride in the
    /// path string. `..._ADD_ROW_` appends (the value slot, when not null,
    /// is the row template); `..._REMOVE_ROW_<i>_` deletes row `i`.
    /// Anything else, including a malformed remove index, is a plain set;
    /// the legacy form never errored.
    pub fn from_path(path: &str, value: Value) -> EditOp {
        if let Some(base) = path.strip_suffix(ADD_ROW_SUFFIX) {
            let template = match value {
                Value::Null => None,
                template => Some(template),
            };
            return EditOp::AppendRow {
                path: base.to_string(),
                template,
            };
        }
        if let Some(rest) = path.strip_suffix('_') {
            if let Some(marker) = rest.rfind(REMOVE_ROW_MARKER) {
                let index_text = &rest[marker + REMOVE_ROW_MARKER.len()..];
                if let Ok(index) = index_text.parse::<usize>() {
                    return EditOp::RemoveRow {
                        path: rest[..marker].to_string(),
                        index,
                    };
                }
            }
        }
        EditOp::Set {
            path: path.to_string(),
            value,
        }
    }

    /// Get operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::AppendRow { .. } => "append_row",
            Self::RemoveRow { .. } => "remove_row",
        }
    }

    /// The path this edit targets.
    pub fn path(&self) -> &str {
        match self {
            Self::Set { path, .. }
            | Self::AppendRow { path, .. }
            | Self::RemoveRow { path, .. } => path,
        }
    }

    /// Apply this edit to a document snapshot, returning the new snapshot.
    pub fn apply(&self, doc: &Value) -> Value {
        match self {
            Self::Set { path, value } => {
                document::set(doc, &Path::parse(path), value.clone())
            }
            Self::AppendRow { path, template } => {
                document::append_row(doc, &Path::parse(path), template.as_ref())
            }
            Self::RemoveRow { path, index } => {
                document::remove_row(doc, &Path::parse(path), *index)
            }
        }
    }
}

/// Decode an edit batch: a JSON array whose entries are either tagged
/// operations (`{"op": "set", ...}`) or legacy `{"path": ..., "value": ...}`
/// pairs. The first malformed entry rejects the whole batch.
pub fn decode_batch(batch: &Value) -> Result<Vec<EditOp>, EditError> {
    let Some(entries) = batch.as_array() else {
        return Err(EditError::NotABatch);
    };
    let mut ops = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        ops.push(decode_entry(entry).map_err(|reason| EditError::InvalidOp { index, reason })?);
    }
    Ok(ops)
}

fn decode_entry(entry: &Value) -> Result<EditOp, String> {
    let Some(fields) = entry.as_object() else {
        return Err("edit must be an object".to_string());
    };
    if fields.contains_key("op") {
        return serde_json::from_value(entry.clone()).map_err(|e| e.to_string());
    }
    match fields.get("path") {
        Some(Value::String(path)) => {
            let value = fields.get("value").cloned().unwrap_or(Value::Null);
            Ok(EditOp::from_path(path, value))
        }
        _ => Err("edit needs an \"op\" tag or a \"path\" string".to_string()),
    }
}
