//! Display-section grouping
//!
//! Turns a report document's top level into the ordered section list the
//! editor renders: job info first, one section per table or nested object
//! in document order, loose scalars gathered into a trailing catch-all.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::titles::{format_key, title_for};

/// Keys that belong to the leading "Job Information" section regardless of
/// where they appear in the document.
pub const JOB_INFO_KEYS: &[&str] = &[
    "customer",
    "customerName",
    "address",
    "date",
    "jobNumber",
    "technicians",
    "user",
    "userName",
];

/// How a section's content is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Flat label/input rows.
    Fields,
    /// Rows of a list, one column per element field.
    Table,
    /// A nested object the renderer descends into.
    Nested,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Fields => "fields",
            SectionKind::Table => "table",
            SectionKind::Nested => "nested",
        }
    }
}

/// One display group: a derived view over a slice of the document.
///
/// `base_path` is `""` for sections whose keys live at the document root,
/// else the top-level key the section covers. `keys` lists the covered
/// top-level keys; `data` is the covered slice itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub base_path: String,
    pub keys: Vec<String>,
    pub data: Value,
}

impl Section {
    fn over_key(title: impl Into<String>, kind: SectionKind, key: &str, data: &Value) -> Self {
        Section {
            title: title.into(),
            kind,
            base_path: key.to_string(),
            keys: vec![key.to_string()],
            data: data.clone(),
        }
    }

    fn over_root(title: impl Into<String>, keys: Vec<String>, data: Map<String, Value>) -> Self {
        Section {
            title: title.into(),
            kind: SectionKind::Fields,
            base_path: String::new(),
            keys,
            data: Value::Object(data),
        }
    }
}

/// Group a document's top level into ordered display sections.
///
/// Total over any value: a non-object document yields an empty list. Loose
/// scalars (and degenerate containers such as empty lists or lists of
/// scalars) merge into one trailing "Additional Information" section.
pub fn build_sections(doc: &Value) -> Vec<Section> {
    let Some(map) = doc.as_object() else {
        return Vec::new();
    };

    let mut sections = Vec::new();

    let mut job_keys = Vec::new();
    let mut job_data = Map::new();
    for key in JOB_INFO_KEYS {
        if let Some(value) = map.get(*key) {
            job_keys.push(key.to_string());
            job_data.insert(key.to_string(), value.clone());
        }
    }
    if !job_keys.is_empty() {
        sections.push(Section::over_root("Job Information", job_keys, job_data));
    }

    let mut extra_keys = Vec::new();
    let mut extra_data = Map::new();
    for (key, value) in map {
        if JOB_INFO_KEYS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                let title = title_for(key).map(String::from).unwrap_or_else(|| format_key(key));
                sections.push(Section::over_key(title, SectionKind::Table, key, value));
            }
            Value::Object(fields) => {
                let lower = key.to_lowercase();
                if lower.contains("temperature") && fields.contains_key("tcf") {
                    sections.push(Section::over_key(
                        "Environmental Conditions",
                        SectionKind::Fields,
                        key,
                        value,
                    ));
                } else if lower.contains("nameplate") {
                    sections.push(Section::over_key(
                        "Nameplate Data",
                        SectionKind::Fields,
                        key,
                        value,
                    ));
                } else {
                    let title =
                        title_for(key).map(String::from).unwrap_or_else(|| format_key(key));
                    sections.push(Section::over_key(title, SectionKind::Nested, key, value));
                }
            }
            _ => {
                extra_keys.push(key.clone());
                extra_data.insert(key.clone(), value.clone());
            }
        }
    }
    if !extra_keys.is_empty() {
        sections.push(Section::over_root(
            "Additional Information",
            extra_keys,
            extra_data,
        ));
    }

    sections
}
