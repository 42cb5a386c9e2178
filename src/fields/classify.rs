//! Field category inference
//!
//! Report schemas are open: a report family can carry keys this crate has
//! never seen, and the editor still has to pick a widget for every leaf.
//! Classification is therefore a total function over the key text and the
//! current value, with a fixed rule order and a plain-text fallback.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::options::{unit_options, RESULT_OPTIONS};

/// Lowercase-to-uppercase camel boundary ("testDate" -> "test Date").
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Acronym-to-word boundary ("AGVoltage" -> "AG Voltage").
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z0-9])").unwrap());

/// Substrings that mark a key as a numeric measurement.
const NUMERIC_KEYWORDS: &[&str] = &[
    "voltage",
    "current",
    "resistance",
    "temperature",
    "humidity",
    "tcf",
    "reading",
    "measurement",
    "celsius",
    "fahrenheit",
    "power",
    "frequency",
];

/// Short unit words matched as whole tokens. Substring matching would hit
/// unrelated keys ("amp" is inside "sample").
const NUMERIC_TOKENS: &[&str] = &["ohm", "ohms", "amp", "amps", "volt", "volts", "kv", "mv"];

/// Two-letter phase-pair labels used as field names in reading rows.
/// Matched as whole tokens only: "voltage" and "average" contain "ag".
const PHASE_PAIRS: &[&str] = &["ag", "bg", "cg", "ab", "bc", "ca", "an", "bn", "cn"];

/// Which editor widget a leaf field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    UnitSelect,
    EnumSelect,
    Numeric,
    Date,
    LongText,
    PlainText,
}

impl FieldCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::UnitSelect => "unit_select",
            FieldCategory::EnumSelect => "enum_select",
            FieldCategory::Numeric => "numeric",
            FieldCategory::Date => "date",
            FieldCategory::LongText => "long_text",
            FieldCategory::PlainText => "plain_text",
        }
    }
}

/// Explicit per-field override supplied by a report profile. An override
/// short-circuits every inference rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_options: Option<Vec<String>>,
}

/// Infer the widget category for a leaf field. First matching rule wins:
/// explicit config, unit vocabulary, result vocabulary, numeric, date,
/// long text, plain text.
pub fn classify(key: &str, value: &Value, config: Option<&FieldConfig>) -> FieldCategory {
    if let Some(config) = config {
        if config.options.is_some() {
            return FieldCategory::EnumSelect;
        }
        if config.unit_options.is_some() {
            return FieldCategory::UnitSelect;
        }
    }

    if unit_options(key).is_some() {
        return FieldCategory::UnitSelect;
    }

    let lower = key.to_lowercase();
    let numeric_value = is_numeric_value(value);
    if lower.contains("result")
        || lower.contains("inspection")
        || lower.contains("condition")
        || (lower.contains("status") && !numeric_value)
    {
        return FieldCategory::EnumSelect;
    }

    if numeric_value || has_numeric_keyword(&lower) || has_numeric_token(key) {
        return FieldCategory::Numeric;
    }

    if lower.contains("date") || is_timestamp_key(key) {
        return FieldCategory::Date;
    }

    if lower.contains("comment")
        || lower.contains("note")
        || lower.contains("description")
        || lower.contains("remarks")
    {
        return FieldCategory::LongText;
    }

    FieldCategory::PlainText
}

/// Options backing a select-category field, if the category has any.
pub fn select_options(
    key: &str,
    category: FieldCategory,
    config: Option<&FieldConfig>,
) -> Option<Vec<String>> {
    match category {
        FieldCategory::EnumSelect => {
            if let Some(options) = config.and_then(|c| c.options.clone()) {
                return Some(options);
            }
            Some(RESULT_OPTIONS.iter().map(|s| s.to_string()).collect())
        }
        FieldCategory::UnitSelect => {
            if let Some(options) = config.and_then(|c| c.unit_options.clone()) {
                return Some(options);
            }
            unit_options(key).map(|units| units.iter().map(|s| s.to_string()).collect())
        }
        _ => None,
    }
}

/// Split a key into lowercase words across underscore, hyphen and
/// camel-case boundaries.
pub fn key_tokens(key: &str) -> Vec<String> {
    let spaced = ACRONYM_BOUNDARY.replace_all(key, "$1 $2");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    spaced
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

fn is_numeric_value(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => {
            let trimmed = text.trim();
            !trimmed.is_empty()
                && trimmed
                    .parse::<f64>()
                    .map(|parsed| parsed.is_finite())
                    .unwrap_or(false)
        }
        _ => false,
    }
}

fn has_numeric_keyword(lower: &str) -> bool {
    NUMERIC_KEYWORDS.iter().any(|word| lower.contains(word))
}

fn has_numeric_token(key: &str) -> bool {
    key_tokens(key).iter().any(|token| {
        NUMERIC_TOKENS.contains(&token.as_str()) || PHASE_PAIRS.contains(&token.as_str())
    })
}

fn is_timestamp_key(key: &str) -> bool {
    let joined = key_tokens(key).join("_");
    joined == "submitted_at" || joined == "reviewed_at"
}
