//! Temperature and reading-block refresh
//!
//! The derived half of a report document: celsius and tcf inside
//! temperature blocks, corrected reading maps with their absorption and
//! polarization ratios, and the document-level acceptability summary.
//! Everything here is recomputed from scratch on each call so stale derived
//! values can never survive an input edit.

use serde_json::{json, Map, Value};

use crate::correction::{
    fahrenheit_to_celsius, is_acceptable, multiply_by_tcf, ratio, tcf, TcfMode,
};
use crate::recompute::pass::apply_corrections;

/// Recompute `celsius` and `tcf` inside every temperature block.
///
/// Blocks with a `fahrenheit` field follow the Fahrenheit-input convention:
/// celsius is derived by integer rounding, then tcf from celsius. Blocks
/// with only `celsius` keep it and refresh tcf alone.
pub fn refresh_temperature(doc: &Value, mode: TcfMode) -> Value {
    let Some(map) = doc.as_object() else {
        return doc.clone();
    };
    let mut out = map.clone();
    for (key, value) in map {
        let Some(block) = value.as_object() else {
            continue;
        };
        if !is_temperature_block(key, block) {
            continue;
        }
        let mut updated = block.clone();
        let celsius = match number_field(block, "fahrenheit") {
            Some(fahrenheit) => {
                let celsius = fahrenheit_to_celsius(fahrenheit);
                updated.insert("celsius".to_string(), json!(celsius));
                celsius as f64
            }
            None => match number_field(block, "celsius") {
                Some(celsius) => celsius,
                None => continue,
            },
        };
        updated.insert("tcf".to_string(), json!(tcf(celsius, mode)));
        out.insert(key.clone(), Value::Object(updated));
    }
    Value::Object(out)
}

/// The correction factor currently in force: the `tcf` of the first
/// temperature block, else the identity.
pub fn current_tcf(doc: &Value) -> f64 {
    let Some(map) = doc.as_object() else {
        return 1.0;
    };
    for (key, value) in map {
        if let Some(block) = value.as_object() {
            if is_temperature_block(key, block) {
                if let Some(factor) = number_field(block, "tcf") {
                    return factor;
                }
            }
        }
    }
    1.0
}

/// Recompute `corrected`, `dielectricAbsorption` and `polarizationIndex`
/// for every object in the tree that carries a `readings` map.
pub fn refresh_reading_blocks(doc: &Value, tcf: f64) -> Value {
    let mut out = doc.clone();
    refresh_blocks_in_place(&mut out, tcf);
    out
}

/// Full recompute pipeline: temperature blocks, then reading blocks and
/// corrected arrays under the refreshed factor, then the acceptability
/// summary. Idempotent for fixed inputs.
pub fn refresh(doc: &Value, mode: TcfMode) -> Value {
    let doc = refresh_temperature(doc, mode);
    let factor = current_tcf(&doc);
    let doc = refresh_reading_blocks(&doc, factor);
    let mut doc = apply_corrections(&doc, factor);
    write_acceptability(&mut doc);
    doc
}

fn is_temperature_block(key: &str, block: &Map<String, Value>) -> bool {
    key.to_lowercase().contains("temperature") && block.contains_key("tcf")
}

/// Numeric field access tolerant of form text: numbers and numeric strings
/// both count.
fn number_field(block: &Map<String, Value>, key: &str) -> Option<f64> {
    match block.get(key)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
        }
        _ => None,
    }
}

fn refresh_blocks_in_place(node: &mut Value, tcf: f64) {
    match node {
        Value::Object(map) => {
            if map.get("readings").is_some_and(Value::is_object) {
                refresh_one_block(map, tcf);
            }
            for (_, child) in map.iter_mut() {
                refresh_blocks_in_place(child, tcf);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                refresh_blocks_in_place(item, tcf);
            }
        }
        _ => {}
    }
}

fn refresh_one_block(block: &mut Map<String, Value>, tcf: f64) {
    let Some(Value::Object(readings)) = block.get("readings") else {
        return;
    };
    let corrected = corrected_map(readings, tcf);
    let absorption = pair_ratio(&corrected, "oneMinute", "halfMinute");
    let polarization = pair_ratio(&corrected, "tenMinute", "oneMinute");
    block.insert("corrected".to_string(), Value::Object(corrected));
    set_ratio(block, "dielectricAbsorption", absorption);
    set_ratio(block, "polarizationIndex", polarization);
}

/// Write the ratio when its inputs exist, otherwise drop any stale copy a
/// previous refresh left behind.
fn set_ratio(block: &mut Map<String, Value>, key: &str, ratio: Option<String>) {
    match ratio {
        Some(value) => {
            block.insert(key.to_string(), Value::String(value));
        }
        None => {
            block.remove(key);
        }
    }
}

/// Same shape as the readings map, every leaf multiplied by the factor.
fn corrected_map(readings: &Map<String, Value>, tcf: f64) -> Map<String, Value> {
    let mut out = Map::with_capacity(readings.len());
    for (key, value) in readings {
        let corrected = match value {
            Value::Object(nested) => Value::Object(corrected_map(nested, tcf)),
            Value::String(text) => Value::String(multiply_by_tcf(text, tcf)),
            Value::Number(number) => Value::String(multiply_by_tcf(&number.to_string(), tcf)),
            other => other.clone(),
        };
        out.insert(key.clone(), corrected);
    }
    out
}

fn pair_ratio(
    corrected: &Map<String, Value>,
    numerator: &str,
    denominator: &str,
) -> Option<String> {
    let numerator = corrected.get(numerator)?;
    let denominator = corrected.get(denominator)?;
    Some(ratio(&text_of(numerator), &text_of(denominator)))
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

/// Document-level verdicts over every reading block's ratios. Only written
/// when at least one block produced the ratio in question.
fn write_acceptability(doc: &mut Value) {
    let mut absorption = Vec::new();
    let mut polarization = Vec::new();
    collect_block_field(doc, "dielectricAbsorption", &mut absorption);
    collect_block_field(doc, "polarizationIndex", &mut polarization);
    let Some(map) = doc.as_object_mut() else {
        return;
    };
    if !absorption.is_empty() {
        map.insert(
            "dielectricAbsorptionAcceptable".to_string(),
            Value::String(is_acceptable(&absorption).to_string()),
        );
    }
    if !polarization.is_empty() {
        map.insert(
            "polarizationIndexAcceptable".to_string(),
            Value::String(is_acceptable(&polarization).to_string()),
        );
    }
}

fn collect_block_field(node: &Value, field: &str, found: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            if map.get("readings").is_some_and(Value::is_object) {
                if let Some(Value::String(text)) = map.get(field) {
                    found.push(text.clone());
                }
            }
            for value in map.values() {
                collect_block_field(value, field, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_block_field(item, field, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_temperature_from_fahrenheit() {
        let doc = json!({
            "temperature": { "fahrenheit": 104, "celsius": 0, "tcf": 0 }
        });
        let out = refresh_temperature(&doc, TcfMode::ExactOrDefault);
        assert_eq!(out["temperature"]["celsius"], 40);
        assert_eq!(out["temperature"]["tcf"], 4.0);
    }

    #[test]
    fn test_refresh_temperature_accepts_text_input() {
        let doc = json!({
            "temperature": { "fahrenheit": "68", "tcf": 0 }
        });
        let out = refresh_temperature(&doc, TcfMode::ExactOrDefault);
        assert_eq!(out["temperature"]["celsius"], 20);
        assert_eq!(out["temperature"]["tcf"], 1.0);
    }

    #[test]
    fn test_refresh_temperature_celsius_only_variant() {
        let doc = json!({
            "temperature": { "celsius": 30, "tcf": 1.0 }
        });
        let out = refresh_temperature(&doc, TcfMode::ExactOrDefault);
        assert_eq!(out["temperature"]["celsius"], 30);
        assert_eq!(out["temperature"]["tcf"], 2.0);
    }

    #[test]
    fn test_refresh_temperature_ignores_other_blocks() {
        let doc = json!({
            "nameplate": { "fahrenheit": 104 },
            "temperatureNotes": "hot day"
        });
        let out = refresh_temperature(&doc, TcfMode::ExactOrDefault);
        assert_eq!(out, doc);
    }

    #[test]
    fn test_current_tcf_reads_first_block() {
        let doc = json!({ "temperature": { "tcf": 1.56 } });
        assert_eq!(current_tcf(&doc), 1.56);
        assert_eq!(current_tcf(&json!({})), 1.0);
        assert_eq!(current_tcf(&json!({ "temperature": { "celsius": 20 } })), 1.0);
    }

    #[test]
    fn test_reading_block_refresh() {
        let doc = json!({
            "phaseA": {
                "testVoltage": "1000",
                "readings": { "halfMinute": "100", "oneMinute": "150", "tenMinute": "300" }
            }
        });
        let out = refresh_reading_blocks(&doc, 2.0);
        let block = &out["phaseA"];
        assert_eq!(block["corrected"]["halfMinute"], "200.00");
        assert_eq!(block["corrected"]["oneMinute"], "300.00");
        assert_eq!(block["corrected"]["tenMinute"], "600.00");
        assert_eq!(block["dielectricAbsorption"], "1.50");
        assert_eq!(block["polarizationIndex"], "2.00");
        // Source readings untouched.
        assert_eq!(block["readings"], doc["phaseA"]["readings"]);
    }

    #[test]
    fn test_reading_block_partial_keys() {
        let doc = json!({
            "phaseA": { "readings": { "halfMinute": "100", "oneMinute": "150" } }
        });
        let out = refresh_reading_blocks(&doc, 1.0);
        assert_eq!(out["phaseA"]["dielectricAbsorption"], "1.50");
        assert!(out["phaseA"].get("polarizationIndex").is_none());
    }

    #[test]
    fn test_stale_ratios_dropped_when_inputs_removed() {
        // An earlier refresh stamped both ratios; the minute readings they
        // were derived from have since been deleted.
        let doc = json!({
            "phaseA": {
                "readings": { "fiveSecond": "40" },
                "corrected": { "halfMinute": "100", "oneMinute": "150" },
                "dielectricAbsorption": "1.50",
                "polarizationIndex": "2.00"
            }
        });
        let out = refresh_reading_blocks(&doc, 1.0);
        assert_eq!(out["phaseA"]["corrected"], json!({ "fiveSecond": "40.00" }));
        assert!(out["phaseA"].get("dielectricAbsorption").is_none());
        assert!(out["phaseA"].get("polarizationIndex").is_none());
    }

    #[test]
    fn test_stale_ratio_dropped_per_pair() {
        // Only the ten-minute reading is gone, so the absorption ratio is
        // recomputed while the polarization index is dropped.
        let doc = json!({
            "phaseA": {
                "readings": { "halfMinute": "100", "oneMinute": "150" },
                "polarizationIndex": "2.00"
            }
        });
        let out = refresh_reading_blocks(&doc, 1.0);
        assert_eq!(out["phaseA"]["dielectricAbsorption"], "1.50");
        assert!(out["phaseA"].get("polarizationIndex").is_none());
    }

    #[test]
    fn test_reading_blocks_found_recursively() {
        let doc = json!({
            "motor": {
                "windings": { "readings": { "oneMinute": "50" } }
            }
        });
        let out = refresh_reading_blocks(&doc, 2.0);
        assert_eq!(out["motor"]["windings"]["corrected"]["oneMinute"], "100.00");
    }

    #[test]
    fn test_refresh_pipeline_end_to_end() {
        let doc = json!({
            "temperature": { "fahrenheit": 86, "celsius": 0, "tcf": 0 },
            "phaseA": {
                "readings": { "halfMinute": "100", "oneMinute": "150", "tenMinute": "300" }
            },
            "tests": [ { "reading": "10" } ]
        });
        let out = refresh(&doc, TcfMode::ExactOrDefault);
        // 86F -> 30C -> factor 2.0 feeds everything downstream.
        assert_eq!(out["temperature"]["tcf"], 2.0);
        assert_eq!(out["phaseA"]["corrected"]["oneMinute"], "300.00");
        assert_eq!(out["correctedTests"][0]["reading"], "20.00");
        assert_eq!(out["dielectricAbsorptionAcceptable"], "Yes");
        assert_eq!(out["polarizationIndexAcceptable"], "Yes");
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let doc = json!({
            "temperature": { "fahrenheit": 77, "celsius": 0, "tcf": 0 },
            "phaseA": {
                "readings": { "halfMinute": "80", "oneMinute": "100", "tenMinute": "90" }
            },
            "insulationResistanceTests": [ { "values": { "ag": "120" } } ]
        });
        let once = refresh(&doc, TcfMode::ExactOrDefault);
        let twice = refresh(&once, TcfMode::ExactOrDefault);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_acceptability_flags_failures() {
        let doc = json!({
            "temperature": { "celsius": 20, "tcf": 1.0 },
            "phaseA": {
                "readings": { "halfMinute": "100", "oneMinute": "90" }
            }
        });
        let out = refresh(&doc, TcfMode::ExactOrDefault);
        // 90 / 100 = 0.90, not acceptable.
        assert_eq!(out["dielectricAbsorptionAcceptable"], "No");
        assert!(out.get("polarizationIndexAcceptable").is_none());
    }

    #[test]
    fn test_no_reading_blocks_no_summary() {
        let doc = json!({ "customer": "Acme" });
        let out = refresh(&doc, TcfMode::ExactOrDefault);
        assert!(out.get("dielectricAbsorptionAcceptable").is_none());
        assert!(out.get("polarizationIndexAcceptable").is_none());
    }
}
