//! CLI command implementations
//!
//! Every command is a thin pipeline over the pure core: read files, call
//! the library, write JSON. The core never sees a file path, the clock or
//! a UUID; identity and modification stamps are applied here.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::correction::TcfMode;
use crate::edit::decode_batch;
use crate::fields::{classify, select_options, FieldConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::recompute::{current_tcf, refresh};
use crate::sections::build_sections;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_edit_batch, read_report, write_report, write_response};

/// Report profile file structure
///
/// A profile captures the caller's knowledge about a report family: which
/// TCF lookup convention it uses and any per-field widget overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportProfile {
    /// TCF lookup convention (optional, default "exact_or_default")
    #[serde(default)]
    pub tcf_mode: TcfMode,

    /// Per-key field classification overrides (optional)
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

impl ReportProfile {
    /// Load a profile from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read profile: {}", e)))?;

        let profile: ReportProfile = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid profile JSON: {}", e)))?;

        profile.validate()?;

        Ok(profile)
    }

    /// Validate the profile
    fn validate(&self) -> CliResult<()> {
        for (key, config) in &self.fields {
            if config.options.is_some() && config.unit_options.is_some() {
                return Err(CliError::config_error(format!(
                    "Field '{}' sets both options and unit_options; pick one.",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Override for a leaf key, if the profile carries one
    pub fn field_config(&self, key: &str) -> Option<&FieldConfig> {
        self.fields.get(key)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    Logger::set_quiet(cli.quiet);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Apply {
            report,
            edits,
            profile,
            output,
        } => apply(&report, edits.as_deref(), profile.as_deref(), output.as_deref()),
        Command::Recompute {
            report,
            profile,
            output,
        } => recompute(&report, profile.as_deref(), output.as_deref()),
        Command::Sections { report } => sections(&report),
        Command::Fields { report, profile } => fields(&report, profile.as_deref()),
    }
}

/// Apply an edit batch to a report, recompute, stamp and write
///
/// Pipeline: decode batch (reject whole batch on first bad entry), apply
/// each operation to the document snapshot, run the full recompute, then
/// stamp identity and modification time.
pub fn apply(
    report_path: &Path,
    edits_path: Option<&Path>,
    profile_path: Option<&Path>,
    output: Option<&Path>,
) -> CliResult<()> {
    let profile = load_profile(profile_path)?;
    let mut doc = load_report(report_path)?;

    let batch = read_edit_batch(edits_path)?;
    let ops = decode_batch(&batch).map_err(|e| {
        log_event_with_fields(Event::EditRejected, &[("reason", &e.to_string())]);
        CliError::from(e)
    })?;

    for op in &ops {
        doc = op.apply(&doc);
        log_event_with_fields(Event::EditApplied, &[("op", op.name()), ("path", op.path())]);
    }

    let mut doc = run_refresh(&doc, profile.tcf_mode);
    stamp_identity(&mut doc);

    write_report(&doc, output)?;
    log_saved(output);

    Ok(())
}

/// Recompute all derived values and write the result
///
/// No edits, no stamping: recompute alone must not change a report that is
/// already up to date.
pub fn recompute(
    report_path: &Path,
    profile_path: Option<&Path>,
    output: Option<&Path>,
) -> CliResult<()> {
    let profile = load_profile(profile_path)?;
    let doc = load_report(report_path)?;

    let doc = run_refresh(&doc, profile.tcf_mode);

    write_report(&doc, output)?;
    log_saved(output);

    Ok(())
}

/// Print the ordered display sections of a report
pub fn sections(report_path: &Path) -> CliResult<()> {
    let doc = load_report(report_path)?;

    let sections = build_sections(&doc);
    log_event_with_fields(
        Event::SectionsBuilt,
        &[("count", &sections.len().to_string())],
    );

    write_response(serde_json::to_value(&sections)?)
}

/// Print the widget classification of every leaf field
pub fn fields(report_path: &Path, profile_path: Option<&Path>) -> CliResult<()> {
    let profile = load_profile(profile_path)?;
    let doc = load_report(report_path)?;

    let mut entries = Vec::new();
    let mut path = Vec::new();
    classify_tree(&doc, &mut path, &profile, &mut entries);
    log_event_with_fields(
        Event::FieldsClassified,
        &[("count", &entries.len().to_string())],
    );

    write_response(json!(entries))
}

fn load_profile(path: Option<&Path>) -> CliResult<ReportProfile> {
    let Some(path) = path else {
        return Ok(ReportProfile::default());
    };
    let profile = ReportProfile::load(path)?;
    log_event_with_fields(
        Event::ProfileLoaded,
        &[("tcf_mode", profile.tcf_mode.as_str())],
    );
    Ok(profile)
}

fn load_report(path: &Path) -> CliResult<Value> {
    let doc = read_report(path)?;
    log_event_with_fields(Event::ReportLoaded, &[("path", &path.display().to_string())]);
    Ok(doc)
}

fn run_refresh(doc: &Value, mode: TcfMode) -> Value {
    log_event(Event::RecomputeBegin);
    let doc = refresh(doc, mode);
    log_event_with_fields(
        Event::RecomputeComplete,
        &[("tcf", &current_tcf(&doc).to_string())],
    );
    doc
}

fn log_saved(output: Option<&Path>) {
    let destination = output
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    log_event_with_fields(Event::ReportSaved, &[("destination", &destination)]);
}

/// Ensure the report carries an id and a fresh modification stamp.
/// `updatedAt` always moves; an existing `reportId` is kept whatever its
/// type, with null and the empty string counting as missing.
fn stamp_identity(doc: &mut Value) {
    let Some(map) = doc.as_object_mut() else {
        return;
    };
    let has_id = match map.get("reportId") {
        None | Some(Value::Null) => false,
        Some(Value::String(id)) => !id.is_empty(),
        Some(_) => true,
    };
    if !has_id {
        map.insert(
            "reportId".to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
    }
    map.insert(
        "updatedAt".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
}

/// Depth-first leaf walk: every scalar gets a classification entry with
/// its dotted path and, for select categories, its options.
fn classify_tree(
    node: &Value,
    path: &mut Vec<String>,
    profile: &ReportProfile,
    out: &mut Vec<Value>,
) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                path.push(key.clone());
                classify_tree(value, path, profile, out);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                classify_tree(item, path, profile, out);
                path.pop();
            }
        }
        leaf => {
            let key = path.last().map(String::as_str).unwrap_or("");
            let config = profile.field_config(key);
            let category = classify(key, leaf, config);
            let mut entry = json!({
                "path": path.join("."),
                "category": category.as_str(),
            });
            if let Some(options) = select_options(key, category, config) {
                entry["options"] = json!(options);
            }
            out.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content.to_string()).unwrap();
        path
    }

    #[test]
    fn test_profile_defaults() {
        assert_eq!(ReportProfile::default().tcf_mode, TcfMode::ExactOrDefault);
    }

    #[test]
    fn test_profile_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "profile.json",
            &json!({ "tcf_mode": "exact_or_interpolate" }),
        );

        let profile = ReportProfile::load(&path).unwrap();
        assert_eq!(profile.tcf_mode, TcfMode::ExactOrInterpolate);
    }

    #[test]
    fn test_profile_rejects_unknown_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "profile.json", &json!({ "tcf_mode": "sometimes" }));

        let result = ReportProfile::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_profile_rejects_ambiguous_field_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "profile.json",
            &json!({
                "fields": {
                    "rating": { "options": ["A"], "unit_options": ["kV"] }
                }
            }),
        );

        let result = ReportProfile::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_apply_edits_recomputes_and_stamps() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(
            &temp_dir,
            "report.json",
            &json!({
                "temperature": { "fahrenheit": 68, "celsius": 0, "tcf": 0 },
                "tests": [ { "reading": "10" } ]
            }),
        );
        let edits = write_file(
            &temp_dir,
            "edits.json",
            &json!([
                { "op": "set", "path": "temperature.fahrenheit", "value": 86 },
                { "op": "append_row", "path": "tests" }
            ]),
        );
        let output = temp_dir.path().join("out.json");

        apply(&report, Some(&edits), None, Some(&output)).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(out["temperature"]["celsius"], 30);
        assert_eq!(out["temperature"]["tcf"], 2.0);
        assert_eq!(out["tests"].as_array().map(Vec::len), Some(2));
        assert_eq!(out["correctedTests"][0]["reading"], "20.00");

        let report_id = out["reportId"].as_str().unwrap();
        assert!(Uuid::parse_str(report_id).is_ok());
        let updated_at = out["updatedAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(updated_at).is_ok());
    }

    #[test]
    fn test_apply_keeps_existing_report_id() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(
            &temp_dir,
            "report.json",
            &json!({ "reportId": "existing-id", "customer": "Acme" }),
        );
        let edits = write_file(&temp_dir, "edits.json", &json!([]));
        let output = temp_dir.path().join("out.json");

        apply(&report, Some(&edits), None, Some(&output)).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(out["reportId"], "existing-id");
    }

    #[test]
    fn test_apply_keeps_numeric_report_id() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(
            &temp_dir,
            "report.json",
            &json!({ "reportId": 4207, "customer": "Acme" }),
        );
        let edits = write_file(&temp_dir, "edits.json", &json!([]));
        let output = temp_dir.path().join("out.json");

        apply(&report, Some(&edits), None, Some(&output)).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        // Ids minted elsewhere are not ours to replace.
        assert_eq!(out["reportId"], 4207);
    }

    #[test]
    fn test_apply_replaces_null_and_empty_report_ids() {
        let temp_dir = TempDir::new().unwrap();
        let edits = write_file(&temp_dir, "edits.json", &json!([]));
        for blank in [json!(null), json!("")] {
            let report = write_file(&temp_dir, "report.json", &json!({ "reportId": blank }));
            let output = temp_dir.path().join("out.json");

            apply(&report, Some(&edits), None, Some(&output)).unwrap();

            let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
            assert!(Uuid::parse_str(out["reportId"].as_str().unwrap()).is_ok());
        }
    }

    #[test]
    fn test_apply_rejects_malformed_batch() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(&temp_dir, "report.json", &json!({}));
        let edits = write_file(&temp_dir, "edits.json", &json!({ "op": "set" }));
        let output = temp_dir.path().join("out.json");

        let result = apply(&report, Some(&edits), None, Some(&output));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::EditsError);
        // Nothing written on rejection.
        assert!(!output.exists());
    }

    #[test]
    fn test_recompute_does_not_stamp() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(
            &temp_dir,
            "report.json",
            &json!({
                "temperature": { "celsius": 30, "tcf": 1.0 },
                "tests": [ { "reading": "10" } ]
            }),
        );
        let output = temp_dir.path().join("out.json");

        recompute(&report, None, Some(&output)).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(out["temperature"]["tcf"], 2.0);
        assert_eq!(out["correctedTests"][0]["reading"], "20.00");
        assert!(out.get("reportId").is_none());
        assert!(out.get("updatedAt").is_none());
    }

    #[test]
    fn test_recompute_respects_profile_mode() {
        let temp_dir = TempDir::new().unwrap();
        let report = write_file(
            &temp_dir,
            "report.json",
            &json!({ "temperature": { "celsius": 30.5, "tcf": 0 } }),
        );
        let profile = write_file(
            &temp_dir,
            "profile.json",
            &json!({ "tcf_mode": "exact_or_interpolate" }),
        );
        let output = temp_dir.path().join("out.json");

        recompute(&report, Some(&profile), Some(&output)).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        // Interpolated halfway between 2.000 and 2.144.
        assert_eq!(out["temperature"]["tcf"], 2.07);
    }

    #[test]
    fn test_classify_tree_lists_leaves() {
        let profile = ReportProfile::default();
        let doc = json!({
            "customer": "Acme",
            "tests": [ { "reading": "5", "comments": "" } ]
        });

        let mut entries = Vec::new();
        let mut path = Vec::new();
        classify_tree(&doc, &mut path, &profile, &mut entries);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["path"], "customer");
        assert_eq!(entries[0]["category"], "plain_text");
        assert_eq!(entries[1]["path"], "tests.0.reading");
        assert_eq!(entries[1]["category"], "numeric");
        assert_eq!(entries[2]["path"], "tests.0.comments");
        assert_eq!(entries[2]["category"], "long_text");
    }

    #[test]
    fn test_classify_tree_applies_profile_override() {
        let mut profile = ReportProfile::default();
        profile.fields.insert(
            "rating".to_string(),
            FieldConfig {
                options: Some(vec!["A".to_string(), "B".to_string()]),
                unit_options: None,
            },
        );
        let doc = json!({ "rating": "A" });

        let mut entries = Vec::new();
        let mut path = Vec::new();
        classify_tree(&doc, &mut path, &profile, &mut entries);

        assert_eq!(entries[0]["category"], "enum_select");
        assert_eq!(entries[0]["options"], json!(["A", "B"]));
    }
}
