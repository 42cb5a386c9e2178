//! JSON I/O handling for CLI
//!
//! - Reports and edit batches come from files or stdin
//! - Command output goes to stdout (or a file for rewritten reports)
//! - UTF-8 only; logs never share stdout with data

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read and parse a report document from a file
pub fn read_report(path: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::report_error(format!("Failed to read report {:?}: {}", path, e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::report_error(format!("Invalid report JSON: {}", e)))
}

/// Read an edit batch from a file, or from stdin when no path is given.
/// The batch may span multiple lines; it is parsed as one JSON value.
pub fn read_edit_batch(path: Option<&Path>) -> CliResult<Value> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read edits {:?}: {}", path, e)))?,
        None => io::read_to_string(io::stdin().lock())?,
    };
    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty edit batch input"));
    }
    serde_json::from_str(&content).map_err(CliError::from)
}

/// Write a report document, pretty-printed, to a file or stdout
pub fn write_report(doc: &Value, output: Option<&Path>) -> CliResult<()> {
    let text = serde_json::to_string_pretty(doc)?;
    match output {
        Some(path) => {
            fs::write(path, text + "\n")?;
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Write a success response envelope to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
