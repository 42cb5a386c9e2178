//! CLI module for voltform
//!
//! Provides command-line interface for:
//! - apply: Apply an edit batch to a report, recompute and stamp
//! - recompute: Refresh every derived value in a report
//! - sections: Print the ordered display sections of a report
//! - fields: Print the widget classification of every leaf field

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, apply, recompute, sections, fields, ReportProfile};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_report, read_edit_batch, write_report, write_response};
