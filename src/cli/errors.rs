//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints the error and exits
//! non-zero. The pure core never produces these; they cover the file,
//! stdin/stdout and configuration edges only.

use std::fmt;
use std::io;

use crate::edit::EditError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration / profile file error
    ConfigError,
    /// I/O error (stdin/stdout/files)
    IoError,
    /// Report file unreadable or not valid JSON
    ReportError,
    /// Edit batch malformed
    EditsError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FORM_CLI_CONFIG_ERROR",
            Self::IoError => "FORM_CLI_IO_ERROR",
            Self::ReportError => "FORM_CLI_REPORT_ERROR",
            Self::EditsError => "FORM_CLI_EDITS_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Report error
    pub fn report_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ReportError, msg)
    }

    /// Edit batch error
    pub fn edits_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::EditsError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<EditError> for CliError {
    fn from(e: EditError) -> Self {
        Self::edits_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
