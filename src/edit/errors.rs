//! # Edit Errors

use thiserror::Error;

/// Result type for edit-batch decoding
pub type EditResult<T> = Result<T, EditError>;

/// Edit-batch decode errors. Applying a decoded edit never fails; only
/// malformed batch input is rejected, and the whole batch is rejected at
/// the first bad entry.
#[derive(Debug, Clone, Error)]
pub enum EditError {
    #[error("Edit batch must be a JSON array")]
    NotABatch,

    #[error("Invalid edit at index {index}: {reason}")]
    InvalidOp { index: usize, reason: String },
}
