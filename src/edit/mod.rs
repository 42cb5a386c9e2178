//! Edit command subsystem for voltform
//!
//! The wire model for report edits: a tagged operation enum covering scalar
//! writes and structural row changes, batch decoding for both the tagged
//! form and the legacy sentinel-path form, and dispatch onto the document
//! mutator.

mod errors;
mod operation;

pub use errors::{EditError, EditResult};
pub use operation::{decode_batch, EditOp};
