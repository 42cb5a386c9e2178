//! Document mutator subsystem for voltform
//!
//! Report documents are plain `serde_json::Value` trees: scalars, ordered
//! lists, and insertion-ordered mappings. This module owns the only code
//! that edits them, path-addressed reads and writes plus row append/remove
//! for table sections.
//!
//! # Design Principles
//!
//! - Pure functions: snapshot in, snapshot out
//! - Reads never create; writes create intermediates as needed
//! - No error path: degenerate inputs resolve to documented defaults

mod mutator;
mod path;

pub use mutator::{append_row, blank_like, get, remove_row, set};
pub use path::{is_index_segment, parse_index, Path};
