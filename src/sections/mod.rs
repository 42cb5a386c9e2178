//! Section classification subsystem for voltform
//!
//! Groups a report document's top-level entries into the ordered sections
//! the editor displays. Grouping is pure and order-preserving: job
//! information leads, tables and nested objects follow in document order,
//! and loose scalars collect into a trailing catch-all section.

mod classifier;
mod titles;

pub use classifier::{build_sections, Section, SectionKind, JOB_INFO_KEYS};
pub use titles::{format_key, title_for, TITLE_RULES};
