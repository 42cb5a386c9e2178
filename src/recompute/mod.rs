//! Recompute subsystem for voltform
//!
//! Reapplies every derived formula in a report after an edit: temperature
//! conversion and factor lookup, corrected reading maps with absorption and
//! polarization ratios, corrected sibling arrays for test tables, and the
//! document-level acceptability summary.
//!
//! # Design Principles
//! - **Derive, never patch**: each run recomputes derived values from their
//!   sources, so the output is independent of previous derived state.
//! - **Idempotent**: running the pipeline twice with unchanged inputs
//!   yields an identical document.
//! - **No change detection**: callers decide when to run and whether the
//!   result differs enough to persist.

mod pass;
mod readings;

pub use pass::{apply_corrections, derived_key, is_derived_key};
pub use readings::{current_tcf, refresh, refresh_reading_blocks, refresh_temperature};
