//! voltform - A deterministic editing core for electrical test reports
//!
//! Reports are plain JSON documents. Every mutation goes through the edit
//! model, every derived value is recomputed from scratch, and the result
//! round-trips byte-for-byte through serde_json's preserved key order.

pub mod cli;
pub mod correction;
pub mod document;
pub mod edit;
pub mod fields;
pub mod observability;
pub mod recompute;
pub mod sections;
