//! Field classification subsystem for voltform
//!
//! Maps a leaf field's key and current value to the editor widget it needs
//! (unit select, enum select, numeric, date, long text, plain text) and
//! exposes the option vocabularies behind the select widgets.
//!
//! # Design Principles
//! - **Total**: every key classifies; the fallback is plain text, never an
//!   error.
//! - **Key-driven**: inference reads the key's words, not the surrounding
//!   document shape.
//! - **Data over code**: option lists live in tables a profile can
//!   override per field.

mod classify;
mod options;

pub use classify::{classify, key_tokens, select_options, FieldCategory, FieldConfig};
pub use options::{
    enum_options, unit_options, CURRENT_UNITS, DIELECTRIC_UNITS, DISTANCE_UNITS,
    FREQUENCY_UNITS, POWER_UNITS, RESISTANCE_UNITS, RESULT_OPTIONS, TEMPERATURE_UNITS,
    TIME_UNITS, UNIT_DOMAINS, VOLTAGE_UNITS,
};
