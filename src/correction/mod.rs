//! Temperature correction engine for voltform
//!
//! Insulation-resistance readings drift with winding temperature, so field
//! measurements are normalized to a 20°C reference before they are compared
//! against acceptance criteria. This module owns the tabulated correction
//! factors and the arithmetic built on top of them.
//!
//! # Design Principles
//! - **Table-driven**: factors come from a fixed per-degree table, never a
//!   formula evaluated at runtime.
//! - **Text readings**: inputs are form text; censored values (`>`, `<`)
//!   pass through and garbage degrades to `""` rather than erroring.
//! - **Two lookup modes**: nearest-degree with identity fallback, or
//!   endpoint-clamped linear interpolation, selected per report family.

mod engine;
mod tables;

pub use engine::{
    fahrenheit_to_celsius, fahrenheit_to_celsius_exact, is_acceptable, multiply_by_tcf, ratio,
    tcf, TcfMode,
};
pub use tables::{factor_at, TCF_MAX_CELSIUS, TCF_MIN_CELSIUS, TCF_TABLE};
