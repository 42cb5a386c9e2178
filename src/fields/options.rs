//! Select-widget vocabularies
//!
//! Fixed option lists for unit-select and enum-select fields. These are
//! data, not behavior: the classifier only decides which table applies.

/// Megohmmeter ranges span three decades, so resistance fields carry an
/// explicit unit.
pub const RESISTANCE_UNITS: &[&str] = &["kΩ", "MΩ", "GΩ"];

pub const VOLTAGE_UNITS: &[&str] = &["mV", "V", "kV"];

pub const CURRENT_UNITS: &[&str] = &["µA", "mA", "A"];

pub const POWER_UNITS: &[&str] = &["W", "kW", "MW"];

pub const FREQUENCY_UNITS: &[&str] = &["Hz", "kHz"];

pub const TEMPERATURE_UNITS: &[&str] = &["°C", "°F"];

/// Dielectric-withstand leakage is read in micro/milliamps.
pub const DIELECTRIC_UNITS: &[&str] = &["µA", "mA"];

pub const TIME_UNITS: &[&str] = &["s", "min", "hr"];

pub const DISTANCE_UNITS: &[&str] = &["in", "ft", "m"];

/// Priority-ordered (domain word, options) table for unit-bearing keys.
/// The first domain word found in the key decides the option list.
pub const UNIT_DOMAINS: &[(&str, &[&str])] = &[
    ("resistance", RESISTANCE_UNITS),
    ("voltage", VOLTAGE_UNITS),
    ("current", CURRENT_UNITS),
    ("power", POWER_UNITS),
    ("frequency", FREQUENCY_UNITS),
    ("temperature", TEMPERATURE_UNITS),
    ("dielectric", DIELECTRIC_UNITS),
    ("time", TIME_UNITS),
    ("distance", DISTANCE_UNITS),
];

/// Inspection-result vocabulary shared by every enum-select field that has
/// no explicit override.
pub const RESULT_OPTIONS: &[&str] = &[
    "Select One",
    "Satisfactory",
    "Unsatisfactory",
    "Cleaned",
    "See Comments",
    "Not Applicable",
];

/// Resolve the unit options a key calls for, if the key is unit-bearing.
///
/// A key is unit-bearing when it combines a domain word with the word
/// "unit", or when it names an insulation or contact resistance measurement
/// (those fields always carry a resistance unit in the field).
pub fn unit_options(key: &str) -> Option<&'static [&'static str]> {
    let lower = key.to_lowercase();
    if lower.contains("unit") {
        for &(domain, options) in UNIT_DOMAINS {
            if lower.contains(domain) {
                return Some(options);
            }
        }
    }
    if (lower.contains("insulation") || lower.contains("contact")) && lower.contains("resistance") {
        return Some(RESISTANCE_UNITS);
    }
    None
}

/// The default enum-select vocabulary.
pub fn enum_options() -> &'static [&'static str] {
    RESULT_OPTIONS
}
