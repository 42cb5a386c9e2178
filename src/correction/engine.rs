//! Correction arithmetic
//!
//! Reading math is text-in/text-out: report fields are form inputs, and
//! unparsable or censored text degrades to a documented default instead of
//! an error. No function here fails.

use serde::{Deserialize, Serialize};

use super::tables::{factor_at, TCF_MAX_CELSIUS, TCF_MIN_CELSIUS, TCF_TABLE};

/// Which TCF lookup convention a report family uses.
///
/// Most report types round to the nearest tabulated degree and fall back to
/// the identity factor when the temperature is off-table; a few interpolate
/// between table rows instead. Both conventions are preserved; which one
/// applies is a property of the report type, not of this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TcfMode {
    #[default]
    ExactOrDefault,
    ExactOrInterpolate,
}

impl TcfMode {
    /// Returns the string representation, matching the profile file form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TcfMode::ExactOrDefault => "exact_or_default",
            TcfMode::ExactOrInterpolate => "exact_or_interpolate",
        }
    }
}

/// Fahrenheit to the integer Celsius convention used for table lookups.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> i64 {
    ((fahrenheit - 32.0) * 5.0 / 9.0).round() as i64
}

/// Fahrenheit to fractional Celsius, for report variants that display the
/// unrounded value.
pub fn fahrenheit_to_celsius_exact(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Look up the temperature correction factor for `celsius` under the given
/// mode.
pub fn tcf(celsius: f64, mode: TcfMode) -> f64 {
    match mode {
        TcfMode::ExactOrDefault => factor_at(celsius.round() as i64).unwrap_or(1.0),
        TcfMode::ExactOrInterpolate => interpolated(celsius),
    }
}

/// Exact table hit, else linear interpolation between the bracketing rows,
/// rounded to 2 decimals. Temperatures beyond the table clamp to the
/// nearest endpoint.
fn interpolated(celsius: f64) -> f64 {
    let (min_f, max_f) = (TCF_TABLE[0].1, TCF_TABLE[TCF_TABLE.len() - 1].1);
    if celsius.is_nan() {
        return 1.0;
    }
    if celsius <= TCF_MIN_CELSIUS as f64 {
        return min_f;
    }
    if celsius >= TCF_MAX_CELSIUS as f64 {
        return max_f;
    }

    if celsius.fract() == 0.0 {
        if let Some(factor) = factor_at(celsius as i64) {
            return factor;
        }
    }

    let lower = celsius.floor() as i64;
    match (factor_at(lower), factor_at(lower + 1)) {
        (Some(lo), Some(hi)) => {
            let t = celsius - lower as f64;
            round2(lo + t * (hi - lo))
        }
        _ => 1.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Multiply a reading by the correction factor, formatted as 2-decimal
/// text.
///
/// Censored readings (leading `>` or `<`) pass through untouched; an
/// out-of-range megohmmeter reading must never be numerically corrected.
/// Text that does not parse as a finite number collapses to `""`.
pub fn multiply_by_tcf(reading: &str, tcf: f64) -> String {
    let trimmed = reading.trim();
    if trimmed.starts_with('>') || trimmed.starts_with('<') {
        return reading.to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}", value * tcf),
        _ => String::new(),
    }
}

/// Ratio of two readings as 2-decimal text. Unparsable input or a zero
/// denominator yields `""`.
pub fn ratio(numerator: &str, denominator: &str) -> String {
    let num = numerator.trim().parse::<f64>();
    let den = denominator.trim().parse::<f64>();
    match (num, den) {
        (Ok(n), Ok(d)) if n.is_finite() && d.is_finite() && d != 0.0 => {
            format!("{:.2}", n / d)
        }
        _ => String::new(),
    }
}

/// Summary verdict over a set of DA/PI ratios: `"Yes"` only when every
/// ratio parses to a finite number above 1.
pub fn is_acceptable<S: AsRef<str>>(ratios: &[S]) -> &'static str {
    let all_above_one = ratios.iter().all(|ratio| {
        ratio
            .as_ref()
            .trim()
            .parse::<f64>()
            .map(|value| value.is_finite() && value > 1.0)
            .unwrap_or(false)
    });
    if all_above_one {
        "Yes"
    } else {
        "No"
    }
}
