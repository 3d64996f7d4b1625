//! Number formatting shared by tick labels and the JSON payload.
//!
//! Integral values are written without a fractional part (`50`, not `50.0`)
//! so labels and payload numbers read the way the user typed them.

use serde::Serializer;

/// Magnitude from which labels switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero labels switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a finite axis value as the shortest round-trip decimal.
///
/// Magnitudes `>= 1e21` or `< 1e-6` use exponent form with an explicit sign
/// (`1e+21`, `1.5e-7`); `-0` is written as `0`.
pub fn format_axis_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        return format_exponent(value);
    }
    format!("{value}")
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Serde adapter writing integral values below `1e21` as plain JSON integers.
///
/// Other values use `serde_json`'s shortest float form.
pub fn serialize_axis_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < EXPONENT_UPPER {
        // Integral f64 below 1e21 fits i128 exactly.
        serializer.serialize_i128(*value as i128)
    } else {
        serializer.serialize_f64(*value)
    }
}
