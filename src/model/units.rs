use serde::{Deserialize, Serialize};

/// Unit in which a window dimension was entered.
///
/// All cost formulas work in feet; inches exist only as an input convenience
/// and are converted once, at the boundary of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Feet,
    Inches,
}

/// Converts a dimension to feet. Identity for feet, `value / 12` for inches.
///
/// No rounding and no sign checks; validation of non-physical inputs happens
/// at the project boundary, not here.
pub fn to_feet(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Feet => value,
        LengthUnit::Inches => value / 12.0,
    }
}
