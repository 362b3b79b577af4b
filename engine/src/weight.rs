//! Weight normalization
//!
//! Converts declared weight and box dimensions into actual and volumetric
//! weight in kilograms, and derives the chargeable weight used for billing.
//!
//! # Critical Invariants
//!
//! 1. All weights are f64 kilograms after normalization
//! 2. Volumetric weight uses the industry divisor: 5000 for cm, 5 for inches
//! 3. Chargeable weight is the max of actual, volumetric, and the courier's
//!    minimum slab — it never undercuts any of the three

use crate::models::{BoxDimensions, DimensionUnit, WeightUnit};

/// Convert a declared weight into kilograms
///
/// # Example
/// ```
/// use courier_rate_engine::models::WeightUnit;
/// use courier_rate_engine::weight::normalize_weight;
///
/// assert_eq!(normalize_weight(1200.0, WeightUnit::Gram), 1.2);
/// assert_eq!(normalize_weight(1.2, WeightUnit::Kg), 1.2);
/// ```
pub fn normalize_weight(weight: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => weight,
        WeightUnit::Gram => weight / 1000.0,
    }
}

/// Dimensional weight in kilograms, rounded half-up to 2 decimals
///
/// Divisor is 5000 for centimeter dimensions and 5 for inch dimensions
/// (the difference accounts for unit-cubed scaling).
///
/// # Example
/// ```
/// use courier_rate_engine::models::{BoxDimensions, DimensionUnit};
/// use courier_rate_engine::weight::volumetric_weight;
///
/// let dims = BoxDimensions::new(10.0, 10.0, 10.0, DimensionUnit::Centimeter);
/// assert_eq!(volumetric_weight(&dims), 0.2);
/// ```
pub fn volumetric_weight(dimensions: &BoxDimensions) -> f64 {
    let divisor = match dimensions.unit {
        DimensionUnit::Centimeter => 5000.0,
        DimensionUnit::Inch => 5.0,
    };
    let raw = dimensions.length * dimensions.width * dimensions.height / divisor;
    round_to_hundredths(raw)
}

/// Round to 2 decimal places, half-up on the hundredths digit
///
/// `f64::round` is half-away-from-zero, which is half-up for the
/// non-negative values admitted by validation.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Chargeable weight for a courier: max of actual, volumetric, and the
/// courier's minimum weight slab
///
/// # Example
/// ```
/// use courier_rate_engine::weight::chargeable_weight;
///
/// assert_eq!(chargeable_weight(1.2, 0.2, 0.5), 1.2);
/// assert_eq!(chargeable_weight(0.1, 0.2, 0.5), 0.5);
/// ```
pub fn chargeable_weight(actual: f64, volumetric: f64, min_weight: f64) -> f64 {
    actual.max(volumetric).max(min_weight)
}
