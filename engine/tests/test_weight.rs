//! Weight Normalizer Tests
//!
//! Unit conversion, volumetric weight, rounding, and chargeable-weight
//! derivation.

use courier_rate_engine::models::{BoxDimensions, DimensionUnit, WeightUnit};
use courier_rate_engine::weight::{
    chargeable_weight, normalize_weight, round_to_hundredths, volumetric_weight,
};

// ============================================================================
// Weight normalization
// ============================================================================

#[test]
fn test_grams_divide_by_thousand() {
    assert_eq!(normalize_weight(1200.0, WeightUnit::Gram), 1.2);
    assert_eq!(normalize_weight(500.0, WeightUnit::Gram), 0.5);
}

#[test]
fn test_kilograms_pass_through() {
    assert_eq!(normalize_weight(1.2, WeightUnit::Kg), 1.2);
    assert_eq!(normalize_weight(0.001, WeightUnit::Kg), 0.001);
}

// ============================================================================
// Volumetric weight
// ============================================================================

#[test]
fn test_volumetric_cm_divisor_5000() {
    // 10 x 10 x 10 cm = 1000 / 5000 = 0.2 kg
    let dims = BoxDimensions::new(10.0, 10.0, 10.0, DimensionUnit::Centimeter);
    assert_eq!(volumetric_weight(&dims), 0.2);
}

#[test]
fn test_volumetric_inch_divisor_5() {
    // 2 x 3 x 5 in = 30 / 5 = 6.0 kg
    let dims = BoxDimensions::new(2.0, 3.0, 5.0, DimensionUnit::Inch);
    assert_eq!(volumetric_weight(&dims), 6.0);
}

#[test]
fn test_volumetric_rounds_to_two_decimals() {
    // 11 x 11 x 11 = 1331 / 5000 = 0.2662 -> 0.27
    let dims = BoxDimensions::new(11.0, 11.0, 11.0, DimensionUnit::Centimeter);
    assert_eq!(volumetric_weight(&dims), 0.27);
}

#[test]
fn test_rounding_half_up() {
    assert_eq!(round_to_hundredths(0.125), 0.13);
    assert_eq!(round_to_hundredths(0.135), 0.14);
    assert_eq!(round_to_hundredths(0.1349), 0.13);
}

// ============================================================================
// Chargeable weight
// ============================================================================

#[test]
fn test_chargeable_is_max_of_three() {
    // Actual dominates
    assert_eq!(chargeable_weight(2.0, 0.5, 0.5), 2.0);
    // Volumetric dominates
    assert_eq!(chargeable_weight(0.3, 1.5, 0.5), 1.5);
    // Minimum slab dominates
    assert_eq!(chargeable_weight(0.1, 0.2, 0.5), 0.5);
}

#[test]
fn test_chargeable_equal_inputs() {
    assert_eq!(chargeable_weight(0.5, 0.5, 0.5), 0.5);
}
