//! Calculation parameters
//!
//! Immutable input for one pricing request: physical attributes of the
//! shipment, payment mode, and the pickup/delivery pincodes.
//!
//! # Invariants (enforced by the engine's validation guard)
//!
//! - `weight` > 0
//! - all three box dimensions > 0
//! - payment type COD requires a positive collectable amount
//! - both pincodes are non-empty

use serde::{Deserialize, Serialize};

/// Unit of the declared shipment weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms (canonical unit)
    #[serde(rename = "kg")]
    Kg,
    /// Grams
    #[serde(rename = "g")]
    Gram,
}

/// Unit of the declared box dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Centimeters (volumetric divisor 5000)
    #[serde(rename = "cm")]
    Centimeter,
    /// Inches (volumetric divisor 5)
    #[serde(rename = "in")]
    Inch,
}

/// Payment mode of the order being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "prepaid")]
    Prepaid,
    /// Cash on delivery; requires a positive collectable amount
    #[serde(rename = "cod")]
    Cod,
}

/// Outer box dimensions of the shipment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

impl BoxDimensions {
    pub fn new(length: f64, width: f64, height: f64, unit: DimensionUnit) -> Self {
        Self {
            length,
            width,
            height,
            unit,
        }
    }
}

/// Input parameters for one price calculation
///
/// One `CalculationParameters` paired with one courier (info + pricing) and
/// two resolved pincodes is the unit of computation and yields at most one
/// [`PriceQuote`](crate::models::PriceQuote).
///
/// # Example
/// ```
/// use courier_rate_engine::models::{
///     BoxDimensions, CalculationParameters, DimensionUnit, PaymentType, WeightUnit,
/// };
///
/// let params = CalculationParameters::new(
///     1.5,
///     WeightUnit::Kg,
///     BoxDimensions::new(10.0, 10.0, 10.0, DimensionUnit::Centimeter),
///     PaymentType::Cod,
///     "400001",
///     "110001",
/// )
/// .with_collectable_amount(500.0);
///
/// assert_eq!(params.collectable_amount, Some(500.0));
/// assert!(!params.is_reversed_order);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    /// Declared weight in `weight_unit`
    pub weight: f64,

    /// Unit of `weight`
    pub weight_unit: WeightUnit,

    /// Outer box dimensions (for volumetric weight)
    pub dimensions: BoxDimensions,

    /// Payment mode
    pub payment_type: PaymentType,

    /// Amount to collect on delivery (COD orders only, in rupees)
    #[serde(default)]
    pub collectable_amount: Option<f64>,

    /// Origin pincode
    pub pickup_pincode: String,

    /// Destination pincode
    pub delivery_pincode: String,

    /// True for reverse-pickup (return) orders; matched against the
    /// courier's `is_reversed_courier` flag
    #[serde(default)]
    pub is_reversed_order: bool,
}

impl CalculationParameters {
    /// Create parameters for a forward order with no collectable amount
    pub fn new(
        weight: f64,
        weight_unit: WeightUnit,
        dimensions: BoxDimensions,
        payment_type: PaymentType,
        pickup_pincode: &str,
        delivery_pincode: &str,
    ) -> Self {
        Self {
            weight,
            weight_unit,
            dimensions,
            payment_type,
            collectable_amount: None,
            pickup_pincode: pickup_pincode.to_string(),
            delivery_pincode: delivery_pincode.to_string(),
            is_reversed_order: false,
        }
    }

    /// Set the COD collectable amount (builder pattern)
    pub fn with_collectable_amount(mut self, amount: f64) -> Self {
        self.collectable_amount = Some(amount);
        self
    }

    /// Mark this as a reverse-pickup order (builder pattern)
    pub fn with_reversed_order(mut self, reversed: bool) -> Self {
        self.is_reversed_order = reversed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_serde_codes() {
        assert_eq!(serde_json::to_string(&WeightUnit::Gram).unwrap(), "\"g\"");
        assert_eq!(
            serde_json::to_string(&DimensionUnit::Centimeter).unwrap(),
            "\"cm\""
        );
        assert_eq!(serde_json::to_string(&PaymentType::Cod).unwrap(), "\"cod\"");
    }

    #[test]
    fn test_builder_defaults() {
        let params = CalculationParameters::new(
            1.0,
            WeightUnit::Kg,
            BoxDimensions::new(10.0, 10.0, 10.0, DimensionUnit::Centimeter),
            PaymentType::Prepaid,
            "400001",
            "110001",
        );

        assert_eq!(params.collectable_amount, None);
        assert!(!params.is_reversed_order);
    }
}
