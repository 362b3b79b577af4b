//! Courier rate card
//!
//! A courier's pricing profile is a weight slab configuration plus one
//! [`ZonePricing`] row per serviced zone. Zones must be unique within a
//! profile; a courier with no row for the resolved zone does not service
//! that lane and is excluded from the result set.

use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Pricing row for one (courier, zone) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePricing {
    /// Zone this row applies to
    pub zone: Zone,

    /// Base forward price for the minimum weight slab (rupees)
    pub base_price: f64,

    /// Forward price per weight increment above the minimum slab
    pub increment_price: f64,

    /// Distinct RTO base price; forward `base_price` is used when absent
    #[serde(default)]
    pub rto_base_price: Option<f64>,

    /// Distinct RTO increment price; forward `increment_price` is used when absent
    #[serde(default)]
    pub rto_increment_price: Option<f64>,

    /// When true, RTO charges mirror forward base+weight charges
    /// and the distinct RTO rates are ignored
    #[serde(default)]
    pub is_rto_same_as_fw: bool,
}

impl ZonePricing {
    pub fn new(zone: Zone, base_price: f64, increment_price: f64) -> Self {
        Self {
            zone,
            base_price,
            increment_price,
            rto_base_price: None,
            rto_increment_price: None,
            is_rto_same_as_fw: false,
        }
    }

    /// Set distinct RTO rates (builder pattern)
    pub fn with_rto_rates(mut self, base: f64, increment: f64) -> Self {
        self.rto_base_price = Some(base);
        self.rto_increment_price = Some(increment);
        self
    }

    /// Make RTO charges mirror forward charges (builder pattern)
    pub fn with_rto_same_as_fw(mut self, same: bool) -> Self {
        self.is_rto_same_as_fw = same;
        self
    }
}

/// Per-courier pricing profile
///
/// # Example
/// ```
/// use courier_rate_engine::models::{CourierPricing, ZonePricing};
/// use courier_rate_engine::zone::Zone;
///
/// let pricing = CourierPricing::new(
///     0.5,
///     0.5,
///     vec![
///         ZonePricing::new(Zone::A, 30.0, 25.0),
///         ZonePricing::new(Zone::D, 55.0, 45.0),
///     ],
/// );
///
/// assert!(pricing.pricing_for_zone(Zone::A).is_some());
/// assert!(pricing.pricing_for_zone(Zone::E).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierPricing {
    /// Minimum chargeable weight slab (kg)
    pub min_weight: f64,

    /// Billing weight step above the minimum slab (kg)
    pub weight_increment: f64,

    /// Flat COD handling charge (rupees)
    #[serde(default)]
    pub cod_charge_flat: f64,

    /// COD handling charge as a percentage of the collectable amount
    #[serde(default)]
    pub cod_charge_percent: f64,

    /// Courier collects COD payments
    #[serde(default)]
    pub is_cod_applicable: bool,

    /// Courier handles return-to-origin shipments
    #[serde(default)]
    pub is_rto_applicable: bool,

    /// Courier handles forward shipments
    pub is_fw_applicable: bool,

    /// Courier supports COD remittance reversal
    #[serde(default)]
    pub is_cod_reversal_applicable: bool,

    /// One row per serviced zone, zones unique
    pub zone_pricing: Vec<ZonePricing>,
}

impl CourierPricing {
    /// Create a forward-applicable profile with the given slab configuration
    pub fn new(min_weight: f64, weight_increment: f64, zone_pricing: Vec<ZonePricing>) -> Self {
        Self {
            min_weight,
            weight_increment,
            cod_charge_flat: 0.0,
            cod_charge_percent: 0.0,
            is_cod_applicable: false,
            is_rto_applicable: false,
            is_fw_applicable: true,
            is_cod_reversal_applicable: false,
            zone_pricing,
        }
    }

    /// Enable COD with the given flat and percentage charges (builder pattern)
    pub fn with_cod(mut self, flat: f64, percent: f64) -> Self {
        self.is_cod_applicable = true;
        self.cod_charge_flat = flat;
        self.cod_charge_percent = percent;
        self
    }

    /// Set the RTO capability flag (builder pattern)
    pub fn with_rto(mut self, applicable: bool) -> Self {
        self.is_rto_applicable = applicable;
        self
    }

    /// Set the forward capability flag (builder pattern)
    pub fn with_forward(mut self, applicable: bool) -> Self {
        self.is_fw_applicable = applicable;
        self
    }

    /// Find the pricing row for a zone, if this courier services it
    pub fn pricing_for_zone(&self, zone: Zone) -> Option<&ZonePricing> {
        self.zone_pricing.iter().find(|row| row.zone == zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_for_zone_finds_matching_row() {
        let pricing = CourierPricing::new(
            0.5,
            0.5,
            vec![
                ZonePricing::new(Zone::A, 30.0, 25.0),
                ZonePricing::new(Zone::B, 35.0, 28.0),
            ],
        );

        assert_eq!(pricing.pricing_for_zone(Zone::B).unwrap().base_price, 35.0);
        assert!(pricing.pricing_for_zone(Zone::C).is_none());
    }
}
