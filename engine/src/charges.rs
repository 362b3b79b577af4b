//! Charge computation
//!
//! Tiered charge computation for one (courier, zone) pair at a given
//! chargeable weight:
//!
//! - weight charges: zone increment price × billing steps above the slab
//! - base charges: zone base price + weight charges
//! - COD: the higher of the flat and percentage charges (alternatives,
//!   never additive), 0 unless the order is COD and the courier collects COD
//! - RTO: forward base+weight charges when the zone mirrors forward rates,
//!   otherwise the zone's distinct RTO rates; 0 when not RTO-capable
//! - forward: base charges when forward-applicable, else 0
//! - total: forward charge alone — RTO is contingent and COD is billed
//!   separately, so neither enters the quoted total

use serde::{Deserialize, Serialize};

use crate::models::{CourierPricing, PaymentType, ZonePricing};

/// All charge components for one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeSet {
    /// Zone base price plus weight charges
    pub base_charges: f64,
    /// Incremental weight charges above the minimum slab
    pub weight_charges: f64,
    /// COD handling charge
    pub cod_charges: f64,
    /// Contingent return-to-origin charge
    pub rto_charges: f64,
    /// Forward charge
    pub fw_charges: f64,
    /// Quoted total (forward charge alone)
    pub total_price: f64,
    /// Billing weight steps above the minimum slab
    pub weight_increment_ratio: u32,
}

/// Incremental re-pricing for a positive weight delta (weight disputes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcessCharges {
    /// Billing steps covering the delta
    pub increments: u32,
    /// Forward excess charge
    pub fw_excess: f64,
    /// RTO excess charge
    pub rto_excess: f64,
}

/// Number of billing weight steps above the courier's minimum slab
///
/// Floored at 0 when the chargeable weight fits within the slab.
///
/// # Example
/// ```
/// use courier_rate_engine::charges::weight_increment_ratio;
///
/// assert_eq!(weight_increment_ratio(0.4, 0.5, 0.5), 0); // within slab
/// assert_eq!(weight_increment_ratio(1.2, 0.5, 0.5), 2); // ceil(0.7 / 0.5)
/// ```
pub fn weight_increment_ratio(chargeable_weight: f64, min_weight: f64, weight_increment: f64) -> u32 {
    if chargeable_weight <= min_weight || weight_increment <= 0.0 {
        return 0;
    }
    ((chargeable_weight - min_weight) / weight_increment).ceil() as u32
}

/// COD handling charge
///
/// 0 unless the payment type is COD and the courier collects COD; otherwise
/// the higher of the flat charge and the percentage of the collectable
/// amount — the two are alternatives, not additive.
pub fn cod_charge(
    pricing: &CourierPricing,
    payment_type: PaymentType,
    collectable_amount: Option<f64>,
) -> f64 {
    if payment_type != PaymentType::Cod || !pricing.is_cod_applicable {
        return 0.0;
    }
    let collectable = collectable_amount.unwrap_or(0.0);
    let percent_charge = pricing.cod_charge_percent / 100.0 * collectable;
    pricing.cod_charge_flat.max(percent_charge)
}

fn rto_charge(
    pricing: &CourierPricing,
    zone_pricing: &ZonePricing,
    base_charges: f64,
    cod_charges: f64,
    increment_ratio: u32,
) -> f64 {
    if !pricing.is_rto_applicable {
        return 0.0;
    }
    if zone_pricing.is_rto_same_as_fw {
        // Forward base+weight charges with COD excluded.
        ((base_charges + cod_charges) - cod_charges).max(0.0)
    } else {
        let rto_base = zone_pricing.rto_base_price.unwrap_or(zone_pricing.base_price);
        let rto_increment = zone_pricing
            .rto_increment_price
            .unwrap_or(zone_pricing.increment_price);
        rto_base + rto_increment * f64::from(increment_ratio)
    }
}

/// Compute all charge components for one (courier, zone) pair
///
/// # Example
/// ```
/// use courier_rate_engine::charges::compute_charges;
/// use courier_rate_engine::models::{CourierPricing, PaymentType, ZonePricing};
/// use courier_rate_engine::zone::Zone;
///
/// let pricing = CourierPricing::new(0.5, 0.5, vec![ZonePricing::new(Zone::A, 30.0, 25.0)])
///     .with_cod(20.0, 2.0);
/// let row = pricing.pricing_for_zone(Zone::A).unwrap().clone();
///
/// let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Cod, Some(500.0));
/// assert_eq!(charges.weight_charges, 50.0); // 2 steps above the slab
/// assert_eq!(charges.base_charges, 80.0);
/// assert_eq!(charges.cod_charges, 20.0); // max(20, 2% of 500)
/// assert_eq!(charges.total_price, 80.0); // forward only
/// ```
pub fn compute_charges(
    pricing: &CourierPricing,
    zone_pricing: &ZonePricing,
    chargeable_weight: f64,
    payment_type: PaymentType,
    collectable_amount: Option<f64>,
) -> ChargeSet {
    let increment_ratio =
        weight_increment_ratio(chargeable_weight, pricing.min_weight, pricing.weight_increment);
    let weight_charges = zone_pricing.increment_price * f64::from(increment_ratio);
    let base_charges = zone_pricing.base_price + weight_charges;

    let cod_charges = cod_charge(pricing, payment_type, collectable_amount);
    let rto_charges = rto_charge(pricing, zone_pricing, base_charges, cod_charges, increment_ratio);

    let fw_charges = if pricing.is_fw_applicable {
        base_charges
    } else {
        0.0
    };

    ChargeSet {
        base_charges,
        weight_charges,
        cod_charges,
        rto_charges,
        fw_charges,
        total_price: fw_charges,
        weight_increment_ratio: increment_ratio,
    }
}

/// Incremental re-pricing for a positive weight delta
///
/// Used when a shipment's billed weight is disputed upward after the fact:
/// only the extra billing steps are charged, at the zone's increment rates.
/// A non-positive delta yields zero excess.
pub fn excess_charges(
    pricing: &CourierPricing,
    zone_pricing: &ZonePricing,
    weight_delta: f64,
) -> ExcessCharges {
    if weight_delta <= 0.0 || pricing.weight_increment <= 0.0 {
        return ExcessCharges {
            increments: 0,
            fw_excess: 0.0,
            rto_excess: 0.0,
        };
    }

    let increments = (weight_delta / pricing.weight_increment).ceil() as u32;
    let fw_excess = zone_pricing.increment_price * f64::from(increments);
    let rto_excess = if zone_pricing.is_rto_same_as_fw {
        fw_excess
    } else {
        zone_pricing
            .rto_increment_price
            .unwrap_or(zone_pricing.increment_price)
            * f64::from(increments)
    };

    ExcessCharges {
        increments,
        fw_excess,
        rto_excess,
    }
}
