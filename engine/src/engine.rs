//! Price engine orchestrator
//!
//! Validates inputs, applies per-courier eligibility filters, and wires the
//! weight normalizer, zone classifier, and charge calculator together into
//! one priced quote per serviceable courier.
//!
//! # Failure semantics
//!
//! Expected business conditions (malformed input, inactive courier, flow
//! mismatch, unserviced zone) never panic and never abort a batch: each is
//! reported as an [`Exclusion`] and the batch entry point logs it and skips
//! that courier. The distinction between "invalid input" and "not
//! applicable" exists for observability only; at the API surface both mean
//! the courier is not offered.

use chrono::{Local, NaiveTime};
use thiserror::Error;
use tracing::{debug, warn};

use crate::charges;
use crate::models::{
    CalculationParameters, CourierInfo, CourierPricing, ExpectedPickup, PaymentType,
    PincodeDetails, PriceQuote, WeightBreakdown,
};
use crate::results;
use crate::weight;
use crate::zone::{determine_zone, Zone};

/// Why a courier was excluded from a pricing request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Malformed calculation parameters (defensive guard; callers are
    /// expected to have pre-validated)
    #[error("invalid calculation parameters: {reason}")]
    InvalidParameters { reason: &'static str },

    /// Malformed courier pricing configuration
    #[error("invalid pricing configuration: {reason}")]
    InvalidPricing { reason: &'static str },

    /// Courier is not active
    #[error("courier is not active")]
    InactiveCourier,

    /// Reverse-pickup couriers only serve reverse flows and vice versa
    #[error("courier flow does not match order flow")]
    FlowMismatch,

    /// Courier has no pricing row for the resolved zone
    #[error("no pricing configured for zone {zone}")]
    ZoneNotServiced { zone: Zone },
}

fn validate_params(params: &CalculationParameters) -> Result<(), Exclusion> {
    let invalid = |reason| Err(Exclusion::InvalidParameters { reason });

    if !(params.weight.is_finite() && params.weight > 0.0) {
        return invalid("weight must be positive");
    }
    let dims = &params.dimensions;
    for value in [dims.length, dims.width, dims.height] {
        if !(value.is_finite() && value > 0.0) {
            return invalid("all dimensions must be positive");
        }
    }
    if params.payment_type == PaymentType::Cod {
        match params.collectable_amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => {}
            _ => return invalid("COD orders require a positive collectable amount"),
        }
    }
    if params.pickup_pincode.trim().is_empty() {
        return invalid("pickup pincode is required");
    }
    if params.delivery_pincode.trim().is_empty() {
        return invalid("delivery pincode is required");
    }
    Ok(())
}

fn validate_pricing(pricing: &CourierPricing) -> Result<(), Exclusion> {
    let invalid = |reason| Err(Exclusion::InvalidPricing { reason });

    if pricing.zone_pricing.is_empty() {
        return invalid("zone pricing table is empty");
    }
    if !(pricing.min_weight.is_finite() && pricing.min_weight > 0.0) {
        return invalid("minimum weight slab must be positive");
    }
    if !(pricing.weight_increment.is_finite() && pricing.weight_increment > 0.0) {
        return invalid("weight increment must be positive");
    }
    if pricing.cod_charge_flat < 0.0 || pricing.cod_charge_percent < 0.0 {
        return invalid("COD charges must not be negative");
    }
    for (index, row) in pricing.zone_pricing.iter().enumerate() {
        let duplicate = pricing.zone_pricing[..index]
            .iter()
            .any(|earlier| earlier.zone == row.zone);
        if duplicate {
            return invalid("duplicate zone in pricing table");
        }
    }
    Ok(())
}

/// Expected pickup label relative to the courier's daily cutoff
///
/// "Tomorrow" once the cutoff has passed, "Today" otherwise. A missing or
/// unparseable cutoff defaults to "Today".
///
/// # Boundary Semantics
/// - `now < cutoff`: pickup Today
/// - `now == cutoff`: at the cutoff, still Today
/// - `now > cutoff`: pickup Tomorrow
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use courier_rate_engine::engine::expected_pickup;
/// use courier_rate_engine::models::ExpectedPickup;
///
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(expected_pickup(Some("14:00"), noon), ExpectedPickup::Today);
/// assert_eq!(expected_pickup(Some("09:30"), noon), ExpectedPickup::Tomorrow);
/// assert_eq!(expected_pickup(Some("not a time"), noon), ExpectedPickup::Today);
/// assert_eq!(expected_pickup(None, noon), ExpectedPickup::Today);
/// ```
pub fn expected_pickup(cutoff: Option<&str>, now: NaiveTime) -> ExpectedPickup {
    let Some(raw) = cutoff else {
        return ExpectedPickup::Today;
    };
    let trimmed = raw.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"));
    match parsed {
        Ok(cutoff_time) if now > cutoff_time => ExpectedPickup::Tomorrow,
        _ => ExpectedPickup::Today,
    }
}

/// Price one courier for one shipment, using the local wall clock for the
/// pickup cutoff
///
/// See [`calculate_price_at`] for the deterministic variant.
pub fn calculate_price(
    params: &CalculationParameters,
    courier: &CourierInfo,
    pricing: &CourierPricing,
    pickup: &PincodeDetails,
    delivery: &PincodeDetails,
) -> Result<PriceQuote, Exclusion> {
    calculate_price_at(params, courier, pricing, pickup, delivery, Local::now().time())
}

/// Price one courier for one shipment at an explicit time of day
///
/// Returns the priced quote, or the [`Exclusion`] reason this courier is
/// not offered. Identical inputs always yield identical output.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use courier_rate_engine::engine::calculate_price_at;
/// use courier_rate_engine::models::{
///     BoxDimensions, CalculationParameters, CourierInfo, CourierPricing, DimensionUnit,
///     PaymentType, PincodeDetails, WeightUnit, ZonePricing,
/// };
/// use courier_rate_engine::zone::Zone;
///
/// let params = CalculationParameters::new(
///     1.2,
///     WeightUnit::Kg,
///     BoxDimensions::new(10.0, 10.0, 10.0, DimensionUnit::Centimeter),
///     PaymentType::Prepaid,
///     "400001",
///     "400050",
/// );
/// let courier = CourierInfo::new("Surface Express");
/// let pricing = CourierPricing::new(0.5, 0.5, vec![ZonePricing::new(Zone::A, 30.0, 25.0)]);
/// let pickup = PincodeDetails::new("400001", "Mumbai", "Maharashtra");
/// let delivery = PincodeDetails::new("400050", "Mumbai", "Maharashtra");
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// let quote = calculate_price_at(&params, &courier, &pricing, &pickup, &delivery, noon).unwrap();
/// assert_eq!(quote.zone, Zone::A);
/// assert_eq!(quote.total_price, 30.0 + 2.0 * 25.0);
/// ```
pub fn calculate_price_at(
    params: &CalculationParameters,
    courier: &CourierInfo,
    pricing: &CourierPricing,
    pickup: &PincodeDetails,
    delivery: &PincodeDetails,
    now: NaiveTime,
) -> Result<PriceQuote, Exclusion> {
    validate_params(params)?;
    validate_pricing(pricing)?;

    if !courier.is_active {
        return Err(Exclusion::InactiveCourier);
    }
    if courier.is_reversed_courier != params.is_reversed_order {
        return Err(Exclusion::FlowMismatch);
    }

    let actual_weight = weight::normalize_weight(params.weight, params.weight_unit);
    let volumetric_weight = weight::volumetric_weight(&params.dimensions);
    let chargeable_weight =
        weight::chargeable_weight(actual_weight, volumetric_weight, pricing.min_weight);

    let zone = determine_zone(pickup, delivery);
    let zone_pricing = pricing
        .pricing_for_zone(zone)
        .ok_or(Exclusion::ZoneNotServiced { zone })?;

    let charges = charges::compute_charges(
        pricing,
        zone_pricing,
        chargeable_weight,
        params.payment_type,
        params.collectable_amount,
    );

    Ok(PriceQuote {
        courier: courier.clone(),
        pricing: pricing.clone(),
        zone,
        zone_name: zone.display_name().to_string(),
        base_charges: charges.base_charges,
        weight_charges: charges.weight_charges,
        cod_charges: charges.cod_charges,
        rto_charges: charges.rto_charges,
        fw_charges: charges.fw_charges,
        total_price: charges.total_price,
        final_weight: chargeable_weight,
        volumetric_weight,
        expected_pickup: expected_pickup(courier.pickup_cutoff.as_deref(), now),
        breakdown: WeightBreakdown {
            actual_weight,
            volumetric_weight,
            chargeable_weight,
            min_weight: pricing.min_weight,
            weight_increment_ratio: charges.weight_increment_ratio,
        },
    })
}

/// Price a batch of couriers, using the local wall clock for pickup cutoffs
///
/// See [`calculate_prices_for_couriers_at`] for the deterministic variant.
pub fn calculate_prices_for_couriers(
    params: &CalculationParameters,
    couriers: &[(CourierInfo, CourierPricing)],
    pickup: &PincodeDetails,
    delivery: &PincodeDetails,
) -> Vec<PriceQuote> {
    calculate_prices_for_couriers_at(params, couriers, pickup, delivery, Local::now().time())
}

/// Price a batch of couriers at an explicit time of day
///
/// Excluded couriers are logged and skipped; one courier's bad
/// configuration never fails the whole request. Results are returned in the
/// canonical ranking: recommended couriers first, ascending price within
/// each tier.
pub fn calculate_prices_for_couriers_at(
    params: &CalculationParameters,
    couriers: &[(CourierInfo, CourierPricing)],
    pickup: &PincodeDetails,
    delivery: &PincodeDetails,
    now: NaiveTime,
) -> Vec<PriceQuote> {
    let mut quotes = Vec::with_capacity(couriers.len());

    for (courier, pricing) in couriers {
        match calculate_price_at(params, courier, pricing, pickup, delivery, now) {
            Ok(quote) => quotes.push(quote),
            Err(reason @ Exclusion::InvalidParameters { .. })
            | Err(reason @ Exclusion::InvalidPricing { .. }) => {
                warn!(courier = %courier.name, %reason, "excluding courier from pricing");
            }
            Err(reason) => {
                debug!(courier = %courier.name, %reason, "courier not eligible");
            }
        }
    }

    results::sort_by_recommended_and_price(&mut quotes);
    quotes
}
