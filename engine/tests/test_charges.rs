//! Charge Calculator Tests
//!
//! Weight increment ratio, COD charge selection, RTO computation, forward
//! charge gating, and the excess-charge helper.

use courier_rate_engine::charges::{
    compute_charges, excess_charges, weight_increment_ratio,
};
use courier_rate_engine::models::{CourierPricing, PaymentType, ZonePricing};
use courier_rate_engine::zone::Zone;

/// Helper: 0.5 kg slab, 0.5 kg increments, one Zone D row (base 55, incr 45)
fn standard_pricing() -> CourierPricing {
    CourierPricing::new(0.5, 0.5, vec![ZonePricing::new(Zone::D, 55.0, 45.0)])
}

fn zone_row(pricing: &CourierPricing) -> ZonePricing {
    pricing.pricing_for_zone(Zone::D).unwrap().clone()
}

// ============================================================================
// Weight increment ratio
// ============================================================================

#[test]
fn test_ratio_zero_below_slab() {
    assert_eq!(weight_increment_ratio(0.3, 0.5, 0.5), 0);
}

#[test]
fn test_ratio_zero_at_slab() {
    assert_eq!(weight_increment_ratio(0.5, 0.5, 0.5), 0);
}

#[test]
fn test_ratio_rounds_up_partial_steps() {
    // 0.6 kg over a 0.5 slab = 0.1 above, one full step charged
    assert_eq!(weight_increment_ratio(0.6, 0.5, 0.5), 1);
    // 1.2 kg = 0.7 above = ceil(1.4) = 2 steps
    assert_eq!(weight_increment_ratio(1.2, 0.5, 0.5), 2);
}

#[test]
fn test_ratio_exact_step_boundary() {
    assert_eq!(weight_increment_ratio(1.0, 0.5, 0.5), 1);
    assert_eq!(weight_increment_ratio(1.5, 0.5, 0.5), 2);
}

// ============================================================================
// Base and weight charges
// ============================================================================

#[test]
fn test_base_charges_include_weight_charges() {
    let pricing = standard_pricing();
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);

    assert_eq!(charges.weight_increment_ratio, 2);
    assert_eq!(charges.weight_charges, 90.0);
    assert_eq!(charges.base_charges, 145.0);
}

#[test]
fn test_weight_within_slab_charges_base_only() {
    let pricing = standard_pricing();
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 0.5, PaymentType::Prepaid, None);

    assert_eq!(charges.weight_charges, 0.0);
    assert_eq!(charges.base_charges, 55.0);
}

// ============================================================================
// COD charge selection
// ============================================================================

#[test]
fn test_cod_picks_higher_of_flat_and_percent() {
    let pricing = standard_pricing().with_cod(20.0, 2.0);
    let row = zone_row(&pricing);

    // 2% of 500 = 10 < flat 20
    let charges = compute_charges(&pricing, &row, 0.5, PaymentType::Cod, Some(500.0));
    assert_eq!(charges.cod_charges, 20.0);

    // 2% of 2000 = 40 > flat 20
    let charges = compute_charges(&pricing, &row, 0.5, PaymentType::Cod, Some(2000.0));
    assert_eq!(charges.cod_charges, 40.0);
}

#[test]
fn test_cod_zero_for_prepaid_orders() {
    let pricing = standard_pricing().with_cod(20.0, 2.0);
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 0.5, PaymentType::Prepaid, Some(500.0));
    assert_eq!(charges.cod_charges, 0.0);
}

#[test]
fn test_cod_zero_when_courier_not_cod_capable() {
    let pricing = standard_pricing(); // COD not enabled
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 0.5, PaymentType::Cod, Some(500.0));
    assert_eq!(charges.cod_charges, 0.0);
}

// ============================================================================
// RTO charges
// ============================================================================

#[test]
fn test_rto_zero_when_not_rto_capable() {
    let pricing = standard_pricing();
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);
    assert_eq!(charges.rto_charges, 0.0);
}

#[test]
fn test_rto_mirrors_forward_when_flagged() {
    let mut pricing = standard_pricing().with_rto(true);
    pricing.zone_pricing[0].is_rto_same_as_fw = true;
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);
    assert_eq!(charges.rto_charges, charges.base_charges);
    assert_eq!(charges.rto_charges, charges.fw_charges);
}

#[test]
fn test_rto_same_as_fw_excludes_cod() {
    let mut pricing = standard_pricing().with_rto(true).with_cod(20.0, 2.0);
    pricing.zone_pricing[0].is_rto_same_as_fw = true;
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Cod, Some(500.0));
    assert_eq!(charges.cod_charges, 20.0);
    // COD cancels out of the RTO mirror
    assert_eq!(charges.rto_charges, charges.base_charges);
}

#[test]
fn test_rto_distinct_rates() {
    let mut pricing = standard_pricing().with_rto(true);
    pricing.zone_pricing[0] = ZonePricing::new(Zone::D, 55.0, 45.0).with_rto_rates(40.0, 30.0);
    let row = zone_row(&pricing);

    // 2 increments: 40 + 30 * 2 = 100
    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);
    assert_eq!(charges.rto_charges, 100.0);
}

#[test]
fn test_rto_falls_back_to_forward_rates_when_unconfigured() {
    let pricing = standard_pricing().with_rto(true);
    let row = zone_row(&pricing); // no distinct RTO rates, not same-as-fw

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);
    assert_eq!(charges.rto_charges, 55.0 + 45.0 * 2.0);
}

// ============================================================================
// Forward charge and total
// ============================================================================

#[test]
fn test_forward_zero_when_not_forward_applicable() {
    let pricing = standard_pricing().with_forward(false);
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Prepaid, None);
    assert_eq!(charges.fw_charges, 0.0);
    assert_eq!(charges.total_price, 0.0);
    // Base charges are still computed for the breakdown
    assert_eq!(charges.base_charges, 145.0);
}

#[test]
fn test_total_is_forward_only() {
    let mut pricing = standard_pricing().with_rto(true).with_cod(20.0, 2.0);
    pricing.zone_pricing[0].is_rto_same_as_fw = true;
    let row = zone_row(&pricing);

    let charges = compute_charges(&pricing, &row, 1.2, PaymentType::Cod, Some(500.0));
    // COD and RTO are computed but never enter the quoted total
    assert!(charges.cod_charges > 0.0);
    assert!(charges.rto_charges > 0.0);
    assert_eq!(charges.total_price, charges.fw_charges);
}

// ============================================================================
// Excess charges (weight disputes)
// ============================================================================

#[test]
fn test_excess_rounds_delta_up_to_full_steps() {
    let pricing = standard_pricing();
    let row = zone_row(&pricing);

    // 0.7 kg over 0.5 kg steps = 2 increments
    let excess = excess_charges(&pricing, &row, 0.7);
    assert_eq!(excess.increments, 2);
    assert_eq!(excess.fw_excess, 90.0);
}

#[test]
fn test_excess_rto_mirrors_forward_when_flagged() {
    let pricing = standard_pricing();
    let mut row = zone_row(&pricing);
    row.is_rto_same_as_fw = true;

    let excess = excess_charges(&pricing, &row, 0.7);
    assert_eq!(excess.rto_excess, excess.fw_excess);
}

#[test]
fn test_excess_rto_uses_distinct_rate() {
    let pricing = standard_pricing();
    let row = ZonePricing::new(Zone::D, 55.0, 45.0).with_rto_rates(40.0, 30.0);

    let excess = excess_charges(&pricing, &row, 0.7);
    assert_eq!(excess.fw_excess, 90.0);
    assert_eq!(excess.rto_excess, 60.0);
}
