//! Zone Classifier Tests
//!
//! Ordered rule evaluation, rule precedence, reference-list membership,
//! and name normalization.

use courier_rate_engine::models::PincodeDetails;
use courier_rate_engine::zone::{determine_zone, Zone, METRO_CITIES, NORTH_EAST_STATES};

fn locality(city: &str, state: &str) -> PincodeDetails {
    PincodeDetails::new("000000", city, state)
}

// ============================================================================
// The five rules
// ============================================================================

#[test]
fn test_same_city_is_zone_a() {
    let pickup = locality("Mumbai", "Maharashtra");
    let delivery = locality("Mumbai", "Maharashtra");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::A);
}

#[test]
fn test_same_state_different_city_is_zone_b() {
    let pickup = locality("Pune", "Maharashtra");
    let delivery = locality("Nagpur", "Maharashtra");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::B);
}

#[test]
fn test_metro_pair_is_zone_c() {
    let pickup = locality("Chennai", "Tamil Nadu");
    let delivery = locality("Kolkata", "West Bengal");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::C);
}

#[test]
fn test_north_east_state_is_zone_e() {
    // Either side qualifies
    let pickup = locality("Guwahati", "Assam");
    let delivery = locality("Jaipur", "Rajasthan");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::E);
    assert_eq!(determine_zone(&delivery, &pickup), Zone::E);
}

#[test]
fn test_rest_of_india_is_zone_d() {
    let pickup = locality("Jaipur", "Rajasthan");
    let delivery = locality("Kochi", "Kerala");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::D);
}

// ============================================================================
// Rule precedence
// ============================================================================

#[test]
fn test_same_city_wins_over_metro_membership() {
    // Mumbai is in the metro list but the same-city rule fires first
    let pickup = locality("Mumbai", "Maharashtra");
    let delivery = locality("Mumbai", "Maharashtra");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::A);
}

#[test]
fn test_same_state_wins_over_metro_pair() {
    // Mumbai and Pune are both metros, but share a state
    let pickup = locality("Mumbai", "Maharashtra");
    let delivery = locality("Pune", "Maharashtra");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::B);
}

#[test]
fn test_metro_pair_wins_over_north_east() {
    // If both cities were somehow metros in a north-east state, metro fires
    // first; with one metro and one north-east state, north-east fires.
    let pickup = locality("Delhi", "Delhi");
    let delivery = locality("Aizawl", "Mizoram");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::E);
}

// ============================================================================
// Normalization and reference data
// ============================================================================

#[test]
fn test_city_comparison_is_case_insensitive() {
    let pickup = locality("MUMBAI", "Maharashtra");
    let delivery = locality("  mumbai ", "MAHARASHTRA");
    assert_eq!(determine_zone(&pickup, &delivery), Zone::A);
}

#[test]
fn test_reference_lists_are_lowercase() {
    // The classifier lowercases inputs before membership checks; the
    // reference data must already be in that form.
    assert!(METRO_CITIES.iter().all(|city| *city == city.to_lowercase()));
    assert!(NORTH_EAST_STATES
        .iter()
        .all(|state| *state == state.to_lowercase()));
}

#[test]
fn test_known_reference_members() {
    assert!(METRO_CITIES.contains(&"mumbai"));
    assert!(METRO_CITIES.contains(&"bengaluru"));
    assert!(NORTH_EAST_STATES.contains(&"assam"));
    assert!(NORTH_EAST_STATES.contains(&"sikkim"));
}
