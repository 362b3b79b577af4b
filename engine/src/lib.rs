//! Courier Rate Engine
//!
//! Stateless courier rate/zone pricing engine: given a shipment's physical
//! attributes and origin/destination localities, determines the shipping
//! zone, computes chargeable weight, and produces a ranked set of priced
//! courier options with forward, COD, and RTO charge breakdowns.
//!
//! # Architecture
//!
//! - **models**: Domain types (parameters, courier, pricing, quote)
//! - **weight**: Actual/volumetric weight normalization
//! - **zone**: Deterministic five-zone classification
//! - **charges**: Base, weight, COD, RTO, and forward charge computation
//! - **engine**: Orchestrator (validation, eligibility, per-courier pricing)
//! - **results**: Sorting, filtering, grouping, summary statistics
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 rupees; all weights are f64 kilograms
//! 2. The engine performs no I/O and holds no state; identical inputs
//!    yield identical output
//! 3. A courier's failure is an exclusion, never an error for the batch

// Module declarations
pub mod charges;
pub mod engine;
pub mod models;
pub mod results;
pub mod weight;
pub mod zone;

// Re-exports for convenience
pub use charges::{compute_charges, excess_charges, ChargeSet, ExcessCharges};
pub use engine::{
    calculate_price, calculate_price_at, calculate_prices_for_couriers,
    calculate_prices_for_couriers_at, expected_pickup, Exclusion,
};
pub use models::{
    BoxDimensions, CalculationParameters, CourierFlow, CourierInfo, CourierPricing, DimensionUnit,
    ExpectedPickup, PaymentType, PincodeDetails, PriceQuote, WeightBreakdown, WeightUnit,
    ZonePricing,
};
pub use results::{
    cheapest, filter_quotes, group_by_zone, most_expensive, price_summary, sort_by_pickup_time,
    sort_by_price, sort_by_recommended_and_price, PriceRange, PriceSummary, QuoteFilters,
    SortOrder,
};
pub use zone::{determine_zone, Zone, METRO_CITIES, NORTH_EAST_STATES};
