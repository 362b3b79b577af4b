//! Domain models
//!
//! Closed set of value types exchanged with the caller:
//! - `CalculationParameters`: shipment attributes for one pricing request
//! - `CourierInfo` / `CourierPricing`: courier identity and rate card
//! - `PincodeDetails`: resolved city/state for a pincode
//! - `PriceQuote`: one priced courier option with its full charge breakdown
//!
//! All types are plain in-memory records with serde derives; the engine has
//! no wire format of its own, so field names follow the JSON shape the
//! consuming controllers serialize.

pub mod courier;
pub mod params;
pub mod pincode;
pub mod pricing;
pub mod quote;

pub use courier::{CourierFlow, CourierInfo};
pub use params::{BoxDimensions, CalculationParameters, DimensionUnit, PaymentType, WeightUnit};
pub use pincode::PincodeDetails;
pub use pricing::{CourierPricing, ZonePricing};
pub use quote::{ExpectedPickup, PriceQuote, WeightBreakdown};
