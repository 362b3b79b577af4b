//! Priced quote output
//!
//! A `PriceQuote` is constructed fresh per calculation call and owned
//! exclusively by the caller. It echoes the courier and rate card it was
//! computed from, the resolved zone, every charge component, and a weight
//! breakdown record for audit display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CourierInfo, CourierPricing};
use crate::zone::Zone;

/// Expected pickup label derived from the courier's daily cutoff
///
/// `Today` orders before `Tomorrow` in pickup-time sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpectedPickup {
    Today,
    Tomorrow,
}

impl fmt::Display for ExpectedPickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedPickup::Today => write!(f, "Today"),
            ExpectedPickup::Tomorrow => write!(f, "Tomorrow"),
        }
    }
}

/// Weight figures behind a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    /// Declared weight normalized to kg
    pub actual_weight: f64,

    /// Dimensional weight (kg, rounded to 2 decimals)
    pub volumetric_weight: f64,

    /// max(actual, volumetric, courier minimum slab)
    pub chargeable_weight: f64,

    /// Courier's minimum chargeable weight slab (kg)
    pub min_weight: f64,

    /// Billing weight steps above the minimum slab
    pub weight_increment_ratio: u32,
}

/// One priced courier option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Courier this quote belongs to
    pub courier: CourierInfo,

    /// Rate card the quote was computed from
    pub pricing: CourierPricing,

    /// Resolved shipping zone
    pub zone: Zone,

    /// Human-readable zone name
    pub zone_name: String,

    /// Zone base price plus weight charges (rupees)
    pub base_charges: f64,

    /// Incremental weight charges above the minimum slab
    pub weight_charges: f64,

    /// COD handling charge (0 for prepaid or COD-incapable couriers)
    pub cod_charges: f64,

    /// Contingent return-to-origin charge; informational, not part of
    /// `total_price`
    pub rto_charges: f64,

    /// Forward charge (0 when the courier is not forward-applicable)
    pub fw_charges: f64,

    /// Quoted total; equals `fw_charges`
    pub total_price: f64,

    /// Chargeable weight the quote was billed at (kg)
    pub final_weight: f64,

    /// Dimensional weight (kg)
    pub volumetric_weight: f64,

    /// Pickup label relative to the courier's daily cutoff
    pub expected_pickup: ExpectedPickup,

    /// Weight figures behind the charges
    pub breakdown: WeightBreakdown,
}
