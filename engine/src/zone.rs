//! Zone classification
//!
//! Maps an origin/destination locality pair to one of five shipping zones
//! using deterministic, ordered rule evaluation (first match wins):
//!
//! 1. Same city → Zone A
//! 2. Same state (different city) → Zone B
//! 3. Both cities in the metro reference list → Zone C
//! 4. Either state in the north-east reference list → Zone E
//! 5. Otherwise → Zone D (rest of India)
//!
//! Rule order is significant: the same-city and same-state checks take
//! precedence over metro/north-east classification even when a city also
//! appears in the metro list. City/state comparison is case-insensitive and
//! whitespace-trimmed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::PincodeDetails;

/// Metro cities for the Zone C (metro-to-metro) rule
pub const METRO_CITIES: &[&str] = &[
    "delhi",
    "new delhi",
    "mumbai",
    "kolkata",
    "chennai",
    "bengaluru",
    "bangalore",
    "hyderabad",
    "ahmedabad",
    "pune",
];

/// North-east states for the Zone E rule
pub const NORTH_EAST_STATES: &[&str] = &[
    "arunachal pradesh",
    "assam",
    "manipur",
    "meghalaya",
    "mizoram",
    "nagaland",
    "sikkim",
    "tripura",
];

/// One of the five shipping cost tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Within city
    #[serde(rename = "Z_A")]
    A,
    /// Within state
    #[serde(rename = "Z_B")]
    B,
    /// Metro to metro
    #[serde(rename = "Z_C")]
    C,
    /// Rest of India (catch-all)
    #[serde(rename = "Z_D")]
    D,
    /// North east
    #[serde(rename = "Z_E")]
    E,
}

impl Zone {
    /// Short zone code, e.g. `"Z_A"`
    pub fn code(&self) -> &'static str {
        match self {
            Zone::A => "Z_A",
            Zone::B => "Z_B",
            Zone::C => "Z_C",
            Zone::D => "Z_D",
            Zone::E => "Z_E",
        }
    }

    /// Human-readable zone name
    pub fn display_name(&self) -> &'static str {
        match self {
            Zone::A => "Within City",
            Zone::B => "Within State",
            Zone::C => "Metro to Metro",
            Zone::D => "Rest of India",
            Zone::E => "North East",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn is_metro(city: &str) -> bool {
    METRO_CITIES.contains(&city)
}

fn is_north_east(state: &str) -> bool {
    NORTH_EAST_STATES.contains(&state)
}

/// Classify the shipping zone for a pickup/delivery locality pair
///
/// # Example
/// ```
/// use courier_rate_engine::models::PincodeDetails;
/// use courier_rate_engine::zone::{determine_zone, Zone};
///
/// let pickup = PincodeDetails::new("400001", "Mumbai", "Maharashtra");
/// let delivery = PincodeDetails::new("400050", "Mumbai", "Maharashtra");
///
/// // Same city wins over metro membership
/// assert_eq!(determine_zone(&pickup, &delivery), Zone::A);
/// ```
pub fn determine_zone(pickup: &PincodeDetails, delivery: &PincodeDetails) -> Zone {
    let pickup_city = pickup.normalized_city();
    let delivery_city = delivery.normalized_city();
    let pickup_state = pickup.normalized_state();
    let delivery_state = delivery.normalized_state();

    if pickup_city == delivery_city {
        return Zone::A;
    }
    if pickup_state == delivery_state {
        return Zone::B;
    }
    if is_metro(&pickup_city) && is_metro(&delivery_city) {
        return Zone::C;
    }
    if is_north_east(&pickup_state) || is_north_east(&delivery_state) {
        return Zone::E;
    }
    Zone::D
}
