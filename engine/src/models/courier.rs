//! Courier identity and operational metadata

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of flows a courier serves
///
/// Forward couriers pick up from the seller and deliver to the buyer;
/// reverse couriers serve reverse-pickup (return) flows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourierFlow {
    #[serde(rename = "forward")]
    Forward,
    #[serde(rename = "reverse")]
    Reverse,
}

/// Courier identity and operational metadata
///
/// # Example
/// ```
/// use courier_rate_engine::models::{CourierFlow, CourierInfo};
///
/// let courier = CourierInfo::new("Bluedart Surface")
///     .with_pickup_cutoff("14:00")
///     .with_recommended(true);
///
/// assert!(courier.is_active);
/// assert_eq!(courier.flow(), CourierFlow::Forward);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierInfo {
    /// Unique courier identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Inactive couriers are excluded from every calculation
    pub is_active: bool,

    /// True if this courier serves reverse-pickup flows only
    #[serde(default)]
    pub is_reversed_courier: bool,

    /// Daily pickup cutoff time as "HH:MM" ("HH:MM:SS" also accepted).
    /// Orders priced after the cutoff get an expected pickup of Tomorrow.
    #[serde(default)]
    pub pickup_cutoff: Option<String>,

    /// Recommended couriers rank before non-recommended ones
    #[serde(default)]
    pub recommended: bool,

    /// Display-only seller rating
    #[serde(default)]
    pub rating: Option<f64>,

    /// Display-only delivery estimate, e.g. "2-4 days"
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

impl CourierInfo {
    /// Create an active forward courier with a fresh id
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            is_active: true,
            is_reversed_courier: false,
            pickup_cutoff: None,
            recommended: false,
            rating: None,
            estimated_delivery: None,
        }
    }

    /// Set the active flag (builder pattern)
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Mark as a reverse-pickup courier (builder pattern)
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.is_reversed_courier = reversed;
        self
    }

    /// Set the daily pickup cutoff (builder pattern)
    pub fn with_pickup_cutoff(mut self, cutoff: &str) -> Self {
        self.pickup_cutoff = Some(cutoff.to_string());
        self
    }

    /// Set the recommended flag (builder pattern)
    pub fn with_recommended(mut self, recommended: bool) -> Self {
        self.recommended = recommended;
        self
    }

    /// The flow this courier serves
    pub fn flow(&self) -> CourierFlow {
        if self.is_reversed_courier {
            CourierFlow::Reverse
        } else {
            CourierFlow::Forward
        }
    }
}
