//! Resolved pincode details
//!
//! City/state for a pincode, as resolved by an external lookup collaborator.
//! The engine never performs the lookup itself; it only consumes the result.

use serde::{Deserialize, Serialize};

/// City and state resolved for a single pincode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeDetails {
    pub pincode: String,
    pub city: String,
    pub state: String,
}

impl PincodeDetails {
    pub fn new(pincode: &str, city: &str, state: &str) -> Self {
        Self {
            pincode: pincode.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    /// City name normalized for comparison (trimmed, lowercased)
    pub fn normalized_city(&self) -> String {
        self.city.trim().to_lowercase()
    }

    /// State name normalized for comparison (trimmed, lowercased)
    pub fn normalized_state(&self) -> String {
        self.state.trim().to_lowercase()
    }
}
