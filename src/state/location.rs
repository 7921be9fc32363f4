//! Network location types.

use serde::{Deserialize, Serialize};

/// The user's apparent network location.
///
/// Absent entirely when nothing is known yet (e.g. before the first
/// telemetry snapshot arrives).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Country name or code as reported by the observation layer.
    pub country: String,
    /// Public IP address currently visible to the outside.
    pub ip: String,
}

impl LocationInfo {
    /// Creates a location from country and IP strings.
    pub fn new(country: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ip: ip.into(),
        }
    }
}

impl std::fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} · {}", self.country, self.ip)
    }
}
