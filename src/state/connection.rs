//! VPN connection status types.

use serde::{Deserialize, Serialize};

use super::location::LocationInfo;
use super::netshield::{NetShieldMode, NetShieldSummary};

/// Underlying tunnel phase as reported by the observation layer.
///
/// This is the raw input side; [`ConnectionStatus`] is the classified
/// output the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelPhase {
    /// No connection desired or in progress.
    #[default]
    Idle,
    /// Connection desired but no network path is available.
    WaitingForNetwork,
    /// Handshake/negotiation in progress.
    Negotiating,
    /// Tunnel is up.
    Established,
}

/// Raw facts snapshot supplied by the observation/settings layer.
///
/// Missing optional fields deserialize to absent/false, so a partial
/// snapshot is always a valid input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionFacts {
    /// Current tunnel phase.
    pub phase: TunnelPhase,
    /// Apparent network location, if known.
    pub location: Option<LocationInfo>,
    /// Whether the connected server is a Secure Core server.
    pub secure_core: bool,
    /// NetShield operating mode.
    pub netshield: NetShieldMode,
    /// Ads blocked this session.
    pub ads_blocked: u64,
    /// Trackers blocked this session.
    pub trackers_blocked: u64,
    /// Bytes saved by blocking this session.
    pub saved_bytes: u64,
    /// The exit country is one the user asked to avoid.
    pub unwanted_country: bool,
    /// Account is eligible for the Business upsell.
    pub eligible_for_business_upgrade: bool,
    /// Account is eligible for the Plus upsell.
    pub eligible_for_plus_upgrade: bool,
}

impl ConnectionFacts {
    /// NetShield summary for the current snapshot.
    #[must_use]
    pub fn netshield_summary(&self) -> NetShieldSummary {
        NetShieldSummary {
            mode: self.netshield,
            ads_blocked: self.ads_blocked,
            trackers_blocked: self.trackers_blocked,
            saved_bytes: self.saved_bytes,
        }
    }
}

/// Banner shown below the status header while connected.
///
/// Exactly one banner is shown; [`crate::vpn::resolve`] picks it by priority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBanner {
    /// NetShield summary card (also the fallback with a zeroed summary).
    NetShield(NetShieldSummary),
    /// Upsell to the Plus plan.
    UpgradeToPlus,
    /// Upsell to the Business plan.
    UpgradeToBusiness,
    /// Warning that the exit country is one the user wanted to avoid.
    UnwantedCountry,
}

impl std::fmt::Display for StatusBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusBanner::NetShield(summary) => write!(
                f,
                "NetShield ({}): {} ads, {} trackers, {} bytes saved",
                summary.mode, summary.ads_blocked, summary.trackers_blocked, summary.saved_bytes
            ),
            StatusBanner::UpgradeToPlus => write!(f, "Upgrade to Plus"),
            StatusBanner::UpgradeToBusiness => write!(f, "Upgrade to Business"),
            StatusBanner::UnwantedCountry => write!(f, "Connected to an unwanted country"),
        }
    }
}

/// Classified connection status.
///
/// Closed, mutually exclusive set; each variant carries only what the
/// renderer needs. Values are immutable snapshots recomputed on every
/// input change.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// Transient bootstrap state before any fact snapshot is available.
    /// Produced only by the hosting layer, never by the resolver.
    #[default]
    Loading,
    /// Not connected and not attempting to connect.
    Disabled(Option<LocationInfo>),
    /// Connection desired but no underlying network path.
    WaitingForNetwork(Option<LocationInfo>),
    /// Handshake/negotiation in progress.
    Connecting(Option<LocationInfo>),
    /// Active tunnel.
    Connected {
        /// Whether the server is a Secure Core server.
        secure_core: bool,
        /// Banner selected for display.
        banner: StatusBanner,
    },
}

impl ConnectionStatus {
    /// Check if an active tunnel is up.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Loading => write!(f, "Loading"),
            ConnectionStatus::Disabled(_) => write!(f, "Unprotected"),
            ConnectionStatus::WaitingForNetwork(_) => write!(f, "Waiting for network"),
            ConnectionStatus::Connecting(_) => write!(f, "Connecting"),
            ConnectionStatus::Connected { secure_core, .. } => {
                if *secure_core {
                    write!(f, "Connected (Secure Core)")
                } else {
                    write!(f, "Connected")
                }
            }
        }
    }
}
