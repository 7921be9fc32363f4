//! VPN protocol and transmission types, plus validated selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported VPN protocol types.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize, ValueEnum)]
pub enum VpnProtocolKind {
    /// Let the connection layer pick protocol and transport.
    #[default]
    Smart,
    /// `WireGuard` VPN protocol.
    #[value(name = "wireguard")]
    WireGuard,
    /// IKEv2/IPsec protocol.
    #[value(name = "ikev2")]
    IKEv2,
    /// `OpenVPN` protocol.
    #[value(name = "openvpn")]
    OpenVPN,
}

impl std::fmt::Display for VpnProtocolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VpnProtocolKind::Smart => write!(f, "Smart"),
            VpnProtocolKind::WireGuard => write!(f, "WireGuard"),
            VpnProtocolKind::IKEv2 => write!(f, "IKEv2"),
            VpnProtocolKind::OpenVPN => write!(f, "OpenVPN"),
        }
    }
}

/// Transmission method carrying the tunnel traffic.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize, ValueEnum)]
pub enum TransmissionKind {
    /// UDP transport (default).
    #[default]
    Udp,
    /// TCP transport, for networks that drop UDP.
    Tcp,
    /// TLS-wrapped transport, for networks that drop plain tunnels.
    Tls,
}

impl std::fmt::Display for TransmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransmissionKind::Udp => write!(f, "UDP"),
            TransmissionKind::Tcp => write!(f, "TCP"),
            TransmissionKind::Tls => write!(f, "TLS"),
        }
    }
}

/// A validated protocol + transmission pair.
///
/// Construction is total and normalizing, so no invalid instance can
/// exist: `Smart` never carries a transmission (the connection layer
/// picks the concrete transport later), every other protocol always
/// does, defaulting to UDP. `IKEv2` stores its transmission but all
/// capability and label logic ignores it.
///
/// Deserialization funnels through [`ProtocolSelection::new`], so a
/// stale or hand-edited persisted value is repaired on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct ProtocolSelection {
    protocol: VpnProtocolKind,
    transmission: Option<TransmissionKind>,
}

/// Unvalidated mirror of [`ProtocolSelection`] used during deserialization.
#[derive(Deserialize)]
struct RawSelection {
    protocol: VpnProtocolKind,
    #[serde(default)]
    transmission: Option<TransmissionKind>,
}

impl From<RawSelection> for ProtocolSelection {
    fn from(raw: RawSelection) -> Self {
        Self::new(raw.protocol, raw.transmission)
    }
}

impl Default for ProtocolSelection {
    fn default() -> Self {
        Self::new(VpnProtocolKind::Smart, None)
    }
}

impl ProtocolSelection {
    /// Builds a valid selection from a requested protocol and an
    /// optional transmission hint. Never fails: an absent transmission
    /// is resolved by defaulting, and a hint given for `Smart` is
    /// discarded.
    #[must_use]
    pub fn new(protocol: VpnProtocolKind, transmission: Option<TransmissionKind>) -> Self {
        let transmission = match protocol {
            VpnProtocolKind::Smart => None,
            _ => Some(transmission.unwrap_or_default()),
        };
        Self {
            protocol,
            transmission,
        }
    }

    /// The selected VPN protocol.
    #[must_use]
    pub const fn protocol(self) -> VpnProtocolKind {
        self.protocol
    }

    /// The selected transmission method, absent for `Smart`.
    #[must_use]
    pub const fn transmission(self) -> Option<TransmissionKind> {
        self.transmission
    }

    /// Whether the protocol supports the in-tunnel local agent channel.
    ///
    /// Only `WireGuard` and `OpenVPN` do; `Smart` and `IKEv2` never
    /// expose one.
    #[must_use]
    pub const fn local_agent_enabled(self) -> bool {
        matches!(
            self.protocol,
            VpnProtocolKind::WireGuard | VpnProtocolKind::OpenVPN
        )
    }

    /// Symbolic label key for this selection.
    ///
    /// The concrete display text is looked up by the rendering layer;
    /// this only picks which entry applies.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self.protocol {
            VpnProtocolKind::Smart => "smart",
            VpnProtocolKind::WireGuard => match self.transmission {
                Some(TransmissionKind::Tcp) => "wireguard-tcp",
                Some(TransmissionKind::Tls) => "wireguard-tls",
                _ => "wireguard",
            },
            VpnProtocolKind::IKEv2 => "ikev2",
            VpnProtocolKind::OpenVPN => match self.transmission {
                Some(TransmissionKind::Tcp) => "openvpn-tcp",
                _ => "openvpn-udp",
            },
        }
    }
}

impl std::fmt::Display for ProtocolSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.transmission {
            Some(transmission) => write!(f, "{} ({transmission})", self.protocol),
            None => write!(f, "{}", self.protocol),
        }
    }
}
