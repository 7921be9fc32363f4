//! Domain state types, separated by concern:
//! - `connection`: tunnel phase, facts snapshot, classified status and banner
//! - `location`: apparent network location
//! - `netshield`: NetShield mode and per-session summary

mod connection;
mod location;
mod netshield;

// Re-export all types for easy access
pub use connection::{ConnectionFacts, ConnectionStatus, StatusBanner, TunnelPhase};
pub use location::LocationInfo;
pub use netshield::{NetShieldMode, NetShieldSummary};
