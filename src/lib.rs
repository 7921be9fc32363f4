//! Connection-status classification and protocol selection core for
//! VPN clients.
//!
//! Two pure, stateless components:
//! - [`vpn::resolve`] classifies a raw [`state::ConnectionFacts`]
//!   snapshot into a canonical [`state::ConnectionStatus`] with the
//!   banner to display while connected.
//! - [`vpn::ProtocolSelection`] normalizes a requested protocol and
//!   optional transmission hint into a guaranteed-valid pair.
//!
//! Both are total functions: no input combination fails, absent fields
//! default. The hosting application observes connection and settings
//! changes, re-invokes these on every change, and renders the result.

pub mod cli;
pub mod constants;
pub mod overlay;
pub mod settings;
pub mod state;
pub mod vpn;

pub use overlay::overlay_alpha;
pub use state::{ConnectionFacts, ConnectionStatus, StatusBanner};
pub use vpn::{resolve, ProtocolSelection, TransmissionKind, VpnProtocolKind};
