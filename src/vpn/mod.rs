//! Protocol selection and connection-status classification.

mod protocol;
mod resolver;

pub use protocol::{ProtocolSelection, TransmissionKind, VpnProtocolKind};
pub use resolver::resolve;
