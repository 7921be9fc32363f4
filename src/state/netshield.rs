//! NetShield (ad/tracker blocking) state types.

use serde::{Deserialize, Serialize};

/// NetShield operating mode.
///
/// Determines what the blocker filters while the tunnel is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NetShieldMode {
    /// No filtering.
    #[default]
    Disabled,
    /// Blocks malware domains only.
    Enabled,
    /// Blocks malware, ads and trackers.
    EnabledExtended,
}

impl NetShieldMode {
    /// Check if any filtering is active.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Cycle to next mode: Disabled → Enabled → `EnabledExtended` → Disabled
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Disabled => Self::Enabled,
            Self::Enabled => Self::EnabledExtended,
            Self::EnabledExtended => Self::Disabled,
        }
    }
}

impl std::fmt::Display for NetShieldMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetShieldMode::Disabled => write!(f, "off"),
            NetShieldMode::Enabled => write!(f, "malware"),
            NetShieldMode::EnabledExtended => write!(f, "malware+ads+trackers"),
        }
    }
}

/// Per-session NetShield summary shown while connected.
///
/// Counters are cumulative for the current session and only ever grow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetShieldSummary {
    /// Current operating mode.
    pub mode: NetShieldMode,
    /// Ads blocked this session.
    pub ads_blocked: u64,
    /// Trackers blocked this session.
    pub trackers_blocked: u64,
    /// Bytes saved by blocking this session.
    pub saved_bytes: u64,
}

impl NetShieldSummary {
    /// True if any counter recorded activity this session.
    #[must_use]
    pub const fn has_activity(&self) -> bool {
        self.ads_blocked > 0 || self.trackers_blocked > 0 || self.saved_bytes > 0
    }
}
