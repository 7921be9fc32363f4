//! Connection-status classification.
//!
//! Maps a raw [`ConnectionFacts`] snapshot to the canonical
//! [`ConnectionStatus`] the UI renders. Pure and stateless: the same
//! snapshot always yields the same status, and nothing is retained
//! between calls. The hosting layer re-invokes [`resolve`] on every
//! upstream change and discards stale results.

use crate::state::{
    ConnectionFacts, ConnectionStatus, NetShieldSummary, StatusBanner, TunnelPhase,
};

/// Classifies a facts snapshot into a connection status.
///
/// Total over all inputs: partial snapshots are tolerated because every
/// optional field defaults to absent/false. Never returns
/// [`ConnectionStatus::Loading`]; that state exists only before the
/// first snapshot.
#[must_use]
pub fn resolve(facts: &ConnectionFacts) -> ConnectionStatus {
    match facts.phase {
        TunnelPhase::Idle => ConnectionStatus::Disabled(facts.location.clone()),
        TunnelPhase::WaitingForNetwork => {
            ConnectionStatus::WaitingForNetwork(facts.location.clone())
        }
        TunnelPhase::Negotiating => ConnectionStatus::Connecting(facts.location.clone()),
        TunnelPhase::Established => ConnectionStatus::Connected {
            secure_core: facts.secure_core,
            banner: select_banner(facts),
        },
    }
}

/// Picks the single banner shown while connected.
///
/// Evaluated top to bottom, first match wins. NetShield beats the
/// unwanted-country warning, which beats both upsells; Business beats
/// Plus. With nothing to show, the NetShield card is rendered in its
/// disabled, zeroed form.
fn select_banner(facts: &ConnectionFacts) -> StatusBanner {
    let summary = facts.netshield_summary();
    if summary.mode.is_enabled() || summary.has_activity() {
        StatusBanner::NetShield(summary)
    } else if facts.unwanted_country {
        StatusBanner::UnwantedCountry
    } else if facts.eligible_for_business_upgrade {
        StatusBanner::UpgradeToBusiness
    } else if facts.eligible_for_plus_upgrade {
        StatusBanner::UpgradeToPlus
    } else {
        StatusBanner::NetShield(NetShieldSummary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LocationInfo, NetShieldMode};

    fn established_facts() -> ConnectionFacts {
        ConnectionFacts {
            phase: TunnelPhase::Established,
            ..ConnectionFacts::default()
        }
    }

    #[test]
    fn test_phase_mapping() {
        let location = Some(LocationInfo::new("CH", "185.159.157.1"));

        let facts = ConnectionFacts {
            phase: TunnelPhase::Idle,
            location: location.clone(),
            ..ConnectionFacts::default()
        };
        assert_eq!(resolve(&facts), ConnectionStatus::Disabled(location.clone()));

        let facts = ConnectionFacts {
            phase: TunnelPhase::WaitingForNetwork,
            location: location.clone(),
            ..ConnectionFacts::default()
        };
        assert_eq!(
            resolve(&facts),
            ConnectionStatus::WaitingForNetwork(location.clone())
        );

        let facts = ConnectionFacts {
            phase: TunnelPhase::Negotiating,
            location: location.clone(),
            ..ConnectionFacts::default()
        };
        assert_eq!(resolve(&facts), ConnectionStatus::Connecting(location));

        assert!(resolve(&established_facts()).is_connected());
    }

    #[test]
    fn test_empty_facts_map_to_disabled() {
        assert_eq!(
            resolve(&ConnectionFacts::default()),
            ConnectionStatus::Disabled(None)
        );
    }

    #[test]
    fn test_secure_core_flag_passes_through() {
        let facts = ConnectionFacts {
            secure_core: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { secure_core, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        assert!(secure_core);
    }

    #[test]
    fn test_netshield_beats_unwanted_country() {
        let facts = ConnectionFacts {
            netshield: NetShieldMode::Enabled,
            unwanted_country: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { banner, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        assert!(matches!(banner, StatusBanner::NetShield(_)));
    }

    #[test]
    fn test_session_activity_counts_as_netshield() {
        // Mode switched off mid-session, but blocks were recorded.
        let facts = ConnectionFacts {
            netshield: NetShieldMode::Disabled,
            ads_blocked: 3,
            unwanted_country: true,
            eligible_for_plus_upgrade: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { banner, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        let StatusBanner::NetShield(summary) = banner else {
            panic!("expected NetShield banner");
        };
        assert_eq!(summary.mode, NetShieldMode::Disabled);
        assert_eq!(summary.ads_blocked, 3);
    }

    #[test]
    fn test_unwanted_country_beats_upsells() {
        let facts = ConnectionFacts {
            unwanted_country: true,
            eligible_for_business_upgrade: true,
            eligible_for_plus_upgrade: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { banner, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        assert_eq!(banner, StatusBanner::UnwantedCountry);
    }

    #[test]
    fn test_business_upgrade_beats_plus_upgrade() {
        let facts = ConnectionFacts {
            eligible_for_business_upgrade: true,
            eligible_for_plus_upgrade: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { banner, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        assert_eq!(banner, StatusBanner::UpgradeToBusiness);
    }

    #[test]
    fn test_plus_upgrade_when_only_flag() {
        let facts = ConnectionFacts {
            eligible_for_plus_upgrade: true,
            ..established_facts()
        };
        let ConnectionStatus::Connected { banner, .. } = resolve(&facts) else {
            panic!("expected Connected");
        };
        assert_eq!(banner, StatusBanner::UpgradeToPlus);
    }

    #[test]
    fn test_fallback_is_zeroed_netshield_card() {
        let ConnectionStatus::Connected { banner, .. } = resolve(&established_facts()) else {
            panic!("expected Connected");
        };
        assert_eq!(banner, StatusBanner::NetShield(NetShieldSummary::default()));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let facts = ConnectionFacts {
            netshield: NetShieldMode::EnabledExtended,
            trackers_blocked: 42,
            secure_core: true,
            ..established_facts()
        };
        assert_eq!(resolve(&facts), resolve(&facts));
    }
}
