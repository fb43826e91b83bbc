use super::export::{HandStats, PlayerStats};

/// Flat per-player view of a hand, the shape consumed by callers that only
/// care about one player at a time.
///
/// Built from the same fold as [`super::HandHistoryStats`], so both agree on
/// every shared figure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerSummary {
    pub aggressive_action_count: u32,
    pub total_action_count: u32,
    pub total_pot: String,
    pub total_rake: String,
    pub total_rake_contributed: String,
    pub total_won: String,
    pub vpip: bool,
}

impl PlayerSummary {
    pub fn from_export(hand: HandStats, player: PlayerStats) -> Self {
        Self {
            aggressive_action_count: player.aggressive_action_count,
            total_action_count: player.total_action_count,
            total_pot: hand.total_pot,
            total_rake: hand.total_rake,
            total_rake_contributed: player.total_rake_contributed,
            total_won: player.total_won,
            vpip: player.vpip,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_from_export() {
        let hand = HandStats {
            total_pot: "57.4".to_string(),
            total_rake: "0.5".to_string(),
        };
        let player = PlayerStats {
            aggressive_action_count: 3,
            total_action_count: 3,
            streets: BTreeMap::new(),
            total_awarded: "56.9".to_string(),
            total_contributed: "27.45".to_string(),
            total_rake_contributed: "0.5".to_string(),
            total_won: "29.45".to_string(),
            vpip: true,
            went_to_showdown: true,
        };

        let summary = PlayerSummary::from_export(hand, player);
        assert_eq!(summary.total_pot, "57.4");
        assert_eq!(summary.total_rake, "0.5");
        assert_eq!(summary.total_won, "29.45");
        assert_eq!(summary.total_rake_contributed, "0.5");
        assert_eq!(summary.aggressive_action_count, 3);
        assert!(summary.vpip);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let summary = PlayerSummary {
            aggressive_action_count: 0,
            total_action_count: 1,
            total_pot: "3".to_string(),
            total_rake: "0".to_string(),
            total_rake_contributed: "0".to_string(),
            total_won: "-1".to_string(),
            vpip: false,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalActionCount"], 1);
        assert_eq!(json["totalPot"], "3");
        assert_eq!(json["totalWon"], "-1");
        assert_eq!(json["vpip"], false);
    }
}
