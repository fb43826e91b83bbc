use std::collections::BTreeMap;

use crate::hand_history::{HandInfo, Player};

use super::config::AnalyzerConfig;

/// Which players' stats are reported for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Opponents are anonymous; only the hero is reported.
    HeroOnly,
    /// Everyone is reported except players individually flagged anonymous.
    KnownPlayers,
}

impl Visibility {
    /// An explicit `anonymous` flag on the hand wins over the site list.
    pub fn for_hand(info: &HandInfo, config: &AnalyzerConfig) -> Self {
        let anonymous = info
            .anonymous
            .unwrap_or_else(|| config.is_anonymous_site(info.site.as_deref()));
        if anonymous {
            Visibility::HeroOnly
        } else {
            Visibility::KnownPlayers
        }
    }

    pub fn is_visible(&self, player: &Player) -> bool {
        match self {
            Visibility::HeroOnly => player.is_hero,
            Visibility::KnownPlayers => player.is_hero || !player.is_anonymous,
        }
    }
}

/// Keep the entries of `stats` that `visibility` allows. The hero is always
/// kept; names missing from the roster are dropped.
pub fn visible_players<T>(
    stats: BTreeMap<String, T>,
    players: &[Player],
    visibility: Visibility,
) -> BTreeMap<String, T> {
    stats
        .into_iter()
        .filter(|(name, _)| {
            players
                .iter()
                .any(|p| &p.name == name && visibility.is_visible(p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new("John", 1, dec!(49.50)).anonymous(),
            Player::new("Carl", 2, dec!(27.45)),
            Player::new("Mike", 3, dec!(87.25)).hero(),
        ]
    }

    fn stats() -> BTreeMap<String, u32> {
        BTreeMap::from([
            ("John".to_string(), 1),
            ("Carl".to_string(), 2),
            ("Mike".to_string(), 3),
        ])
    }

    #[test]
    fn test_hero_only() {
        let visible = visible_players(stats(), &roster(), Visibility::HeroOnly);
        assert_eq!(visible, BTreeMap::from([("Mike".to_string(), 3)]));
    }

    #[test]
    fn test_known_players_skips_anonymous() {
        let visible = visible_players(stats(), &roster(), Visibility::KnownPlayers);
        assert_eq!(visible.keys().collect::<Vec<_>>(), vec!["Carl", "Mike"]);
    }

    #[test]
    fn test_anonymous_hero_is_still_visible() {
        let players = vec![
            Player::new("Mike", 3, dec!(87.25)).hero().anonymous(),
            Player::new("Carl", 2, dec!(27.45)),
        ];
        let visible = visible_players(stats(), &players, Visibility::KnownPlayers);
        assert!(visible.contains_key("Mike"));
        assert!(visible.contains_key("Carl"));
        assert!(!visible.contains_key("John"));
    }

    #[test]
    fn test_visibility_for_hand() {
        let config = AnalyzerConfig::default();
        let bovada = HandInfo {
            site: Some("bovada".to_string()),
            ..Default::default()
        };
        assert_eq!(Visibility::for_hand(&bovada, &config), Visibility::HeroOnly);

        let stars = HandInfo {
            site: Some("pokerstars".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Visibility::for_hand(&stars, &config),
            Visibility::KnownPlayers
        );

        let forced = HandInfo {
            anonymous: Some(false),
            ..bovada
        };
        assert_eq!(
            Visibility::for_hand(&forced, &config),
            Visibility::KnownPlayers
        );
    }
}
