use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::hand_history::{Player, Street};

use super::rounding::RoundingPolicy;
use super::state::{HandState, PlayerState, State, StreetStat};
use super::visibility::{Visibility, visible_players};

/// Hand-wide figures as exported. Money is a decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandStats {
    pub total_pot: String,
    pub total_rake: String,
}

/// One player's figures as exported. Money is a decimal string, counts are
/// integers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerStats {
    pub aggressive_action_count: u32,
    pub total_action_count: u32,
    pub streets: BTreeMap<Street, StreetStat>,
    pub total_awarded: String,
    pub total_contributed: String,
    pub total_rake_contributed: String,
    pub total_won: String,
    pub vpip: bool,
    pub went_to_showdown: bool,
}

/// The result of analyzing one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandHistoryStats {
    pub hand: HandStats,
    /// Keyed by player name, restricted to the visible players.
    pub players: BTreeMap<String, PlayerStats>,
}

impl HandHistoryStats {
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, crate::errors::AnalysisError> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String, crate::errors::AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Turns folded decimal state into exported strings.
#[derive(Debug, Clone, Copy)]
pub struct StatsExporter<'a> {
    rounding: &'a RoundingPolicy,
    currency: Option<&'a str>,
}

impl<'a> StatsExporter<'a> {
    pub fn new(rounding: &'a RoundingPolicy, currency: Option<&'a str>) -> Self {
        Self { rounding, currency }
    }

    pub fn money(&self, amount: Decimal) -> String {
        self.rounding.apply(amount, self.currency).to_string()
    }

    pub fn hand(&self, hand: &HandState) -> HandStats {
        HandStats {
            total_pot: self.money(hand.total_pot),
            total_rake: self.money(hand.total_rake),
        }
    }

    pub fn player(&self, player: PlayerState) -> PlayerStats {
        PlayerStats {
            aggressive_action_count: player.aggressive_action_count,
            total_action_count: player.total_action_count,
            total_awarded: self.money(player.total_awarded),
            total_contributed: self.money(player.total_contributed),
            total_rake_contributed: self.money(player.total_rake_contributed),
            total_won: self.money(player.total_won),
            vpip: player.vpip,
            went_to_showdown: player.went_to_showdown,
            streets: player.streets,
        }
    }

    /// Export a finalized state, keeping only the players `visibility`
    /// allows.
    pub fn export(
        &self,
        state: State,
        players: &[Player],
        visibility: Visibility,
    ) -> HandHistoryStats {
        let hand = self.hand(&state.hand);
        let all: BTreeMap<String, PlayerStats> = state
            .players
            .into_iter()
            .map(|(name, player)| (name, self.player(player)))
            .collect();
        HandHistoryStats {
            hand,
            players: visible_players(all, players, visibility),
        }
    }
}
