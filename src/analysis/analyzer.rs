use tracing::{debug, instrument};

use crate::errors::AnalysisError;
use crate::hand_history::HandHistory;

use super::aggregates::calculate_aggregates;
use super::config::AnalyzerConfig;
use super::export::{HandHistoryStats, StatsExporter};
use super::reducer::ActionReducer;
use super::state::State;
use super::summary::PlayerSummary;
use super::visibility::Visibility;

/// Computes statistics for single hands.
///
/// # Example
///
/// ```
/// use hand_stats::analysis::HandAnalyzer;
/// use hand_stats::hand_history::{Action, HandHistory, HandInfo, Player};
/// use rust_decimal::Decimal;
///
/// let players = vec![
///     Player::new("Hero", 1, Decimal::from(100)).hero(),
///     Player::new("Villain", 2, Decimal::from(100)),
/// ];
/// let actions = vec![
///     Action::post("Villain", Decimal::ONE),
///     Action::raise("Hero", Decimal::from(3)),
///     Action::fold("Villain"),
///     Action::return_bet("Hero", Decimal::from(2)),
///     Action::award_pot("Hero", Decimal::from(2)),
/// ];
/// let hand = HandHistory::new(HandInfo::default(), players, actions);
///
/// let stats = HandAnalyzer::default().analyze(&hand).unwrap();
/// assert_eq!(stats.hand.total_pot, "2");
/// assert_eq!(stats.players["Hero"].total_won, "1");
/// assert_eq!(stats.players["Villain"].total_won, "-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandAnalyzer {
    config: AnalyzerConfig,
}

impl HandAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fold every action and run the aggregate pass, without validating the
    /// roster or projecting anything away.
    pub fn final_state(&self, hand: &HandHistory) -> State {
        let reducer = ActionReducer::new(&self.config);
        let state = reducer.fold(reducer.initial_state(&hand.players), &hand.actions);
        calculate_aggregates(state)
    }

    /// Analyze a hand and export the stats of the players it may report.
    ///
    /// Fails before any action is folded if the roster does not have exactly
    /// one hero.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            hand_number = hand.info.hand_number.as_deref(),
            site = hand.info.site.as_deref(),
        )
    )]
    pub fn analyze(&self, hand: &HandHistory) -> Result<HandHistoryStats, AnalysisError> {
        let hero = hand.hero()?;
        let visibility = Visibility::for_hand(&hand.info, &self.config);
        debug!(
            hero = %hero.name,
            ?visibility,
            players = hand.players.len(),
            actions = hand.actions.len(),
            "Analyzing hand"
        );

        let state = self.final_state(hand);
        let exporter = StatsExporter::new(&self.config.rounding, hand.info.currency.as_deref());
        Ok(exporter.export(state, &hand.players, visibility))
    }

    /// Stats for one named player, taken from the full-hand fold.
    ///
    /// Visibility rules do not apply because the caller asked for the
    /// player by name, but the roster must still have exactly one hero.
    pub fn player_summary(
        &self,
        hand: &HandHistory,
        player_name: &str,
    ) -> Result<PlayerSummary, AnalysisError> {
        hand.hero()?;
        if hand.player(player_name).is_none() {
            return Err(AnalysisError::PlayerNotFound(player_name.to_string()));
        }

        let mut state = self.final_state(hand);
        let exporter = StatsExporter::new(&self.config.rounding, hand.info.currency.as_deref());
        let hand_stats = exporter.hand(&state.hand);
        let player = state
            .players
            .remove(player_name)
            .ok_or_else(|| AnalysisError::PlayerNotFound(player_name.to_string()))?;
        Ok(PlayerSummary::from_export(
            hand_stats,
            exporter.player(player),
        ))
    }
}

/// Analyze a hand with the default configuration.
pub fn analyze_hand(hand: &HandHistory) -> Result<HandHistoryStats, AnalysisError> {
    HandAnalyzer::default().analyze(hand)
}
