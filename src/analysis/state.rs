use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::warn;

use crate::hand_history::{Player, Street};

/// Action counters for one player on one betting round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StreetStat {
    pub bet_count: u32,
    pub call_count: u32,
    pub check_count: u32,
    pub fold_count: u32,
    pub raise_count: u32,
    /// Raise level (1 for the first raise of the round, 2 for the re-raise
    /// and so on) to the number of raises this player made at that level.
    pub bets: BTreeMap<u32, u32>,
}

/// Running totals for the whole hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandState {
    /// Chips put in by everyone, less any returned bets.
    pub total_pot: Decimal,
    /// Filled in by the aggregate pass.
    pub total_rake: Decimal,
}

/// Running totals for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Bets and raises.
    pub aggressive_action_count: u32,
    /// Checks, bets, calls and raises, plus folds when configured.
    pub total_action_count: u32,
    pub total_awarded: Decimal,
    pub total_contributed: Decimal,
    /// Filled in by the aggregate pass.
    pub total_rake_contributed: Decimal,
    /// Always `total_awarded - total_contributed`.
    pub total_won: Decimal,
    pub vpip: bool,
    pub went_to_showdown: bool,
    pub streets: BTreeMap<Street, StreetStat>,
}

impl PlayerState {
    pub(crate) fn street_mut(&mut self, street: Street) -> &mut StreetStat {
        self.streets.entry(street).or_default()
    }

    pub(crate) fn contribute(&mut self, amount: Decimal) {
        self.move_chips(amount, Decimal::ZERO);
    }

    pub(crate) fn refund(&mut self, amount: Decimal) {
        self.move_chips(-amount, Decimal::ZERO);
    }

    pub(crate) fn award(&mut self, amount: Decimal) {
        self.move_chips(Decimal::ZERO, amount);
    }

    /// Update the contributed and awarded totals together and derive
    /// `total_won` from them. If any of the three does not fit in a
    /// `Decimal`, none of them change.
    fn move_chips(&mut self, contributed: Decimal, awarded: Decimal) {
        let next = self
            .total_contributed
            .checked_add(contributed)
            .zip(self.total_awarded.checked_add(awarded))
            .and_then(|(c, a)| Some((c, a, a.checked_sub(c)?)));
        match next {
            Some((total_contributed, total_awarded, total_won)) => {
                self.total_contributed = total_contributed;
                self.total_awarded = total_awarded;
                self.total_won = total_won;
            }
            None => warn!(
                %contributed,
                %awarded,
                total_contributed = %self.total_contributed,
                total_awarded = %self.total_awarded,
                "Player totals overflowed, keeping previous totals"
            ),
        }
    }
}

/// Add `delta` to `total`, leaving `total` untouched if the sum would not fit
/// in a `Decimal`.
pub(crate) fn accumulate(total: &mut Decimal, delta: Decimal) {
    match total.checked_add(delta) {
        Some(sum) => *total = sum,
        None => warn!(%total, %delta, "Amount overflowed, keeping previous total"),
    }
}

fn sum_amounts(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |mut total, value| {
        accumulate(&mut total, value);
        total
    })
}

/// Everything accumulated while folding a hand's actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub current_street: Street,
    /// Raises seen so far on `current_street`.
    pub current_street_raise_count: u32,
    pub hand: HandState,
    pub players: HashMap<String, PlayerState>,
}

impl State {
    /// Zeroed state for a roster, positioned at the start of preflop.
    pub fn new(players: &[Player], opening_raise_count: u32) -> Self {
        Self {
            current_street: Street::Preflop,
            current_street_raise_count: opening_raise_count,
            hand: HandState::default(),
            players: players
                .iter()
                .map(|p| (p.name.clone(), PlayerState::default()))
                .collect(),
        }
    }

    pub fn player(&self, name: &str) -> Option<&PlayerState> {
        self.players.get(name)
    }

    pub fn total_awarded(&self) -> Decimal {
        sum_amounts(self.players.values().map(|p| p.total_awarded))
    }

    pub fn total_won(&self) -> Decimal {
        sum_amounts(self.players.values().map(|p| p.total_won))
    }

    pub fn total_rake_contributed(&self) -> Decimal {
        sum_amounts(self.players.values().map(|p| p.total_rake_contributed))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let players = vec![
            Player::new("a", 1, dec!(100)),
            Player::new("b", 2, dec!(100)),
        ];
        let state = State::new(&players, 0);

        assert_eq!(state.current_street, Street::Preflop);
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.player("a"), Some(&PlayerState::default()));
        assert_eq!(state.total_awarded(), Decimal::ZERO);
        assert_eq!(state.hand.total_pot, Decimal::ZERO);
    }

    #[test]
    fn test_money_moves_keep_won_balanced() {
        let mut player = PlayerState::default();
        player.contribute(dec!(20));
        player.refund(dec!(10.05));
        player.award(dec!(56.9));

        assert_eq!(player.total_contributed, dec!(9.95));
        assert_eq!(player.total_awarded, dec!(56.9));
        assert_eq!(
            player.total_won,
            player.total_awarded - player.total_contributed
        );
    }

    #[test]
    fn test_accumulate_ignores_overflow() {
        let mut total = Decimal::MAX;
        accumulate(&mut total, dec!(1));
        assert_eq!(total, Decimal::MAX);

        accumulate(&mut total, dec!(-1));
        assert_eq!(total, Decimal::MAX - dec!(1));
    }

    #[test_log::test]
    fn test_overflowing_move_keeps_won_balanced() {
        let mut player = PlayerState::default();
        player.award(Decimal::MAX);
        player.contribute(dec!(1));
        player.award(dec!(1));

        assert_eq!(player.total_awarded, Decimal::MAX);
        assert_eq!(player.total_contributed, dec!(1));
        assert_eq!(
            player.total_won,
            player.total_awarded - player.total_contributed
        );

        let before = player.clone();
        player.refund(Decimal::MAX);
        assert_eq!(player, before);

        player.contribute(Decimal::MIN);
        assert_eq!(player, before);
    }
}
