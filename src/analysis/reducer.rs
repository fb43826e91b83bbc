use rust_decimal::Decimal;
use tracing::{trace, warn};

use crate::hand_history::{
    Action, AwardPotPayload, DealBoardPayload, Player, PlayerPayload, PostPayload, RaisePayload,
    ReturnBetPayload, Street, WagerPayload,
};

use super::config::AnalyzerConfig;
use super::state::{PlayerState, State, accumulate};

/// Folds a hand's actions into a [`State`], one action at a time.
///
/// Each action is applied in the order given. Raise levels depend on that
/// order, so the actions must never be reordered or batched.
///
/// An action naming a player who is not on the roster still moves the pot
/// but changes no player totals.
#[derive(Debug, Clone, Copy)]
pub struct ActionReducer<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> ActionReducer<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn initial_state(&self, players: &[Player]) -> State {
        State::new(players, self.config.opening_raise_count(Street::Preflop))
    }

    pub fn fold<'b>(&self, state: State, actions: impl IntoIterator<Item = &'b Action>) -> State {
        actions
            .into_iter()
            .fold(state, |state, action| self.apply(state, action))
    }

    /// Apply one action and return the next state.
    pub fn apply(&self, mut state: State, action: &Action) -> State {
        trace!(
            kind = action.kind(),
            player = action.player_name(),
            street = %state.current_street,
            "Applying action"
        );
        match action {
            Action::DealBoard(payload) => self.apply_deal_board(&mut state, payload),
            Action::Post(payload) => self.apply_post(&mut state, payload),
            Action::Bet(payload) => self.apply_bet(&mut state, payload),
            Action::Call(payload) => self.apply_call(&mut state, payload),
            Action::Raise(payload) => self.apply_raise(&mut state, payload),
            Action::Check(payload) => self.apply_check(&mut state, payload),
            Action::Fold(payload) => self.apply_fold(&mut state, payload),
            Action::ReturnBet(payload) => self.apply_return_bet(&mut state, payload),
            Action::Showdown(payload) => self.apply_showdown(&mut state, &payload.player_name),
            Action::Muck(payload) => self.apply_showdown(&mut state, &payload.player_name),
            Action::AwardPot(payload) => self.apply_award_pot(&mut state, payload),
            Action::DealHand(_) | Action::Board(_) => {}
        }
        state
    }

    fn apply_deal_board(&self, state: &mut State, payload: &DealBoardPayload) {
        state.current_street = payload.street;
        state.current_street_raise_count = self.config.opening_raise_count(payload.street);
    }

    fn apply_post(&self, state: &mut State, payload: &PostPayload) {
        accumulate(&mut state.hand.total_pot, payload.amount);
        update_player(state, &payload.player_name, |player| {
            player.contribute(payload.amount);
        });
    }

    fn apply_bet(&self, state: &mut State, payload: &WagerPayload) {
        let street = state.current_street;
        add_voluntary(state, &payload.player_name, payload.amount, |player| {
            player.aggressive_action_count += 1;
            player.street_mut(street).bet_count += 1;
        });
    }

    fn apply_call(&self, state: &mut State, payload: &WagerPayload) {
        let street = state.current_street;
        add_voluntary(state, &payload.player_name, payload.amount, |player| {
            player.street_mut(street).call_count += 1;
        });
    }

    fn apply_raise(&self, state: &mut State, payload: &RaisePayload) {
        state.current_street_raise_count += 1;
        let street = state.current_street;
        let level = state.current_street_raise_count;
        add_voluntary(state, &payload.player_name, payload.amount, |player| {
            player.aggressive_action_count += 1;
            let stat = player.street_mut(street);
            stat.raise_count += 1;
            *stat.bets.entry(level).or_insert(0) += 1;
        });
    }

    fn apply_check(&self, state: &mut State, payload: &PlayerPayload) {
        let street = state.current_street;
        update_player(state, &payload.player_name, |player| {
            player.total_action_count += 1;
            player.street_mut(street).check_count += 1;
        });
    }

    fn apply_fold(&self, state: &mut State, payload: &PlayerPayload) {
        let street = state.current_street;
        let counts = self.config.fold_counts_as_action;
        update_player(state, &payload.player_name, |player| {
            if counts {
                player.total_action_count += 1;
            }
            player.street_mut(street).fold_count += 1;
        });
    }

    fn apply_return_bet(&self, state: &mut State, payload: &ReturnBetPayload) {
        accumulate(&mut state.hand.total_pot, -payload.amount);
        update_player(state, &payload.player_name, |player| {
            player.refund(payload.amount);
        });
    }

    fn apply_showdown(&self, state: &mut State, player_name: &str) {
        update_player(state, player_name, |player| {
            player.went_to_showdown = true;
        });
    }

    fn apply_award_pot(&self, state: &mut State, payload: &AwardPotPayload) {
        update_player(state, &payload.player_name, |player| {
            player.award(payload.amount);
        });
    }
}

/// Shared effect of bets, calls and raises; `extra` adds the counters that
/// differ between them.
fn add_voluntary(
    state: &mut State,
    player_name: &str,
    amount: Decimal,
    extra: impl FnOnce(&mut PlayerState),
) {
    accumulate(&mut state.hand.total_pot, amount);
    update_player(state, player_name, |player| {
        player.contribute(amount);
        player.total_action_count += 1;
        player.vpip = true;
        extra(player);
    });
}

fn update_player(state: &mut State, player_name: &str, update: impl FnOnce(&mut PlayerState)) {
    match state.players.get_mut(player_name) {
        Some(player) => update(player),
        None => warn!(player_name, "Action references a player missing from the roster"),
    }
}
