use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::state::State;

/// Derive the hand-wide figures that need the fully folded state.
///
/// Rake is whatever stayed in the pot after every award:
/// `total_rake = total_pot - sum(total_awarded)`. Each player is charged a
/// share of it proportional to what they were awarded. A hand with nothing
/// awarded charges everyone zero.
///
/// Only `total_pot` and the players' `total_awarded` are read, and only
/// `total_rake` and `total_rake_contributed` are written, so running this
/// twice gives the same state as running it once.
pub fn calculate_aggregates(mut state: State) -> State {
    let total_awarded = state.total_awarded();
    let total_rake = state
        .hand
        .total_pot
        .checked_sub(total_awarded)
        .unwrap_or_else(|| {
            warn!(total_pot = %state.hand.total_pot, %total_awarded, "Rake overflowed, using zero");
            Decimal::ZERO
        });

    if total_awarded.is_zero() {
        warn!("No chips were awarded; rake is not attributed to any player");
    }

    for player in state.players.values_mut() {
        player.total_rake_contributed = rake_share(total_rake, player.total_awarded, total_awarded);
    }
    state.hand.total_rake = total_rake;

    debug!(
        total_pot = %state.hand.total_pot,
        total_rake = %total_rake,
        %total_awarded,
        "Calculated aggregates"
    );
    state
}

/// `total_rake * awarded / total_awarded`, multiplied first to keep as many
/// digits as possible. Zero when nothing was awarded or the product does not
/// fit.
fn rake_share(total_rake: Decimal, awarded: Decimal, total_awarded: Decimal) -> Decimal {
    if total_awarded.is_zero() {
        return Decimal::ZERO;
    }
    total_rake
        .checked_mul(awarded)
        .and_then(|product| product.checked_div(total_awarded))
        .unwrap_or_else(|| {
            warn!(%total_rake, %awarded, %total_awarded, "Rake share overflowed, using zero");
            Decimal::ZERO
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::analysis::state::PlayerState;

    use super::*;

    fn state_with(pot: Decimal, awards: &[(&str, Decimal)]) -> State {
        let mut state = State::default();
        state.hand.total_pot = pot;
        for (name, awarded) in awards {
            let player = PlayerState {
                total_awarded: *awarded,
                total_won: *awarded,
                ..Default::default()
            };
            state.players.insert(name.to_string(), player);
        }
        state
    }

    #[test]
    fn test_single_winner_takes_all_rake() {
        let state = calculate_aggregates(state_with(
            dec!(57.4),
            &[("Mike", dec!(56.9)), ("Carl", dec!(0)), ("John", dec!(0))],
        ));

        assert_eq!(state.hand.total_rake, dec!(0.5));
        assert_eq!(state.player("Mike").unwrap().total_rake_contributed, dec!(0.5));
        assert_eq!(state.player("Carl").unwrap().total_rake_contributed, dec!(0));
        assert_eq!(state.player("John").unwrap().total_rake_contributed, dec!(0));
    }

    #[test]
    fn test_split_pot_shares_rake() {
        let state = calculate_aggregates(state_with(
            dec!(21),
            &[("a", dec!(10)), ("b", dec!(10))],
        ));

        assert_eq!(state.hand.total_rake, dec!(1));
        assert_eq!(state.player("a").unwrap().total_rake_contributed, dec!(0.5));
        assert_eq!(state.player("b").unwrap().total_rake_contributed, dec!(0.5));
        assert_eq!(state.total_rake_contributed(), state.hand.total_rake);
    }

    #[test]
    fn test_uneven_split_is_close_to_total() {
        let state = calculate_aggregates(state_with(
            dec!(3.5),
            &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))],
        ));

        let difference = (state.total_rake_contributed() - state.hand.total_rake).abs();
        assert!(difference < dec!(0.000000000001));
    }

    #[test]
    fn test_no_awards_yields_zero_shares() {
        let state = calculate_aggregates(state_with(dec!(3), &[("a", dec!(0)), ("b", dec!(0))]));

        assert_eq!(state.hand.total_rake, dec!(3));
        for player in state.players.values() {
            assert_eq!(player.total_rake_contributed, Decimal::ZERO);
        }
    }

    #[test]
    fn test_rake_free_hand() {
        let state = calculate_aggregates(state_with(dec!(10), &[("a", dec!(10))]));
        assert_eq!(state.hand.total_rake, Decimal::ZERO);
        assert_eq!(state.player("a").unwrap().total_rake_contributed, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let once = calculate_aggregates(state_with(
            dec!(30.3),
            &[("a", dec!(20)), ("b", dec!(10))],
        ));
        let twice = calculate_aggregates(once.clone());
        assert_eq!(once, twice);
    }
}
