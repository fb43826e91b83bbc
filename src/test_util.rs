//! Hand histories and assertions shared by tests, benches and fuzz targets.
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::analysis::State;
use crate::hand_history::{
    Action, DealHandPayload, HandHistory, HandInfo, Player, RaisePayload, ShowdownPayload, Street,
    WagerPayload,
};

/// A three handed no-limit hand from Bovada with a 0.50 rake.
///
/// John raises from the button and folds to Mike's re-raise. Carl calls
/// down and is all in on the turn, and Mike takes the 56.90 pot.
pub fn three_player_hand() -> HandHistory {
    let cents = |value: i64| Decimal::new(value, 2);

    let info = HandInfo {
        hand_number: Some("3412705528".to_string()),
        site: Some("bovada".to_string()),
        currency: Some("USD".to_string()),
        game: Some("holdem".to_string()),
        limit: Some("no-limit".to_string()),
        blinds: vec![cents(50), cents(100)],
        ..Default::default()
    };
    let players = vec![
        Player::new("John", 1, cents(4950)).with_position("BTN"),
        Player::new("Carl", 2, cents(2745)).with_position("SB"),
        Player::new("Mike", 3, cents(8725)).with_position("BB").hero(),
    ];

    let deal_hand = |name: &str, cards: [&str; 2]| {
        Action::DealHand(DealHandPayload {
            player_name: name.to_string(),
            cards: cards.iter().map(|c| c.to_string()).collect(),
        })
    };

    let actions = vec![
        Action::deal_board(Street::Preflop),
        Action::post("Carl", cents(50)),
        Action::post("Mike", cents(100)),
        deal_hand("John", ["Ah", "2h"]),
        deal_hand("Carl", ["Ks", "Qs"]),
        deal_hand("Mike", ["Jd", "Jc"]),
        Action::raise("John", cents(250)),
        Action::call("Carl", cents(200)),
        Action::Raise(RaisePayload {
            player_name: "Mike".to_string(),
            amount: cents(900),
            total_bet: Some(cents(1000)),
            is_all_in: false,
        }),
        Action::fold("John"),
        Action::call("Carl", cents(750)),
        Action::deal_board(Street::Flop),
        Action::check("Carl"),
        Action::bet("Mike", cents(750)),
        Action::call("Carl", cents(750)),
        Action::deal_board(Street::Turn),
        Action::check("Carl"),
        Action::bet("Mike", cents(2000)),
        Action::Call(WagerPayload {
            player_name: "Carl".to_string(),
            amount: cents(995),
            is_all_in: true,
        }),
        Action::return_bet("Mike", cents(1005)),
        Action::deal_board(Street::River),
        Action::Showdown(ShowdownPayload {
            player_name: "Mike".to_string(),
            hand_strength: Some(1),
        }),
        Action::muck("Carl"),
        Action::award_pot("Mike", cents(5690)),
    ];

    HandHistory::new(info, players, actions)
}

/// Move the hero flag to `name`.
pub fn make_hero(mut hand: HandHistory, name: &str) -> HandHistory {
    for player in hand.players.iter_mut() {
        player.is_hero = player.name == name;
    }
    hand
}

/// Generate a hand with `num_players` players whose chip movements are
/// internally consistent: refunds never exceed what was put in and awards
/// never exceed the pot. Most hands take a small rake, some award nothing.
pub fn random_hand_history<R: Rng>(rng: &mut R, num_players: usize) -> HandHistory {
    let num_players = num_players.max(2);
    let hero_idx = rng.gen_range(0..num_players);
    let players: Vec<Player> = (0..num_players)
        .map(|idx| {
            let player = Player::new(
                format!("player_{idx}"),
                idx as u32 + 1,
                Decimal::new(rng.gen_range(100..=50_000), 2),
            );
            if idx == hero_idx {
                player.hero()
            } else {
                player
            }
        })
        .collect();

    let mut contributed = vec![Decimal::ZERO; num_players];
    let mut active: Vec<usize> = (0..num_players).collect();
    let mut actions = vec![
        Action::deal_board(Street::Preflop),
        Action::post(players[0].name.clone(), Decimal::new(50, 2)),
        Action::post(players[1].name.clone(), Decimal::ONE),
    ];
    contributed[0] += Decimal::new(50, 2);
    contributed[1] += Decimal::ONE;

    for street in Street::ALL {
        if street != Street::Preflop {
            actions.push(Action::deal_board(street));
        }
        for idx in active.clone() {
            let name = players[idx].name.clone();
            let amount = Decimal::new(rng.gen_range(1..=2_000), 2);
            match rng.gen_range(0..5) {
                0 => actions.push(Action::check(name)),
                1 => {
                    contributed[idx] += amount;
                    actions.push(Action::bet(name, amount));
                }
                2 => {
                    contributed[idx] += amount;
                    actions.push(Action::call(name, amount));
                }
                3 => {
                    contributed[idx] += amount;
                    actions.push(Action::raise(name, amount));
                }
                _ if active.len() > 1 => {
                    active.retain(|&a| a != idx);
                    actions.push(Action::fold(name));
                }
                _ => actions.push(Action::check(name)),
            }
        }
    }

    if rng.gen_bool(0.3) {
        let idx = active[rng.gen_range(0..active.len())];
        let refund = Decimal::new(rng.gen_range(1..=500), 2).min(contributed[idx]);
        if !refund.is_zero() {
            contributed[idx] -= refund;
            actions.push(Action::return_bet(players[idx].name.clone(), refund));
        }
    }

    if active.len() > 1 {
        for (n, &idx) in active.iter().enumerate() {
            let name = players[idx].name.clone();
            if n == 0 || rng.gen_bool(0.5) {
                actions.push(Action::showdown(name));
            } else {
                actions.push(Action::muck(name));
            }
        }
    }

    let pot: Decimal = contributed.iter().copied().sum();
    if rng.gen_bool(0.9) {
        let rake = (pot * Decimal::new(5, 2))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
            .min(Decimal::from(3));
        let mut remaining = pot - rake;
        let winners = rng.gen_range(1..=active.len().min(2));
        for (n, &idx) in active.iter().take(winners).enumerate() {
            let share = if n + 1 == winners {
                remaining
            } else {
                (remaining / Decimal::from(winners as u32))
                    .round_dp_with_strategy(2, RoundingStrategy::ToZero)
            };
            remaining -= share;
            actions.push(Action::award_pot(players[idx].name.clone(), share));
        }
    }

    let info = HandInfo {
        hand_number: Some(rng.gen_range(1_000_000u64..10_000_000).to_string()),
        site: Some(if rng.gen_bool(0.5) { "bovada" } else { "pokerstars" }.to_string()),
        currency: Some("USD".to_string()),
        blinds: vec![Decimal::new(50, 2), Decimal::ONE],
        ..Default::default()
    };
    HandHistory::new(info, players, actions)
}

/// Assert that a finalized state balances: every chip in the pot was either
/// awarded or raked, and each player's result is awarded minus contributed.
pub fn assert_valid_state(state: &State) {
    assert_eq!(
        state.hand.total_pot,
        state.total_awarded() + state.hand.total_rake,
        "pot must equal awards plus rake"
    );
    assert_eq!(
        state.total_won(),
        -state.hand.total_rake,
        "net winnings must equal minus the rake"
    );
    for (name, player) in &state.players {
        assert_eq!(
            player.total_won,
            player.total_awarded - player.total_contributed,
            "{name} has an unbalanced result"
        );
        assert!(
            player.aggressive_action_count <= player.total_action_count,
            "{name} has more aggressive actions than actions"
        );
    }
}
