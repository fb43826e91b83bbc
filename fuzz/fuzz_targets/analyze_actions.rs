#![no_main]

extern crate arbitrary;
extern crate hand_stats;
extern crate libfuzzer_sys;
extern crate rust_decimal;

use hand_stats::analysis::HandAnalyzer;
use hand_stats::hand_history::{Action, HandHistory, HandInfo, Player, Street};
use hand_stats::test_util::assert_valid_state;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

const NUM_PLAYERS: u8 = 4;

#[derive(Debug, Clone, Copy, arbitrary::Arbitrary)]
enum Kind {
    DealBoard(Street),
    Post,
    Bet,
    Call,
    Raise,
    Check,
    Fold,
    ReturnBet,
    Showdown,
    Muck,
    AwardPot,
}

/// One action against a fixed roster with an amount in cents.
#[derive(Debug, Clone, Copy, arbitrary::Arbitrary)]
struct FuzzAction {
    kind: Kind,
    player: u8,
    cents: u32,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    hero: u8,
    fold_counts_as_action: bool,
    blinds_open_preflop: bool,
    actions: Vec<FuzzAction>,
}

fn player_name(idx: u8) -> String {
    format!("player_{}", idx % NUM_PLAYERS)
}

fn to_action(action: FuzzAction) -> Action {
    let name = player_name(action.player);
    let amount = Decimal::new(i64::from(action.cents), 2);
    match action.kind {
        Kind::DealBoard(street) => Action::deal_board(street),
        Kind::Post => Action::post(name, amount),
        Kind::Bet => Action::bet(name, amount),
        Kind::Call => Action::call(name, amount),
        Kind::Raise => Action::raise(name, amount),
        Kind::Check => Action::check(name),
        Kind::Fold => Action::fold(name),
        Kind::ReturnBet => Action::return_bet(name, amount),
        Kind::Showdown => Action::showdown(name),
        Kind::Muck => Action::muck(name),
        Kind::AwardPot => Action::award_pot(name, amount),
    }
}

fuzz_target!(|input: Input| {
    let hero = input.hero % NUM_PLAYERS;
    let players = (0..NUM_PLAYERS)
        .map(|idx| {
            let player = Player::new(player_name(idx), u32::from(idx) + 1, Decimal::from(100));
            if idx == hero { player.hero() } else { player }
        })
        .collect();
    let actions = input.actions.into_iter().map(to_action).collect();
    let hand = HandHistory::new(HandInfo::default(), players, actions);

    let analyzer = HandAnalyzer::new(hand_stats::analysis::AnalyzerConfig {
        fold_counts_as_action: input.fold_counts_as_action,
        blinds_open_preflop: input.blinds_open_preflop,
        ..Default::default()
    })
    .unwrap();

    assert_valid_state(&analyzer.final_state(&hand));
    let stats = analyzer.analyze(&hand).unwrap();
    assert!(stats.players.contains_key(&player_name(hero)));
});
