#![no_main]

extern crate hand_stats;
extern crate libfuzzer_sys;

use hand_stats::analysis::HandAnalyzer;
use hand_stats::hand_history::Action;
use hand_stats::test_util::three_player_hand;
use libfuzzer_sys::fuzz_target;

// Unbounded amounts and unknown player names must never panic.
fuzz_target!(|actions: Vec<Action>| {
    let mut hand = three_player_hand();
    hand.actions = actions;

    let analyzer = HandAnalyzer::default();
    let stats = analyzer.analyze(&hand).unwrap();
    assert_eq!(stats.players.len(), 1);

    // Overflowing amounts are dropped whole, so each result stays balanced.
    for player in analyzer.final_state(&hand).players.values() {
        assert_eq!(
            Some(player.total_won),
            player.total_awarded.checked_sub(player.total_contributed)
        );
    }
});
