//! # hand_stats
//!
//! Statistics for parsed poker hand histories.
//!
//! Given a hand's roster and its ordered actions, this crate computes the
//! pot and rake, what each player put in and took out, and the counters
//! trackers build on: VPIP, aggressive actions, showdowns, and per-street
//! bets, calls, checks, folds and raise levels. All money is exact decimal
//! arithmetic with [`rust_decimal`], so `0.1 + 0.2` is `0.3`.
//!
//! - [`hand_history`] models the parsed input.
//! - [`analysis`] folds it into statistics and exports them.
//! - [`errors`] holds the error type.
//!
//! ## Features
//!
//! - `serde` (default): read hand histories and configuration from JSON and
//!   serialize the resulting statistics.
//! - `arbitrary`: derive `Arbitrary` for the input types, used by the fuzz
//!   targets.
//! - `test-util`: sample and randomly generated hand histories.
pub mod analysis;
pub mod errors;
pub mod hand_history;

#[cfg(feature = "serde")]
mod serde_utils;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use analysis::{HandAnalyzer, HandHistoryStats, PlayerSummary, analyze_hand};
pub use errors::AnalysisError;
pub use hand_history::HandHistory;
