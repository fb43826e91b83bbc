//! # Hand analysis
//!
//! Turns a [`HandHistory`](crate::hand_history::HandHistory) into per-hand
//! and per-player statistics in four steps:
//!
//! 1. [`ActionReducer`] folds the actions in order into a [`State`] holding
//!    the pot, each player's contributions and awards, and the per-street
//!    action counters.
//! 2. [`calculate_aggregates`] derives the rake and splits it between the
//!    players in proportion to what they were awarded.
//! 3. [`Visibility`] decides which players may be reported. On anonymous
//!    sites that is only the hero.
//! 4. [`StatsExporter`] rounds the money and renders it as decimal strings.
//!
//! [`HandAnalyzer`] runs all four.
//!
//! ```
//! use hand_stats::analysis::{AnalyzerConfig, HandAnalyzer};
//! use hand_stats::hand_history::{Action, HandHistory, HandInfo, Player};
//! use rust_decimal::Decimal;
//!
//! let info = HandInfo {
//!     site: Some("bovada".to_string()),
//!     ..Default::default()
//! };
//! let players = vec![
//!     Player::new("Hero", 1, Decimal::from(100)).hero(),
//!     Player::new("Villain", 2, Decimal::from(100)),
//! ];
//! let actions = vec![
//!     Action::post("Hero", Decimal::ONE),
//!     Action::call("Villain", Decimal::ONE),
//!     Action::award_pot("Hero", Decimal::new(190, 2)),
//! ];
//!
//! let analyzer = HandAnalyzer::new(AnalyzerConfig::default()).unwrap();
//! let stats = analyzer.analyze(&HandHistory::new(info, players, actions)).unwrap();
//!
//! assert_eq!(stats.hand.total_rake, "0.1");
//! assert_eq!(stats.players.len(), 1);
//! assert_eq!(stats.players["Hero"].total_won, "0.9");
//! ```
mod aggregates;
mod analyzer;
mod config;
mod export;
mod reducer;
mod rounding;
mod state;
mod summary;
mod visibility;

pub use aggregates::calculate_aggregates;
pub use analyzer::{HandAnalyzer, analyze_hand};
pub use config::AnalyzerConfig;
pub use export::{HandHistoryStats, HandStats, PlayerStats, StatsExporter};
pub use reducer::ActionReducer;
pub use rounding::RoundingPolicy;
pub use state::{HandState, PlayerState, State, StreetStat};
pub use summary::PlayerSummary;
pub use visibility::{Visibility, visible_players};
