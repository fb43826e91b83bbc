//! # Parsed hand histories
//!
//! The input side of the crate: a roster of seated players, some hand-level
//! metadata, and the ordered list of actions that took place. Turning raw
//! site text into these types is the job of an upstream parser; this module
//! only models the result.
//!
//! With the `serde` feature the types read and write the parser's JSON
//! shape. Actions are tagged by a `type` field with kebab-case names and use
//! camelCase keys. Amounts may be given as strings (`"2.5"`) or numbers and
//! are held as exact [`Decimal`] values either way.
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use hand_stats::hand_history::{Action, HandHistory};
//!
//! let json = r#"{
//!     "info": {"site": "bovada", "currency": "USD"},
//!     "players": [
//!         {"name": "Mike", "seatNumber": 1, "chipStack": "87.25", "isHero": true}
//!     ],
//!     "actions": [
//!         {"type": "post", "playerName": "Mike", "amount": "1"}
//!     ]
//! }"#;
//! let hand = HandHistory::from_json(json).unwrap();
//! assert_eq!(hand.hero().unwrap().name, "Mike");
//! assert!(matches!(hand.actions[0], Action::Post(_)));
//! # }
//! ```
mod action;
mod amount;
mod player;
mod street;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

pub use action::*;
pub use amount::parse_amount;
pub use player::{Player, find_hero};
pub use street::Street;

use crate::errors::AnalysisError;

/// Hand-level metadata reported by the parser.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct HandInfo {
    pub hand_number: Option<String>,
    pub site: Option<String>,
    pub currency: Option<String>,
    pub game: Option<String>,
    pub limit: Option<String>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount::list"))]
    pub blinds: Vec<Decimal>,
    pub is_fast_fold: bool,
    /// Explicitly marks the hand's opponents as anonymous. When absent the
    /// analyzer decides from the site name.
    pub anonymous: Option<bool>,
}

/// A single parsed hand.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandHistory {
    #[cfg_attr(feature = "serde", serde(default))]
    pub info: HandInfo,
    pub players: Vec<Player>,
    pub actions: Vec<Action>,
}

impl HandHistory {
    pub fn new(info: HandInfo, players: Vec<Player>, actions: Vec<Action>) -> Self {
        Self {
            info,
            players,
            actions,
        }
    }

    /// The one player flagged as hero. Fails unless exactly one is.
    pub fn hero(&self) -> Result<&Player, AnalysisError> {
        find_hero(&self.players)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Split an action list into betting rounds.
///
/// Actions before the first `deal-board` belong to preflop. A `deal-board`
/// action belongs to the round it opens. Rounds that never started are
/// absent from the map.
pub fn actions_by_street(actions: &[Action]) -> BTreeMap<Street, Vec<&Action>> {
    let mut by_street: BTreeMap<Street, Vec<&Action>> = BTreeMap::new();
    let mut current = Street::Preflop;
    for action in actions {
        if let Action::DealBoard(deal) = action {
            current = deal.street;
        }
        by_street.entry(current).or_default().push(action);
    }
    by_street
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_actions_by_street() {
        let actions = vec![
            Action::post("Carl", dec!(0.5)),
            Action::raise("John", dec!(2.5)),
            Action::deal_board(Street::Flop),
            Action::check("Carl"),
            Action::bet("Mike", dec!(7.5)),
            Action::deal_board(Street::Turn),
            Action::check("Carl"),
        ];

        let by_street = actions_by_street(&actions);

        assert_eq!(by_street[&Street::Preflop].len(), 2);
        assert_eq!(by_street[&Street::Flop].len(), 3);
        assert_eq!(by_street[&Street::Turn].len(), 2);
        assert!(!by_street.contains_key(&Street::River));
        assert_eq!(by_street[&Street::Flop][0], &Action::deal_board(Street::Flop));
    }

    #[test]
    fn test_player_lookup() {
        let hand = HandHistory::new(
            HandInfo::default(),
            vec![Player::new("Mike", 3, dec!(87.25)).hero()],
            Vec::new(),
        );
        assert!(hand.player("Mike").is_some());
        assert!(hand.player("Nobody").is_none());
        assert_eq!(hand.hero().unwrap().seat_number, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_malformed_amount() {
        let json = r#"{
            "players": [{"name": "a", "seatNumber": 1, "chipStack": "10", "isHero": true}],
            "actions": [{"type": "bet", "playerName": "a", "amount": "ten"}]
        }"#;
        assert!(matches!(
            HandHistory::from_json(json),
            Err(AnalysisError::Json(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip_keeps_amount_text() {
        let hand = HandHistory::new(
            HandInfo {
                blinds: vec![dec!(0.5), dec!(1)],
                ..Default::default()
            },
            vec![Player::new("a", 1, dec!(49.50)).hero()],
            vec![Action::call("a", dec!(9.95))],
        );
        let json = hand.to_json().unwrap();
        assert!(json.contains(r#""amount":"9.95""#));
        assert!(json.contains(r#""chipStack":"49.50""#));
        assert_eq!(HandHistory::from_json(&json).unwrap(), hand);
    }
}
