use rust_decimal::Decimal;

use super::street::Street;

/// A new betting round has started and its community cards were dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DealBoardPayload {
    pub street: Street,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cards: Vec<String>,
}

/// Hole cards dealt to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DealHandPayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cards: Vec<String>,
}

/// A forced bet: blind, ante or straddle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct PostPayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub amount: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub post_type: Option<String>,
}

/// A bet or a call. `amount` is the chips added by this action alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct WagerPayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub amount: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_all_in: bool,
}

/// A raise. `amount` is the chips added by this action; `total_bet` is the
/// player's total wager on the street after raising.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct RaisePayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub amount: Decimal,
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::serde_utils::amount::option")
    )]
    pub total_bet: Option<Decimal>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_all_in: bool,
}

/// An action that names a player and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct PlayerPayload {
    pub player_name: String,
}

/// A player showing their cards at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct ShowdownPayload {
    pub player_name: String,
    /// Hand category as ranked by the parser, one pair being 1. Carried
    /// through but not evaluated.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::serde_utils::count::option")
    )]
    pub hand_strength: Option<u32>,
}

/// The uncalled part of a bet handed back to the bettor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct ReturnBetPayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub amount: Decimal,
}

/// Chips paid out of a pot to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct AwardPotPayload {
    pub player_name: String,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub amount: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_side_pot: bool,
}

/// The final board as printed in a hand summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BoardPayload {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cards: Vec<String>,
}

/// Every event a parsed hand history can contain, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Action {
    /// Opens a betting round.
    DealBoard(DealBoardPayload),
    DealHand(DealHandPayload),
    Post(PostPayload),
    Bet(WagerPayload),
    Call(WagerPayload),
    Raise(RaisePayload),
    Check(PlayerPayload),
    Fold(PlayerPayload),
    ReturnBet(ReturnBetPayload),
    /// The player showed their cards at showdown.
    Showdown(ShowdownPayload),
    /// The player reached showdown and discarded without showing.
    Muck(PlayerPayload),
    AwardPot(AwardPotPayload),
    Board(BoardPayload),
}

impl Action {
    pub fn deal_board(street: Street) -> Self {
        Action::DealBoard(DealBoardPayload {
            street,
            cards: Vec::new(),
        })
    }

    pub fn post(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::Post(PostPayload {
            player_name: player_name.into(),
            amount,
            post_type: None,
        })
    }

    pub fn bet(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::Bet(WagerPayload {
            player_name: player_name.into(),
            amount,
            is_all_in: false,
        })
    }

    pub fn call(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::Call(WagerPayload {
            player_name: player_name.into(),
            amount,
            is_all_in: false,
        })
    }

    pub fn raise(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::Raise(RaisePayload {
            player_name: player_name.into(),
            amount,
            total_bet: None,
            is_all_in: false,
        })
    }

    pub fn check(player_name: impl Into<String>) -> Self {
        Action::Check(PlayerPayload {
            player_name: player_name.into(),
        })
    }

    pub fn fold(player_name: impl Into<String>) -> Self {
        Action::Fold(PlayerPayload {
            player_name: player_name.into(),
        })
    }

    pub fn return_bet(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::ReturnBet(ReturnBetPayload {
            player_name: player_name.into(),
            amount,
        })
    }

    pub fn showdown(player_name: impl Into<String>) -> Self {
        Action::Showdown(ShowdownPayload {
            player_name: player_name.into(),
            hand_strength: None,
        })
    }

    pub fn muck(player_name: impl Into<String>) -> Self {
        Action::Muck(PlayerPayload {
            player_name: player_name.into(),
        })
    }

    pub fn award_pot(player_name: impl Into<String>, amount: Decimal) -> Self {
        Action::AwardPot(AwardPotPayload {
            player_name: player_name.into(),
            amount,
            is_side_pot: false,
        })
    }

    /// The player this action belongs to, if any.
    pub fn player_name(&self) -> Option<&str> {
        match self {
            Action::DealBoard(_) | Action::Board(_) => None,
            Action::DealHand(p) => Some(&p.player_name),
            Action::Post(p) => Some(&p.player_name),
            Action::Bet(p) | Action::Call(p) => Some(&p.player_name),
            Action::Raise(p) => Some(&p.player_name),
            Action::Check(p) | Action::Fold(p) | Action::Muck(p) => Some(&p.player_name),
            Action::Showdown(p) => Some(&p.player_name),
            Action::ReturnBet(p) => Some(&p.player_name),
            Action::AwardPot(p) => Some(&p.player_name),
        }
    }

    /// The chip amount carried by the action, if any.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Action::Post(p) => Some(p.amount),
            Action::Bet(p) | Action::Call(p) => Some(p.amount),
            Action::Raise(p) => Some(p.amount),
            Action::ReturnBet(p) => Some(p.amount),
            Action::AwardPot(p) => Some(p.amount),
            Action::DealBoard(_)
            | Action::DealHand(_)
            | Action::Check(_)
            | Action::Fold(_)
            | Action::Showdown(_)
            | Action::Muck(_)
            | Action::Board(_) => None,
        }
    }

    /// Bets, calls and raises: the actions that make a hand count toward VPIP.
    pub fn is_vpip(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Call(_) | Action::Raise(_))
    }

    /// Actions that move chips from a player into the pot.
    pub fn is_pot_contribution(&self) -> bool {
        matches!(self, Action::Post(_)) || self.is_vpip()
    }

    /// Actions that a player takes or receives, as opposed to dealer events.
    /// Dealt hole cards are not counted.
    pub fn is_player_action(&self) -> bool {
        !matches!(
            self,
            Action::DealBoard(_) | Action::DealHand(_) | Action::Board(_)
        )
    }

    /// The wire name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::DealBoard(_) => "deal-board",
            Action::DealHand(_) => "deal-hand",
            Action::Post(_) => "post",
            Action::Bet(_) => "bet",
            Action::Call(_) => "call",
            Action::Raise(_) => "raise",
            Action::Check(_) => "check",
            Action::Fold(_) => "fold",
            Action::ReturnBet(_) => "return-bet",
            Action::Showdown(_) => "showdown",
            Action::Muck(_) => "muck",
            Action::AwardPot(_) => "award-pot",
            Action::Board(_) => "board",
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_vpip_classification() {
        assert!(Action::bet("a", dec!(1)).is_vpip());
        assert!(Action::call("a", dec!(1)).is_vpip());
        assert!(Action::raise("a", dec!(1)).is_vpip());
        assert!(!Action::post("a", dec!(1)).is_vpip());
        assert!(!Action::check("a").is_vpip());
        assert!(!Action::fold("a").is_vpip());
    }

    #[test]
    fn test_post_contributes_but_is_not_vpip() {
        let post = Action::post("a", dec!(0.5));
        assert!(post.is_pot_contribution());
        assert!(!Action::return_bet("a", dec!(1)).is_pot_contribution());
        assert!(!Action::award_pot("a", dec!(1)).is_pot_contribution());
    }

    #[test]
    fn test_player_and_amount_accessors() {
        let award = Action::award_pot("Mike", dec!(56.9));
        assert_eq!(award.player_name(), Some("Mike"));
        assert_eq!(award.amount(), Some(dec!(56.9)));

        let deal = Action::deal_board(Street::Flop);
        assert_eq!(deal.player_name(), None);
        assert_eq!(deal.amount(), None);
        assert!(!deal.is_player_action());
        assert!(Action::muck("Carl").is_player_action());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parser_json_shape() {
        let json = r#"[
            {"type": "deal-board", "street": "preflop", "cards": []},
            {"type": "post", "postType": "blind", "playerName": "Carl", "amount": "0.5"},
            {"type": "deal-hand", "playerName": "Carl", "cards": ["As", "Qd"]},
            {"type": "raise", "playerName": "Mike", "amount": "9", "totalBet": "10", "isAllIn": false},
            {"type": "call", "playerName": "Carl", "amount": 9.95, "isAllIn": true},
            {"type": "return-bet", "playerName": "Mike", "amount": "10.05"},
            {"type": "showdown", "playerName": "Mike", "handStrength": 2},
            {"type": "award-pot", "playerName": "Mike", "amount": "56.9", "isSidePot": false}
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(json).unwrap();

        assert_eq!(actions.len(), 8);
        assert_eq!(actions[0], Action::deal_board(Street::Preflop));
        assert_eq!(actions[1].kind(), "post");
        match &actions[3] {
            Action::Raise(raise) => {
                assert_eq!(raise.amount, dec!(9));
                assert_eq!(raise.total_bet, Some(dec!(10)));
            }
            other => panic!("Expected raise, got {:?}", other),
        }
        match &actions[4] {
            Action::Call(call) => {
                assert_eq!(call.amount, dec!(9.95));
                assert!(call.is_all_in);
            }
            other => panic!("Expected call, got {:?}", other),
        }
        match &actions[6] {
            Action::Showdown(showdown) => {
                assert_eq!(showdown.player_name, "Mike");
                assert_eq!(showdown.hand_strength, Some(2));
            }
            other => panic!("Expected showdown, got {:?}", other),
        }
        assert_eq!(actions[7].amount(), Some(dec!(56.9)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Action, _> =
            serde_json::from_str(r#"{"type": "straddle", "playerName": "a"}"#);
        assert!(result.is_err());
    }
}
