use rust_decimal::Decimal;

use crate::errors::AnalysisError;

/// A seated player as reported by the hand history parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    /// Unique within a hand; actions refer to players by this name.
    pub name: String,
    pub seat_number: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<String>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::amount"))]
    pub chip_stack: Decimal,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hero: bool,
    /// Set when the site hides this player's identity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_anonymous: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, seat_number: u32, chip_stack: Decimal) -> Self {
        Self {
            name: name.into(),
            seat_number,
            position: None,
            chip_stack,
            is_hero: false,
            is_anonymous: false,
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn hero(mut self) -> Self {
        self.is_hero = true;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }
}

/// Return the single hero of a roster.
///
/// Zero or several heroes is a validation failure.
pub fn find_hero(players: &[Player]) -> Result<&Player, AnalysisError> {
    let mut heroes = players.iter().filter(|p| p.is_hero);
    match (heroes.next(), heroes.next()) {
        (Some(hero), None) => Ok(hero),
        (None, _) => Err(AnalysisError::InvalidHeroCount { count: 0 }),
        (Some(_), Some(_)) => Err(AnalysisError::InvalidHeroCount {
            count: 2 + heroes.count(),
        }),
    }
}
