use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

/// How monetary figures are rounded when stats are exported.
///
/// Rounding is half-up (a midpoint moves away from zero) and is never applied
/// to the folded state, only to the exported strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RoundingPolicy {
    /// Export the exact folded values.
    Exact,
    /// Round every currency to the same number of decimal places.
    Fixed {
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::count"))]
        decimal_places: u32,
    },
    /// Round by currency code, falling back to `default_places`.
    PerCurrency {
        #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::count"))]
        default_places: u32,
        #[cfg_attr(
            feature = "serde",
            serde(default, with = "crate::serde_utils::count::map")
        )]
        overrides: HashMap<String, u32>,
    },
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy::Fixed { decimal_places: 2 }
    }
}

impl RoundingPolicy {
    /// Decimal places used for `currency`, or `None` when no rounding applies.
    pub fn decimal_places(&self, currency: Option<&str>) -> Option<u32> {
        match self {
            RoundingPolicy::Exact => None,
            RoundingPolicy::Fixed { decimal_places } => Some(*decimal_places),
            RoundingPolicy::PerCurrency {
                default_places,
                overrides,
            } => Some(
                currency
                    .and_then(|c| overrides.get(c))
                    .copied()
                    .unwrap_or(*default_places),
            ),
        }
    }

    /// Round `amount` and strip trailing zeros so equal values print the
    /// same way regardless of the scale they were accumulated at.
    pub fn apply(&self, amount: Decimal, currency: Option<&str>) -> Decimal {
        let rounded = match self.decimal_places(currency) {
            Some(places) => {
                amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            }
            None => amount,
        };
        rounded.normalize()
    }

    /// Largest precision that may be requested.
    pub(crate) fn max_places(&self) -> u32 {
        match self {
            RoundingPolicy::Exact => 0,
            RoundingPolicy::Fixed { decimal_places } => *decimal_places,
            RoundingPolicy::PerCurrency {
                default_places,
                overrides,
            } => overrides
                .values()
                .copied()
                .fold(*default_places, u32::max),
        }
    }
}
