use crate::errors::AnalysisError;
use crate::hand_history::Street;

use super::rounding::RoundingPolicy;

/// `Decimal` cannot represent more fractional digits than this.
const MAX_DECIMAL_PLACES: u32 = 28;

/// Configuration for [`HandAnalyzer`](super::HandAnalyzer).
///
/// The defaults reproduce the usual tracker conventions: folds are not
/// counted as actions, blinds do not count as the preflop opening bet,
/// Bovada opponents are anonymous, and money is exported at two decimal
/// places.
///
/// With the `serde` feature the configuration can be loaded from JSON. Any
/// missing field takes its default:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use hand_stats::analysis::AnalyzerConfig;
///
/// let config = AnalyzerConfig::from_json(r#"{"fold_counts_as_action": true}"#).unwrap();
/// assert!(config.fold_counts_as_action);
/// assert_eq!(config.anonymous_sites, vec!["bovada".to_string()]);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyzerConfig {
    /// Count folds toward `total_action_count`.
    pub fold_counts_as_action: bool,
    /// Seed the preflop raise counter at 1 so that the first preflop raise
    /// is recorded as level 2.
    pub blinds_open_preflop: bool,
    /// Sites (case-insensitive) where every opponent is anonymous. Only
    /// consulted when a hand does not say so itself.
    pub anonymous_sites: Vec<String>,
    /// Rounding applied to exported money.
    pub rounding: RoundingPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fold_counts_as_action: false,
            blinds_open_preflop: false,
            anonymous_sites: vec!["bovada".to_string()],
            rounding: RoundingPolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.rounding.max_places() > MAX_DECIMAL_PLACES {
            return Err(AnalysisError::InvalidConfig(format!(
                "rounding precision {} exceeds {} decimal places",
                self.rounding.max_places(),
                MAX_DECIMAL_PLACES
            )));
        }

        if self.anonymous_sites.iter().any(|s| s.trim().is_empty()) {
            return Err(AnalysisError::InvalidConfig(
                "anonymous_sites cannot contain empty names".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether opponents on `site` are hidden from the output.
    pub fn is_anonymous_site(&self, site: Option<&str>) -> bool {
        site.is_some_and(|site| {
            self.anonymous_sites
                .iter()
                .any(|s| s.eq_ignore_ascii_case(site.trim()))
        })
    }

    /// Value of the raise counter at the start of `street`.
    pub(crate) fn opening_raise_count(&self, street: Street) -> u32 {
        match street {
            Street::Preflop if self.blinds_open_preflop => 1,
            _ => 0,
        }
    }
}
