use thiserror::Error;

/// Errors surfaced to callers of the analyzer.
///
/// Only roster validation can stop a well-formed hand from being analyzed.
/// Unknown player references and empty award totals are absorbed by the
/// reducer and aggregate pass instead of being reported here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("hand histories must involve exactly one hero, found {count}")]
    InvalidHeroCount { count: usize },

    #[error("player not found in roster: {0}")]
    PlayerNotFound(String),

    #[error("invalid decimal amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid analyzer configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// True for failures caused by the roster or action list rather than by
    /// configuration or transport.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidHeroCount { .. }
                | AnalysisError::PlayerNotFound(_)
                | AnalysisError::InvalidAmount(_)
        )
    }
}
