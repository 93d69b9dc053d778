//! Rationale text
//!
//! Turns a final score and its contributions into the one-line explanation
//! shown next to a suggestion.

use serde::Serialize;

use super::factors::Contribution;

/// Qualitative band for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl MatchTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            MatchTier::Excellent
        } else if score >= 50.0 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent match",
            MatchTier::Good => "Good match",
            MatchTier::Fair => "Fair match",
        }
    }
}

const GENERAL_REASON: &str = "General match";

/// Dominant reason: the first factor (in priority order) that added points,
/// otherwise the first factor that said anything at all.
pub fn dominant_reason(contributions: &[Contribution]) -> &str {
    contributions
        .iter()
        .find(|c| c.is_positive())
        .or_else(|| contributions.first())
        .map(|c| c.reason.as_str())
        .unwrap_or(GENERAL_REASON)
}

pub fn build_rationale(score: f64, contributions: &[Contribution]) -> String {
    format!(
        "{}: {}",
        MatchTier::from_score(score).display_text(),
        dominant_reason(contributions)
    )
}
