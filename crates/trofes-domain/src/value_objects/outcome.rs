//! Recommendation outcomes
//!
//! Expected edge cases (nothing to recommend from, filters removing every
//! candidate) are outcome variants rather than errors.

use super::ids::ClusterId;
use serde::{Deserialize, Serialize};

/// Successful liked-recipes recommendation with diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecommendation {
    /// Strategy label
    pub strategy: String,
    /// Cluster judged most representative of the user's likes
    pub dominant_cluster: ClusterId,
    /// Liked recipe used as the similarity reference, in caller numbering
    pub anchor_id: i64,
    /// Recommended ids in caller numbering, in randomized order
    pub recommended_ids: Vec<i64>,
}

/// Outcome of the liked-recipes path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LikedOutcome {
    /// Recommendations were produced
    Recommended(LikedRecommendation),
    /// None of the liked ids is known to the model
    Empty,
}

impl LikedOutcome {
    /// Recommended ids, empty for [`LikedOutcome::Empty`]
    pub fn recommended_ids(&self) -> &[i64] {
        match self {
            Self::Recommended(rec) => &rec.recommended_ids,
            Self::Empty => &[],
        }
    }
}

/// Outcome of the calculator path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MacroOutcome {
    /// Sampled ids in caller numbering
    Recommended(Vec<i64>),
    /// Allergy/diet constraints eliminated every candidate
    NoMatch,
}

impl MacroOutcome {
    /// Recommended ids, empty for [`MacroOutcome::NoMatch`]
    pub fn recommended_ids(&self) -> &[i64] {
        match self {
            Self::Recommended(ids) => ids,
            Self::NoMatch => &[],
        }
    }
}
