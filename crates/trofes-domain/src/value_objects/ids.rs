//! Identifier value objects
//!
//! Internally every recipe is addressed by a 0-based id. Callers may use
//! 1-based ids instead; [`IdConvention`] converts at the boundary.

use serde::{Deserialize, Serialize};

/// Internal 0-based recipe identifier
pub type RecipeId = u64;

/// Cluster label assigned by the offline clustering step
pub type ClusterId = i64;

/// Id numbering used by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdConvention {
    /// Caller ids equal internal ids
    #[default]
    ZeroBased,
    /// Caller ids are internal ids plus one
    OneBased,
}

impl IdConvention {
    /// Pick the convention from the `is_start_from_zero` request flag
    pub fn from_zero_based_flag(zero_based: bool) -> Self {
        if zero_based {
            Self::ZeroBased
        } else {
            Self::OneBased
        }
    }

    /// Convert a caller id to an internal id
    ///
    /// Returns `None` for ids with no internal counterpart (negative after
    /// the shift); such ids are treated like unknown ids.
    pub fn to_internal(self, external: i64) -> Option<RecipeId> {
        let shifted = match self {
            Self::ZeroBased => external,
            Self::OneBased => external.checked_sub(1)?,
        };
        u64::try_from(shifted).ok()
    }

    /// Convert an internal id back to the caller's numbering
    ///
    /// Bundles reject ids above [`crate::constants::MAX_RECIPE_ID`], so the result only
    /// saturates for ids that never come out of a bundle.
    pub fn to_external(self, internal: RecipeId) -> i64 {
        let id = i64::try_from(internal).unwrap_or(i64::MAX);
        match self {
            Self::ZeroBased => id,
            Self::OneBased => id.saturating_add(1),
        }
    }
}

/// A liked recipe resolved against the bundle index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikedItem {
    /// Internal recipe id
    pub id: RecipeId,
    /// Cluster the recipe belongs to
    pub cluster: ClusterId,
}

impl LikedItem {
    /// Pair an id with its cluster
    pub fn new(id: RecipeId, cluster: ClusterId) -> Self {
        Self { id, cluster }
    }
}
