//! Cluster affinity resolution
//!
//! Picks the cluster that best represents a user's likes: the most frequent
//! cluster, with recency breaking ties.

use std::collections::HashMap;
use trofes_domain::error::{Error, Result};
use trofes_domain::value_objects::{ClusterId, LikedItem, RecipeId};

/// Dominant cluster of a chronologically ordered like history
///
/// - every cluster seen once: the cluster of the most recent like
/// - otherwise: among the clusters with the highest count, the one liked most
///   recently
///
/// Fails with `Error::EmptyInput` for an empty history.
pub fn resolve_dominant_cluster(liked: &[LikedItem]) -> Result<ClusterId> {
    let Some(last) = liked.last() else {
        return Err(Error::empty_input("no liked recipes to resolve a cluster from"));
    };

    let mut counts: HashMap<ClusterId, usize> = HashMap::new();
    for item in liked {
        *counts.entry(item.cluster).or_insert(0) += 1;
    }
    let max_freq = counts.values().copied().max().unwrap_or(0);

    if max_freq == 1 {
        return Ok(last.cluster);
    }

    liked
        .iter()
        .rev()
        .map(|item| item.cluster)
        .find(|cluster| counts.get(cluster) == Some(&max_freq))
        .ok_or_else(|| Error::internal("dominant cluster candidate missing from history"))
}

/// Most recently liked item belonging to `cluster`
pub fn select_anchor(liked: &[LikedItem], cluster: ClusterId) -> Option<RecipeId> {
    liked
        .iter()
        .rev()
        .find(|item| item.cluster == cluster)
        .map(|item| item.id)
}
