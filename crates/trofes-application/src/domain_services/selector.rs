//! Exploit/explore selection for the liked-recipes path
//!
//! A share of `top_k` comes from the dominant cluster (exploitation), the rest
//! from every other cluster (exploration). Both pools are ranked by cosine
//! similarity to the anchor recipe. A pool that runs short is not backfilled
//! from the other one.

use super::similarity::{cosine_similarity, rank_descending};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::debug;
use trofes_domain::constants::{EXPLOIT_RATIO, HYBRID_STRATEGY_PREFIX};
use trofes_domain::entities::ModelBundle;
use trofes_domain::error::{Error, Result};
use trofes_domain::value_objects::{ClusterId, RecipeId};

/// Exploit/explore selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExploitExploreSelector {
    exploit_ratio: f64,
}

impl Default for ExploitExploreSelector {
    fn default() -> Self {
        Self {
            exploit_ratio: EXPLOIT_RATIO,
        }
    }
}

impl ExploitExploreSelector {
    /// Create a selector taking `exploit_ratio` of each result from the
    /// dominant cluster
    pub fn new(exploit_ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&exploit_ratio) {
            return Err(Error::invalid_argument(format!(
                "exploit ratio must be within [0, 1], got {exploit_ratio}"
            )));
        }
        Ok(Self { exploit_ratio })
    }

    /// Share of results taken from the dominant cluster
    pub fn exploit_ratio(&self) -> f64 {
        self.exploit_ratio
    }

    /// Strategy label, e.g. `hybrid_exploration_70_30`
    pub fn strategy(&self) -> String {
        let exploit = (self.exploit_ratio * 100.0).round() as u32;
        format!("{HYBRID_STRATEGY_PREFIX}_{exploit}_{}", 100 - exploit)
    }

    /// Split `top_k` into `(num_main, num_diverse)`
    pub fn split(&self, top_k: usize) -> (usize, usize) {
        let num_main = ((top_k as f64) * self.exploit_ratio).floor() as usize;
        let num_main = num_main.min(top_k);
        (num_main, top_k - num_main)
    }

    /// Select up to `top_k` recipes for a user
    ///
    /// `liked` ids are never returned. The result is shuffled with `rng`, so
    /// only its contents are deterministic.
    pub fn select<R: Rng + ?Sized>(
        &self,
        bundle: &ModelBundle,
        dominant: ClusterId,
        anchor: RecipeId,
        liked: &HashSet<RecipeId>,
        top_k: usize,
        rng: &mut R,
    ) -> Result<Vec<RecipeId>> {
        let (num_main, num_diverse) = self.split(top_k);
        let anchor_vector = bundle.vector(anchor)?;

        let (main_positions, other_positions): (Vec<usize>, Vec<usize>) =
            (0..bundle.len()).partition(|&position| {
                bundle
                    .metadata()
                    .record(position)
                    .is_some_and(|record| record.cluster == dominant)
            });

        let mut selected: Vec<RecipeId> = Vec::with_capacity(top_k);

        if num_main > 0 && !main_positions.is_empty() {
            for id in ranked_ids(bundle, &main_positions, anchor_vector)? {
                if selected.len() >= num_main {
                    break;
                }
                if !liked.contains(&id) {
                    selected.push(id);
                }
            }
        }
        let exploited = selected.len();

        if num_diverse > 0 && !other_positions.is_empty() {
            let mut added = 0;
            for id in ranked_ids(bundle, &other_positions, anchor_vector)? {
                if added >= num_diverse {
                    break;
                }
                if !liked.contains(&id) && !selected.contains(&id) {
                    selected.push(id);
                    added += 1;
                }
            }
        }

        debug!(
            dominant_cluster = dominant,
            anchor,
            num_main,
            num_diverse,
            exploited,
            explored = selected.len() - exploited,
            "Selected liked-recipe recommendations"
        );

        selected.shuffle(rng);
        Ok(selected)
    }
}

/// Recipe ids at `positions`, most similar to `anchor` first
fn ranked_ids(bundle: &ModelBundle, positions: &[usize], anchor: &[f64]) -> Result<Vec<RecipeId>> {
    let rows = bundle.matrix().select_rows(positions)?;
    let scores = cosine_similarity(anchor, &rows)?;
    rank_descending(&scores)
        .into_iter()
        .map(|i| record_id(bundle, positions[i]))
        .collect()
}

pub(crate) fn record_id(bundle: &ModelBundle, position: usize) -> Result<RecipeId> {
    bundle
        .metadata()
        .record(position)
        .map(|r| r.recipe_id)
        .ok_or_else(|| Error::internal(format!("metadata row {position} missing")))
}
