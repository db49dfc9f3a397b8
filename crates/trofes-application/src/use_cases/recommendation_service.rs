//! Recommendation Service Use Case
//!
//! Owns the loaded model bundles and runs the scoring core per request.
//! Bundles are shared read-only; the service holds no mutable state, so one
//! instance serves any number of concurrent requests.

use crate::domain_services::{
    AttributeCatalog, ExploitExploreSelector, NearestNeighborSampler, build_query_record,
    filter_candidates, resolve_dominant_cluster, select_anchor,
};
use crate::ports::services::{
    CALCULATOR_MODEL, LIKED_MODEL, ModelStatus, RecommendationServiceInterface,
};
use rand::RngCore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use trofes_domain::constants::{CANDIDATE_POOL_SIZE, EXPLOIT_RATIO, MAX_TOP_K};
use trofes_domain::entities::{CalculatorBundle, ModelBundle};
use trofes_domain::error::{Error, Result};
use trofes_domain::value_objects::{
    IdConvention, LikedItem, LikedOutcome, LikedRecommendation, LikedRequest, MacroOutcome,
    MacroRequest, RecipeId,
};

/// Tunables of the recommendation service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationSettings {
    /// Share of liked-path results taken from the dominant cluster
    pub exploit_ratio: f64,
    /// Nearest candidates kept before sampling on the calculator path
    pub candidate_pool_size: usize,
    /// Largest accepted `top_k`
    pub max_top_k: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            exploit_ratio: EXPLOIT_RATIO,
            candidate_pool_size: CANDIDATE_POOL_SIZE,
            max_top_k: MAX_TOP_K,
        }
    }
}

/// Recommendation service implementation
pub struct RecommendationServiceImpl {
    liked: Option<Arc<ModelBundle>>,
    calculator: Option<Arc<CalculatorBundle>>,
    selector: ExploitExploreSelector,
    sampler: NearestNeighborSampler,
    catalog: AttributeCatalog,
    max_top_k: usize,
}

impl RecommendationServiceImpl {
    /// Create the service over whichever bundles loaded successfully
    pub fn new(
        liked: Option<Arc<ModelBundle>>,
        calculator: Option<Arc<CalculatorBundle>>,
        settings: RecommendationSettings,
    ) -> Result<Self> {
        if liked.is_none() {
            warn!(model = LIKED_MODEL, "Serving without model");
        }
        if calculator.is_none() {
            warn!(model = CALCULATOR_MODEL, "Serving without model");
        }
        Ok(Self {
            liked,
            calculator,
            selector: ExploitExploreSelector::new(settings.exploit_ratio)?,
            sampler: NearestNeighborSampler::new(settings.candidate_pool_size)?,
            catalog: AttributeCatalog::default(),
            max_top_k: settings.max_top_k,
        })
    }

    /// Replace the allergy/diet catalog
    pub fn with_catalog(mut self, catalog: AttributeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    fn check_top_k(&self, top_k: usize) -> Result<()> {
        if top_k > self.max_top_k {
            return Err(Error::invalid_argument(format!(
                "top_k must be at most {}, got {top_k}",
                self.max_top_k
            )));
        }
        Ok(())
    }
}

/// Resolve caller ids against the bundle, dropping unknown ids
fn resolve_liked(
    bundle: &ModelBundle,
    liked_ids: &[i64],
    convention: IdConvention,
) -> Vec<LikedItem> {
    liked_ids
        .iter()
        .filter_map(|&external| convention.to_internal(external))
        .filter_map(|id| {
            bundle
                .cluster_of(id)
                .ok()
                .map(|cluster| LikedItem::new(id, cluster))
        })
        .collect()
}

fn to_external(ids: &[RecipeId], convention: IdConvention) -> Vec<i64> {
    ids.iter().map(|&id| convention.to_external(id)).collect()
}

impl RecommendationServiceInterface for RecommendationServiceImpl {
    fn recommend_from_liked(
        &self,
        request: &LikedRequest,
        rng: &mut dyn RngCore,
    ) -> Result<LikedOutcome> {
        let bundle = self
            .liked
            .as_deref()
            .ok_or_else(|| Error::model_unavailable(LIKED_MODEL))?;
        self.check_top_k(request.top_k)?;

        let liked = resolve_liked(bundle, &request.liked_ids, request.convention);
        if liked.is_empty() {
            debug!(
                requested = request.liked_ids.len(),
                "No liked ids known to the model"
            );
            return Ok(LikedOutcome::Empty);
        }

        let dominant_cluster = resolve_dominant_cluster(&liked)?;
        let anchor = select_anchor(&liked, dominant_cluster)
            .ok_or_else(|| Error::internal("dominant cluster has no liked anchor"))?;
        let exclude: HashSet<RecipeId> = liked.iter().map(|item| item.id).collect();

        let selected =
            self.selector
                .select(bundle, dominant_cluster, anchor, &exclude, request.top_k, rng)?;

        debug!(
            dominant_cluster,
            anchor,
            known = liked.len(),
            returned = selected.len(),
            "Liked-recipes recommendation complete"
        );

        Ok(LikedOutcome::Recommended(LikedRecommendation {
            strategy: self.selector.strategy(),
            dominant_cluster,
            anchor_id: request.convention.to_external(anchor),
            recommended_ids: to_external(&selected, request.convention),
        }))
    }

    fn recommend_from_macros(
        &self,
        request: &MacroRequest,
        rng: &mut dyn RngCore,
    ) -> Result<MacroOutcome> {
        let calculator = self
            .calculator
            .as_deref()
            .ok_or_else(|| Error::model_unavailable(CALCULATOR_MODEL))?;
        self.check_top_k(request.top_k)?;

        let bundle = calculator.bundle();
        let candidates = filter_candidates(bundle.metadata(), &self.catalog, request);
        if candidates.is_empty() {
            debug!(
                allergy_ids = ?request.allergy_ids,
                diet_ids = ?request.diet_ids,
                "Constraints eliminated every candidate"
            );
            return Ok(MacroOutcome::NoMatch);
        }

        let transform = calculator.transform();
        let record = build_query_record(transform.input_columns(), &request.targets);
        let query = transform.transform(&record)?;

        let sampled = self
            .sampler
            .sample(bundle, &candidates, &query, request.top_k, rng)?;

        debug!(
            candidates = candidates.len(),
            returned = sampled.len(),
            login = request.login,
            "Calculator recommendation complete"
        );

        Ok(MacroOutcome::Recommended(to_external(
            &sampled,
            request.convention,
        )))
    }

    fn model_status(&self) -> ModelStatus {
        ModelStatus {
            liked_recipes: self.liked.as_ref().map(|b| b.len()),
            calculator_recipes: self.calculator.as_ref().map(|c| c.bundle().len()),
        }
    }
}
