//! Application Service Interfaces

use rand::RngCore;
use trofes_domain::error::Result;
use trofes_domain::value_objects::{LikedOutcome, LikedRequest, MacroOutcome, MacroRequest};

/// Model name reported for the liked-recipes bundle
pub const LIKED_MODEL: &str = "liked-recipes (k-means)";

/// Model name reported for the calculator bundle
pub const CALCULATOR_MODEL: &str = "calculator (agglomerative)";

/// Load state of the two model bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelStatus {
    /// Recipes in the liked-recipes bundle, `None` when not loaded
    pub liked_recipes: Option<usize>,
    /// Recipes in the calculator bundle, `None` when not loaded
    pub calculator_recipes: Option<usize>,
}

impl ModelStatus {
    /// Whether both bundles are loaded
    pub fn all_loaded(&self) -> bool {
        self.liked_recipes.is_some() && self.calculator_recipes.is_some()
    }
}

/// Recommendation service
///
/// Randomized steps draw from the supplied `rng`; pass a seeded generator for
/// reproducible output.
pub trait RecommendationServiceInterface: Send + Sync {
    /// Recommend recipes from an ordered like history
    ///
    /// Fails with `Error::ModelUnavailable` when the liked-recipes bundle is
    /// not loaded.
    fn recommend_from_liked(
        &self,
        request: &LikedRequest,
        rng: &mut dyn RngCore,
    ) -> Result<LikedOutcome>;

    /// Recommend recipes close to target macros
    ///
    /// Fails with `Error::ModelUnavailable` when the calculator bundle is not
    /// loaded, and with a transform error when the query row cannot be mapped.
    fn recommend_from_macros(
        &self,
        request: &MacroRequest,
        rng: &mut dyn RngCore,
    ) -> Result<MacroOutcome>;

    /// Load state of the bundles
    fn model_status(&self) -> ModelStatus;
}
