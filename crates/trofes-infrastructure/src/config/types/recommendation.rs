//! Recommendation tunables

use serde::{Deserialize, Serialize};
use trofes_application::use_cases::RecommendationSettings;
use trofes_domain::constants::{
    CALCULATOR_DEFAULT_TOP_K, CANDIDATE_POOL_SIZE, EXPLOIT_RATIO, LIKED_DEFAULT_TOP_K, MAX_TOP_K,
};

/// Recommendation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// `top_k` used when a liked-recipes request omits it
    pub liked_default_top_k: usize,
    /// `top_k` used when a calculator request omits it
    pub calculator_default_top_k: usize,
    /// Share of liked-recipes results taken from the dominant cluster
    pub exploit_ratio: f64,
    /// Nearest candidates kept before sampling on the calculator path
    pub candidate_pool_size: usize,
    /// Largest accepted `top_k`
    pub max_top_k: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            liked_default_top_k: LIKED_DEFAULT_TOP_K,
            calculator_default_top_k: CALCULATOR_DEFAULT_TOP_K,
            exploit_ratio: EXPLOIT_RATIO,
            candidate_pool_size: CANDIDATE_POOL_SIZE,
            max_top_k: MAX_TOP_K,
        }
    }
}

impl RecommendationConfig {
    /// Service settings derived from this section
    pub fn settings(&self) -> RecommendationSettings {
        RecommendationSettings {
            exploit_ratio: self.exploit_ratio,
            candidate_pool_size: self.candidate_pool_size,
            max_top_k: self.max_top_k,
        }
    }
}
