//! API request and response models
//!
//! Field names follow the public JSON contract consumed by the front-end.

use crate::constants::{STATUS_EMPTY, STATUS_NO_MATCH, STATUS_SUCCESS};
use serde::{Deserialize, Serialize};
use trofes_domain::value_objects::{
    IdConvention, LikedOutcome, LikedRequest, MacroOutcome, MacroRequest, MacroTargets,
};

fn default_true() -> bool {
    true
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Liked ids, oldest first
    pub liked_ids: Vec<i64>,
    /// Number of recommendations, defaults to the configured value
    #[serde(default)]
    pub top_k: Option<usize>,
    /// `false` when ids are 1-based
    #[serde(default = "default_true")]
    pub is_start_from_zero: bool,
}

impl RecommendRequest {
    /// Domain request, filling in `default_top_k`
    pub fn into_domain(self, default_top_k: usize) -> LikedRequest {
        LikedRequest::new(self.liked_ids)
            .with_top_k(self.top_k.unwrap_or(default_top_k))
            .with_convention(IdConvention::from_zero_based_flag(self.is_start_from_zero))
    }
}

/// Body of `POST /recommendCalculator`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorRequest {
    /// Target calories
    pub calories: f64,
    /// Target protein
    pub protein: f64,
    /// Target fat
    pub fat: f64,
    /// Target carbohydrates
    pub carbs: f64,
    /// Number of recommendations, defaults to the configured value
    #[serde(default)]
    pub top_k: Option<usize>,
    /// `false` for 1-based output ids
    #[serde(default = "default_true")]
    pub is_start_from_zero: bool,
    /// Allergy and diet filters only apply to logged-in users
    #[serde(default)]
    pub is_login: bool,
    /// Allergies to avoid
    #[serde(default)]
    pub allergy_ids: Option<Vec<u32>>,
    /// Diets to satisfy
    #[serde(default)]
    pub dietary_ids: Option<Vec<u32>>,
}

impl CalculatorRequest {
    /// Domain request, filling in `default_top_k`
    pub fn into_domain(self, default_top_k: usize) -> MacroRequest {
        let targets = MacroTargets {
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        };
        let mut request = MacroRequest::new(targets)
            .with_top_k(self.top_k.unwrap_or(default_top_k))
            .with_convention(IdConvention::from_zero_based_flag(self.is_start_from_zero));
        request.login = self.is_login;
        request.allergy_ids = self.allergy_ids.unwrap_or_default();
        request.diet_ids = self.dietary_ids.unwrap_or_default();
        request
    }
}

/// Response of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// `success` or `empty`
    pub status: String,
    /// Strategy label, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Dominant cluster, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_cluster: Option<i64>,
    /// Anchor recipe in caller numbering, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_used: Option<i64>,
    /// Recommended ids in caller numbering
    pub recommended_ids: Vec<i64>,
}

impl From<LikedOutcome> for RecommendResponse {
    fn from(outcome: LikedOutcome) -> Self {
        match outcome {
            LikedOutcome::Recommended(rec) => Self {
                status: STATUS_SUCCESS.to_string(),
                strategy: Some(rec.strategy),
                dominant_cluster: Some(rec.dominant_cluster),
                anchor_used: Some(rec.anchor_id),
                recommended_ids: rec.recommended_ids,
            },
            LikedOutcome::Empty => Self {
                status: STATUS_EMPTY.to_string(),
                strategy: None,
                dominant_cluster: None,
                anchor_used: None,
                recommended_ids: Vec::new(),
            },
        }
    }
}

/// Response of `POST /recommendCalculator`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// `success` or `no_match`
    pub status: String,
    /// Echo of the request's login flag, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_login: Option<bool>,
    /// Recommended ids in caller numbering
    pub recommended_ids: Vec<i64>,
}

impl CalculatorResponse {
    /// Response for `outcome` of a request with the given login flag
    pub fn from_outcome(outcome: MacroOutcome, is_login: bool) -> Self {
        match outcome {
            MacroOutcome::Recommended(ids) => Self {
                status: STATUS_SUCCESS.to_string(),
                is_login: Some(is_login),
                recommended_ids: ids,
            },
            MacroOutcome::NoMatch => Self {
                status: STATUS_NO_MATCH.to_string(),
                is_login: None,
                recommended_ids: Vec::new(),
            },
        }
    }
}

/// Response of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Liveness message
    pub message: String,
}

/// Load status of one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHealth {
    /// Whether the bundle is loaded
    pub loaded: bool,
    /// Number of recipes in the bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<usize>,
}

impl From<Option<usize>> for ModelHealth {
    fn from(recipes: Option<usize>) -> Self {
        Self {
            loaded: recipes.is_some(),
            recipes,
        }
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    /// Liked-recipes model
    pub liked_recipes: ModelHealth,
    /// Calculator model
    pub calculator: ModelHealth,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub detail: String,
}
