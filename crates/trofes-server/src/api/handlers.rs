//! Route handlers
//!
//! Handlers translate the JSON contract into domain requests and run the
//! recommendation service with a fresh thread-local generator.

use super::error::ApiError;
use super::models::{
    BannerResponse, CalculatorRequest, CalculatorResponse, HealthResponse, RecommendRequest,
    RecommendResponse,
};
use crate::constants::{API_BANNER, HEALTH_DEGRADED, HEALTH_OK};
use rocket::serde::json::Json;
use rocket::{State, get, post};
use std::sync::Arc;
use tracing::debug;
use trofes_application::ports::RecommendationServiceInterface;
use trofes_domain::constants::{CALCULATOR_DEFAULT_TOP_K, LIKED_DEFAULT_TOP_K};
use trofes_domain::value_objects::{LikedOutcome, LikedRequest, MacroOutcome, MacroRequest};

/// `top_k` applied when a request omits it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDefaults {
    /// Default for `POST /recommend`
    pub liked_top_k: usize,
    /// Default for `POST /recommendCalculator`
    pub calculator_top_k: usize,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            liked_top_k: LIKED_DEFAULT_TOP_K,
            calculator_top_k: CALCULATOR_DEFAULT_TOP_K,
        }
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    /// Recommendation service
    pub service: Arc<dyn RecommendationServiceInterface>,
    /// Request defaults
    pub defaults: RequestDefaults,
}

impl ApiState {
    /// State with default request settings
    pub fn new(service: Arc<dyn RecommendationServiceInterface>) -> Self {
        Self {
            service,
            defaults: RequestDefaults::default(),
        }
    }

    /// Override the request defaults
    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    fn recommend_from_liked(&self, request: &LikedRequest) -> Result<LikedOutcome, ApiError> {
        let mut rng = rand::rng();
        Ok(self.service.recommend_from_liked(request, &mut rng)?)
    }

    fn recommend_from_macros(&self, request: &MacroRequest) -> Result<MacroOutcome, ApiError> {
        let mut rng = rand::rng();
        Ok(self.service.recommend_from_macros(request, &mut rng)?)
    }
}

/// Liveness banner
#[get("/")]
pub fn home() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: API_BANNER.to_string(),
    })
}

/// Model load status
#[get("/health")]
pub fn health(state: &State<ApiState>) -> Json<HealthResponse> {
    let models = state.service.model_status();
    let status = if models.all_loaded() {
        HEALTH_OK
    } else {
        HEALTH_DEGRADED
    };
    Json(HealthResponse {
        status: status.to_string(),
        liked_recipes: models.liked_recipes.into(),
        calculator: models.calculator_recipes.into(),
    })
}

/// Recommendations from a user's liked recipes
#[post("/recommend", data = "<request>")]
pub fn recommend(
    state: &State<ApiState>,
    request: Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let request = request.into_inner().into_domain(state.defaults.liked_top_k);
    debug!(
        liked = request.liked_ids.len(),
        top_k = request.top_k,
        "POST /recommend"
    );
    let outcome = state.recommend_from_liked(&request)?;
    Ok(Json(outcome.into()))
}

/// Recommendations from macro-nutrient targets
#[post("/recommendCalculator", data = "<request>")]
pub fn recommend_calculator(
    state: &State<ApiState>,
    request: Json<CalculatorRequest>,
) -> Result<Json<CalculatorResponse>, ApiError> {
    let request = request
        .into_inner()
        .into_domain(state.defaults.calculator_top_k);
    debug!(
        top_k = request.top_k,
        login = request.login,
        "POST /recommendCalculator"
    );
    let outcome = state.recommend_from_macros(&request)?;
    Ok(Json(CalculatorResponse::from_outcome(outcome, request.login)))
}
