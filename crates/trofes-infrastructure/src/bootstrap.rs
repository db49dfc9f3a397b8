//! Service bootstrap
//!
//! Loads the configured bundles and wires the recommendation service. A
//! bundle that fails to load leaves its endpoint unavailable unless
//! `models.require_on_startup` is set.

use crate::config::AppConfig;
use std::sync::Arc;
use tracing::{error, info};
use trofes_application::use_cases::RecommendationServiceImpl;
use trofes_application::{CALCULATOR_MODEL, LIKED_MODEL};
use trofes_domain::error::Result;
use trofes_domain::ports::BundleLoader;

/// Build the recommendation service from configuration
pub fn build_recommendation_service(
    config: &AppConfig,
    loader: &dyn BundleLoader,
) -> Result<RecommendationServiceImpl> {
    let required = config.models.require_on_startup;
    let liked = tolerate(LIKED_MODEL, loader.load_bundle(), required)?;
    let calculator = tolerate(
        CALCULATOR_MODEL,
        loader.load_bundle_with_transform(),
        required,
    )?;

    let service = RecommendationServiceImpl::new(
        liked.map(Arc::new),
        calculator.map(Arc::new),
        config.recommendation.settings(),
    )?;
    info!(
        exploit_ratio = config.recommendation.exploit_ratio,
        candidate_pool_size = config.recommendation.candidate_pool_size,
        "Recommendation service ready"
    );
    Ok(service)
}

fn tolerate<T>(model: &str, loaded: Result<T>, required: bool) -> Result<Option<T>> {
    match loaded {
        Ok(bundle) => Ok(Some(bundle)),
        Err(err) if required => Err(err),
        Err(err) => {
            error!(model, error = %err, "Failed to load model bundle");
            Ok(None)
        }
    }
}
