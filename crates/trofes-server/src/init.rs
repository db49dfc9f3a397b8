//! Server Initialization
//!
//! Loads configuration, installs logging, loads the model bundles and
//! launches Rocket. [`check`] runs the same startup without serving.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use trofes_domain::ports::BundleLoader;
use trofes_infrastructure::bootstrap::build_recommendation_service;
use trofes_infrastructure::bundle::FileBundleLoader;
use trofes_infrastructure::config::{AppConfig, ConfigLoader};
use trofes_infrastructure::logging::init_logging;

use crate::api::{ApiState, RequestDefaults, trofes_rocket};

/// Run the Trofes API server until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting Trofes recipe engine"
    );

    let loader = FileBundleLoader::from_config(&config.models);
    let service = build_recommendation_service(&config, &loader)?;
    let state = ApiState::new(Arc::new(service)).with_defaults(request_defaults(&config));

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    trofes_rocket(state, config.server.cors)
        .configure(figment)
        .launch()
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Load and validate both bundles, then exit
///
/// Fails when either bundle cannot be loaded.
pub fn check(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let loader = FileBundleLoader::from_config(&config.models);

    let liked = loader.load_bundle()?;
    info!(
        path = %loader.liked_path().display(),
        recipes = liked.len(),
        clusters = liked.clusters().len(),
        "Liked-recipes bundle OK"
    );

    let calculator = loader.load_bundle_with_transform()?;
    info!(
        path = %loader.calculator_path().display(),
        recipes = calculator.bundle().len(),
        input_columns = calculator.transform().input_columns().len(),
        "Calculator bundle OK"
    );

    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

fn request_defaults(config: &AppConfig) -> RequestDefaults {
    RequestDefaults {
        liked_top_k: config.recommendation.liked_default_top_k,
        calculator_top_k: config.recommendation.calculator_default_top_k,
    }
}
