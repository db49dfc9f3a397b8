//! Main application configuration

use super::{LoggingConfig, ModelsConfig, RecommendationConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Model bundle locations
    pub models: ModelsConfig,
    /// Recommendation tunables
    pub recommendation: RecommendationConfig,
}
