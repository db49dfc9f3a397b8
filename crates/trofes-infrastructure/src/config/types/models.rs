//! Model bundle configuration types

use crate::constants::{DEFAULT_CALCULATOR_BUNDLE_PATH, DEFAULT_LIKED_BUNDLE_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the precomputed bundles live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Liked-recipes bundle (k-means space)
    pub liked_bundle_path: PathBuf,
    /// Calculator bundle (nutrient space plus fitted pipeline)
    pub calculator_bundle_path: PathBuf,
    /// Abort startup when a bundle fails to load
    pub require_on_startup: bool,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            liked_bundle_path: PathBuf::from(DEFAULT_LIKED_BUNDLE_PATH),
            calculator_bundle_path: PathBuf::from(DEFAULT_CALCULATOR_BUNDLE_PATH),
            require_on_startup: false,
        }
    }
}
