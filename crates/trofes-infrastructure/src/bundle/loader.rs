//! File-backed bundle loader

use super::format::{BundleFile, CalculatorBundleFile};
use crate::config::ModelsConfig;
use crate::error_ext::ErrorContext;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;
use trofes_domain::entities::{CalculatorBundle, ModelBundle};
use trofes_domain::error::Result;
use trofes_domain::ports::BundleLoader;

/// Loads both bundles from JSON files on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBundleLoader {
    liked_path: PathBuf,
    calculator_path: PathBuf,
}

impl FileBundleLoader {
    /// Loader reading the two given files
    pub fn new<L: Into<PathBuf>, C: Into<PathBuf>>(liked_path: L, calculator_path: C) -> Self {
        Self {
            liked_path: liked_path.into(),
            calculator_path: calculator_path.into(),
        }
    }

    /// Loader for the configured bundle locations
    pub fn from_config(config: &ModelsConfig) -> Self {
        Self::new(&config.liked_bundle_path, &config.calculator_bundle_path)
    }

    /// Liked-recipes bundle path
    pub fn liked_path(&self) -> &Path {
        &self.liked_path
    }

    /// Calculator bundle path
    pub fn calculator_path(&self) -> &Path {
        &self.calculator_path
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read bundle {}", path.display()))?;
    serde_json::from_str(&content).bundle_context(format!("Malformed bundle {}", path.display()))
}

impl BundleLoader for FileBundleLoader {
    fn load_bundle(&self) -> Result<ModelBundle> {
        let bundle = read_document::<BundleFile>(&self.liked_path)?.into_bundle()?;
        info!(
            path = %self.liked_path.display(),
            recipes = bundle.len(),
            dimensions = bundle.matrix().dimensions(),
            clusters = bundle.clusters().len(),
            "Loaded liked-recipes bundle"
        );
        Ok(bundle)
    }

    fn load_bundle_with_transform(&self) -> Result<CalculatorBundle> {
        let calculator =
            read_document::<CalculatorBundleFile>(&self.calculator_path)?.into_bundle()?;
        let bundle = calculator.bundle();
        info!(
            path = %self.calculator_path.display(),
            recipes = bundle.len(),
            dimensions = bundle.matrix().dimensions(),
            input_columns = calculator.transform().input_columns().len(),
            "Loaded calculator bundle"
        );
        Ok(calculator)
    }
}
