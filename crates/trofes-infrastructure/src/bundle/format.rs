//! On-disk bundle documents

use super::pipeline::FittedPipeline;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trofes_domain::entities::{CalculatorBundle, ItemMatrix, MetadataTable, ModelBundle};
use trofes_domain::error::Result;

/// Liked-recipes bundle document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleFile {
    /// Feature rows in metadata order
    pub matrix: ItemMatrix,
    /// One record per matrix row
    pub metadata: MetadataTable,
}

impl BundleFile {
    /// Validate the document and build the in-memory bundle
    pub fn into_bundle(self) -> Result<ModelBundle> {
        ModelBundle::new(self.matrix, self.metadata)
    }
}

/// Calculator bundle document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorBundleFile {
    /// Nutrient-space rows in metadata order
    pub matrix: ItemMatrix,
    /// One record per matrix row
    pub metadata: MetadataTable,
    /// Fitted column transform
    pub pipeline: FittedPipeline,
}

impl CalculatorBundleFile {
    /// Validate the document and build the in-memory bundle
    pub fn into_bundle(self) -> Result<CalculatorBundle> {
        let bundle = ModelBundle::new(self.matrix, self.metadata)?;
        CalculatorBundle::new(bundle, Arc::new(self.pipeline))
    }
}
