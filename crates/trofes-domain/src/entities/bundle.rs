//! Model bundles
//!
//! A bundle pairs an [`ItemMatrix`] with its [`MetadataTable`] and an
//! explicit [`RecipeIndex`]. Bundles are built once at startup and shared
//! read-only for the lifetime of the process.

use super::item_matrix::ItemMatrix;
use super::recipe::{MetadataTable, RecipeRecord};
use crate::constants::MAX_RECIPE_ID;
use crate::error::{Error, Result};
use crate::ports::FeatureTransform;
use crate::value_objects::{ClusterId, RecipeId};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Injective mapping from recipe id to matrix row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeIndex {
    positions: HashMap<RecipeId, usize>,
}

impl RecipeIndex {
    /// Build the index from rows in matrix order
    ///
    /// Fails when two rows share an id or an id exceeds [`MAX_RECIPE_ID`].
    pub fn build(records: &[RecipeRecord]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.recipe_id > MAX_RECIPE_ID {
                return Err(Error::bundle(format!(
                    "recipe id {} exceeds {MAX_RECIPE_ID}",
                    record.recipe_id
                )));
            }
            if positions.insert(record.recipe_id, position).is_some() {
                return Err(Error::bundle(format!(
                    "duplicate recipe id {} in metadata",
                    record.recipe_id
                )));
            }
        }
        Ok(Self { positions })
    }

    /// Matrix row of `id`
    pub fn position(&self, id: RecipeId) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or_else(|| Error::unknown_id(id))
    }

    /// Whether `id` is indexed
    pub fn contains(&self, id: RecipeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of indexed ids
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Entity: Model Bundle
///
/// ## Business Rules
///
/// - Matrix row count equals metadata row count
/// - Metadata row `i` describes matrix row `i`
/// - Every id maps to exactly one row
#[derive(Debug, Clone)]
pub struct ModelBundle {
    matrix: ItemMatrix,
    metadata: MetadataTable,
    index: RecipeIndex,
}

impl ModelBundle {
    /// Pair a matrix with its metadata, building the id index
    pub fn new(matrix: ItemMatrix, metadata: MetadataTable) -> Result<Self> {
        if matrix.rows() != metadata.len() {
            return Err(Error::shape_mismatch(
                format!("{} matrix rows", metadata.len()),
                format!("{} matrix rows", matrix.rows()),
            ));
        }
        let index = RecipeIndex::build(metadata.records())?;
        Ok(Self {
            matrix,
            metadata,
            index,
        })
    }

    /// Feature matrix
    pub fn matrix(&self) -> &ItemMatrix {
        &self.matrix
    }

    /// Metadata rows
    pub fn metadata(&self) -> &MetadataTable {
        &self.metadata
    }

    /// Id index
    pub fn index(&self) -> &RecipeIndex {
        &self.index
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    /// Whether the bundle has no recipes
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Metadata row of `id`
    pub fn record(&self, id: RecipeId) -> Result<&RecipeRecord> {
        let position = self.index.position(id)?;
        self.metadata
            .record(position)
            .ok_or_else(|| Error::unknown_id(id))
    }

    /// Cluster of `id`
    pub fn cluster_of(&self, id: RecipeId) -> Result<ClusterId> {
        self.record(id).map(|r| r.cluster)
    }

    /// Feature vector of `id`
    pub fn vector(&self, id: RecipeId) -> Result<&[f64]> {
        let position = self.index.position(id)?;
        self.matrix
            .row(position)
            .ok_or_else(|| Error::unknown_id(id))
    }

    /// Distinct cluster labels
    pub fn clusters(&self) -> BTreeSet<ClusterId> {
        self.metadata.records().iter().map(|r| r.cluster).collect()
    }
}

/// Entity: Calculator Bundle
///
/// A [`ModelBundle`] in the nutrient space plus the fitted transform that maps
/// a raw query row into that space.
#[derive(Clone)]
pub struct CalculatorBundle {
    bundle: ModelBundle,
    transform: Arc<dyn FeatureTransform>,
}

impl CalculatorBundle {
    /// Attach a fitted transform to a bundle
    ///
    /// The transform output must have the matrix dimensionality.
    pub fn new(bundle: ModelBundle, transform: Arc<dyn FeatureTransform>) -> Result<Self> {
        let matrix_dims = bundle.matrix().dimensions();
        if !bundle.is_empty() && transform.output_dimensions() != matrix_dims {
            return Err(Error::shape_mismatch(
                format!("transform output of {matrix_dims} features"),
                format!("{} features", transform.output_dimensions()),
            ));
        }
        Ok(Self { bundle, transform })
    }

    /// Underlying bundle
    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Fitted transform
    pub fn transform(&self) -> &dyn FeatureTransform {
        self.transform.as_ref()
    }
}

impl fmt::Debug for CalculatorBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorBundle")
            .field("bundle", &self.bundle)
            .field("transform_columns", &self.transform.input_columns())
            .finish()
    }
}
