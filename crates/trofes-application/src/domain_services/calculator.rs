//! Calculator path: constraint filtering and nearest-neighbor sampling
//!
//! Candidates are filtered by allergy/diet flags, a synthetic query row is
//! built from the macro targets and mapped into the feature space, and the
//! result is sampled at random from the nearest candidates.

use super::selector::record_id;
use super::similarity::{euclidean_distance, rank_ascending};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use tracing::debug;
use trofes_domain::constants::{
    ALLERGY_COLUMNS, CANDIDATE_POOL_SIZE, COLUMN_CALORIES, COLUMN_CARBOHYDRATE,
    COLUMN_COOKING_TIME, COLUMN_FAT, COLUMN_PROTEIN, COLUMN_TEXT_FEATURE,
    DEFAULT_COOKING_TIME, DIET_COLUMNS,
};
use trofes_domain::entities::{MetadataTable, ModelBundle};
use trofes_domain::error::{Error, Result};
use trofes_domain::value_objects::{FieldValue, MacroRequest, MacroTargets, QueryRecord, RecipeId};

/// Maps request allergy/diet ids to metadata flag columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCatalog {
    allergies: HashMap<u32, String>,
    diets: HashMap<u32, String>,
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::new(
            ALLERGY_COLUMNS.iter().map(|&(id, col)| (id, col.to_string())),
            DIET_COLUMNS.iter().map(|&(id, col)| (id, col.to_string())),
        )
    }
}

impl AttributeCatalog {
    /// Build a catalog from `(id, column)` pairs
    pub fn new(
        allergies: impl IntoIterator<Item = (u32, String)>,
        diets: impl IntoIterator<Item = (u32, String)>,
    ) -> Self {
        Self {
            allergies: allergies.into_iter().collect(),
            diets: diets.into_iter().collect(),
        }
    }

    /// Allergen-present column for an allergy id
    pub fn allergy_column(&self, id: u32) -> Option<&str> {
        self.allergies.get(&id).map(String::as_str)
    }

    /// Diet-suitability column for a diet id
    pub fn diet_column(&self, id: u32) -> Option<&str> {
        self.diets.get(&id).map(String::as_str)
    }
}

/// Metadata rows that satisfy the request's allergy and diet constraints
///
/// Constraints only apply to logged-in requests. Ids missing from the catalog
/// and columns no row carries are ignored. Returns matrix positions.
pub fn filter_candidates(
    metadata: &MetadataTable,
    catalog: &AttributeCatalog,
    request: &MacroRequest,
) -> Vec<usize> {
    let all = 0..metadata.len();
    if !request.login {
        return all.collect();
    }

    let excluded: Vec<&str> = request
        .allergy_ids
        .iter()
        .filter_map(|&id| catalog.allergy_column(id))
        .filter(|col| metadata.has_column(col))
        .collect();
    let required: Vec<&str> = request
        .diet_ids
        .iter()
        .filter_map(|&id| catalog.diet_column(id))
        .filter(|col| metadata.has_column(col))
        .collect();

    all.filter(|&position| {
        metadata.record(position).is_some_and(|record| {
            excluded.iter().all(|col| !record.flag(col))
                && required.iter().all(|col| record.flag(col))
        })
    })
    .collect()
}

/// Synthetic query row in the transform's column order
///
/// Macro columns take the request targets, `text_feature` is empty,
/// `cooking_time` is fixed and every other column (sodium, flags, ...) is
/// zero.
pub fn build_query_record(columns: &[String], targets: &MacroTargets) -> QueryRecord {
    let mut record = QueryRecord::new();
    for column in columns {
        let value = match column.as_str() {
            COLUMN_CALORIES => FieldValue::Number(targets.calories),
            COLUMN_PROTEIN => FieldValue::Number(targets.protein),
            COLUMN_FAT => FieldValue::Number(targets.fat),
            COLUMN_CARBOHYDRATE => FieldValue::Number(targets.carbs),
            COLUMN_TEXT_FEATURE => FieldValue::Text(String::new()),
            COLUMN_COOKING_TIME => FieldValue::Number(DEFAULT_COOKING_TIME),
            _ => FieldValue::Number(0.0),
        };
        record.push(column.clone(), value);
    }
    record
}

/// Samples recommendations from the nearest candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighborSampler {
    pool_size: usize,
}

impl Default for NearestNeighborSampler {
    fn default() -> Self {
        Self {
            pool_size: CANDIDATE_POOL_SIZE,
        }
    }
}

impl NearestNeighborSampler {
    /// Create a sampler drawing from the `pool_size` nearest candidates
    pub fn new(pool_size: usize) -> Result<Self> {
        if pool_size == 0 {
            return Err(Error::invalid_argument("candidate pool size must be > 0"));
        }
        Ok(Self { pool_size })
    }

    /// Size of the nearest-candidate pool
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Nearest `min(pool_size, n)` candidates to `query`, closest first
    pub fn nearest_pool(
        &self,
        bundle: &ModelBundle,
        candidates: &[usize],
        query: &[f64],
    ) -> Result<Vec<RecipeId>> {
        let rows = bundle.matrix().select_rows(candidates)?;
        let distances = euclidean_distance(query, &rows)?;
        rank_ascending(&distances)
            .into_iter()
            .take(self.pool_size)
            .map(|i| record_id(bundle, candidates[i]))
            .collect()
    }

    /// Sample `min(pool, top_k)` distinct ids from the nearest pool
    pub fn sample<R: Rng + ?Sized>(
        &self,
        bundle: &ModelBundle,
        candidates: &[usize],
        query: &[f64],
        top_k: usize,
        rng: &mut R,
    ) -> Result<Vec<RecipeId>> {
        let pool = self.nearest_pool(bundle, candidates, query)?;
        let amount = pool.len().min(top_k);
        debug!(
            candidates = candidates.len(),
            pool = pool.len(),
            amount,
            "Sampling calculator recommendations"
        );
        Ok(pool.choose_multiple(rng, amount).copied().collect())
    }
}
