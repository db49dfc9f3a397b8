//! Shared fixtures for HTTP tests

#![allow(dead_code)]

use rocket::local::asynchronous::Client;
use std::sync::Arc;
use trofes_application::use_cases::{RecommendationServiceImpl, RecommendationSettings};
use trofes_domain::entities::{
    AttributeValue, CalculatorBundle, ItemMatrix, MetadataTable, ModelBundle, RecipeRecord,
};
use trofes_domain::error::{Error, Result};
use trofes_domain::ports::FeatureTransform;
use trofes_domain::value_objects::QueryRecord;
use trofes_server::{ApiState, trofes_rocket};

/// Ten recipes in three clusters of 2-d vectors
///
/// Cluster 0 holds ids 0..4, cluster 1 ids 4..7 and cluster 2 ids 7..10.
pub fn liked_bundle() -> ModelBundle {
    let rows = vec![
        (0, vec![1.0, 0.0]),
        (0, vec![0.99, 0.1]),
        (0, vec![0.9, 0.3]),
        (0, vec![0.7, 0.7]),
        (1, vec![0.6, 0.8]),
        (1, vec![0.1, 1.0]),
        (1, vec![0.0, 1.0]),
        (2, vec![-1.0, 0.0]),
        (2, vec![-0.9, -0.1]),
        (2, vec![0.2, -1.0]),
    ];
    let records = rows
        .iter()
        .enumerate()
        .map(|(id, (cluster, _))| RecipeRecord::new(id as u64, *cluster))
        .collect();
    let matrix = ItemMatrix::from_rows(rows.into_iter().map(|(_, v)| v).collect()).unwrap();
    ModelBundle::new(matrix, MetadataTable::new(records)).unwrap()
}

/// Reads the four macro columns as numbers
pub struct MacroTransform {
    columns: Vec<String>,
    fail: bool,
}

impl MacroTransform {
    pub fn new() -> Self {
        Self {
            columns: ["calories", "protein", "fat", "carbohydrate"]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            fail: false,
        }
    }

    /// Transform that rejects every record
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl FeatureTransform for MacroTransform {
    fn input_columns(&self) -> &[String] {
        &self.columns
    }

    fn output_dimensions(&self) -> usize {
        self.columns.len()
    }

    fn transform(&self, record: &QueryRecord) -> Result<Vec<f64>> {
        if self.fail {
            return Err(Error::transform("fitted pipeline rejected the row"));
        }
        Ok(record
            .fields()
            .iter()
            .map(|(_, v)| v.as_number().unwrap_or(0.0))
            .collect())
    }
}

/// 30 recipes at `[10 i, i, i, i]`
///
/// `has_egg` on even ids, `halal` below 5, `is_spicy` only on id 29.
pub fn calculator_bundle(transform: MacroTransform) -> CalculatorBundle {
    let matrix = ItemMatrix::from_rows(
        (0..30)
            .map(|i| {
                let x = f64::from(i);
                vec![10.0 * x, x, x, x]
            })
            .collect(),
    )
    .unwrap();
    let records = (0..30_u64)
        .map(|i| {
            RecipeRecord::new(i, (i % 3) as i64)
                .with_attribute("has_egg", AttributeValue::Bool(i % 2 == 0))
                .with_attribute("halal", AttributeValue::Bool(i < 5))
                .with_attribute("is_spicy", AttributeValue::Bool(i == 29))
        })
        .collect();
    let bundle = ModelBundle::new(matrix, MetadataTable::new(records)).unwrap();
    CalculatorBundle::new(bundle, Arc::new(transform)).unwrap()
}

/// Client over a service holding the given bundles
pub async fn client_with(
    liked: Option<ModelBundle>,
    calculator: Option<CalculatorBundle>,
) -> Client {
    let service = RecommendationServiceImpl::new(
        liked.map(Arc::new),
        calculator.map(Arc::new),
        RecommendationSettings::default(),
    )
    .unwrap();
    Client::tracked(trofes_rocket(ApiState::new(Arc::new(service)), true))
        .await
        .expect("valid rocket instance")
}

/// Client with both models loaded
pub async fn full_client() -> Client {
    client_with(
        Some(liked_bundle()),
        Some(calculator_bundle(MacroTransform::new())),
    )
    .await
}

/// Client with no models loaded
pub async fn empty_client() -> Client {
    client_with(None, None).await
}
