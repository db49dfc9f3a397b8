//! Domain Port Interfaces
//!
//! Contracts the recommendation core expects from its collaborators.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`FeatureTransform`] | Fitted mapping from a raw row to the feature space |
//! | [`BundleLoader`] | Source of the two model bundles |

use crate::entities::{CalculatorBundle, ModelBundle};
use crate::error::Result;
use crate::value_objects::QueryRecord;

/// Fitted feature transform
///
/// Implementations are fitted offline and immutable at serve time.
pub trait FeatureTransform: Send + Sync {
    /// Field names the transform expects, in order
    fn input_columns(&self) -> &[String];

    /// Length of the produced feature vector
    fn output_dimensions(&self) -> usize;

    /// Map a record into the feature space
    ///
    /// Fails with `Error::ShapeMismatch` when the record's fields differ from
    /// [`FeatureTransform::input_columns`].
    fn transform(&self, record: &QueryRecord) -> Result<Vec<f64>>;
}

/// Loader for the precomputed model bundles
pub trait BundleLoader: Send + Sync {
    /// Load the liked-recipes bundle (raw vectors, no transform)
    fn load_bundle(&self) -> Result<ModelBundle>;

    /// Load the calculator bundle together with its fitted transform
    fn load_bundle_with_transform(&self) -> Result<CalculatorBundle>;
}
