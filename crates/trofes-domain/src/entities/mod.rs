//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ItemMatrix`] | Dense feature vectors, one row per recipe |
//! | [`RecipeRecord`] | Metadata row with cluster and attribute flags |
//! | [`MetadataTable`] | Metadata rows in matrix order |
//! | [`ModelBundle`] | Immutable matrix + metadata + id index |
//! | [`CalculatorBundle`] | Model bundle with a fitted transform |

/// Model bundles and the id index
pub mod bundle;
/// Dense item-feature matrix
pub mod item_matrix;
/// Recipe metadata rows
pub mod recipe;

pub use bundle::{CalculatorBundle, ModelBundle, RecipeIndex};
pub use item_matrix::ItemMatrix;
pub use recipe::{AttributeValue, MetadataTable, RecipeRecord};
