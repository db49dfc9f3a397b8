//! Domain Value Objects
//!
//! Immutable value objects passed between the service facade and the
//! recommendation core.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`IdConvention`] | 0-based / 1-based id numbering at the boundary |
//! | [`LikedRequest`] | Liked-recipes recommendation request |
//! | [`MacroRequest`] | Calculator recommendation request |
//! | [`LikedOutcome`] | Liked-recipes result or "empty" |
//! | [`MacroOutcome`] | Calculator result or "no match" |
//! | [`QueryRecord`] | Synthetic row fed to a fitted transform |

/// Identifier types and id numbering
pub mod ids;
/// Recommendation outcomes
pub mod outcome;
/// Transform query records
pub mod query;
/// Recommendation requests
pub mod request;

pub use ids::{ClusterId, IdConvention, LikedItem, RecipeId};
pub use outcome::{LikedOutcome, LikedRecommendation, MacroOutcome};
pub use query::{FieldValue, QueryRecord};
pub use request::{LikedRequest, MacroRequest, MacroTargets};
