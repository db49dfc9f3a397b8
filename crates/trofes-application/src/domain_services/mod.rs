//! Domain Services
//!
//! The recommendation-scoring core. Everything here is synchronous,
//! CPU-bound and free of shared mutable state.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`similarity`] | Cosine similarity, Euclidean distance, ranking |
//! | [`affinity`] | Dominant cluster and anchor resolution |
//! | [`ExploitExploreSelector`] | Liked-recipes exploit/explore selection |
//! | [`NearestNeighborSampler`] | Calculator nearest-pool sampling |

/// Dominant cluster resolution
pub mod affinity;
/// Constraint filtering and nearest-neighbor sampling
pub mod calculator;
/// Exploit/explore selection
pub mod selector;
/// Vector similarity utilities
pub mod similarity;

pub use affinity::{resolve_dominant_cluster, select_anchor};
pub use calculator::{
    AttributeCatalog, NearestNeighborSampler, build_query_record, filter_candidates,
};
pub use selector::ExploitExploreSelector;
pub use similarity::{cosine_similarity, euclidean_distance, rank_ascending, rank_descending};
