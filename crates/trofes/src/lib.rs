//! # Trofes Recipe Engine
//!
//! Cluster-aware recipe recommendations served over HTTP.
//!
//! Two recommenders share one service:
//!
//! - **Liked recipes**: finds the cluster that dominates a user's like
//!   history, then mixes the recipes most similar to the latest like from
//!   that cluster with a share drawn from the other clusters.
//! - **Calculator**: filters recipes by allergy and diet flags, maps the
//!   macro targets into the nutrient space and samples from the nearest
//!   candidates.
//!
//! ## Architecture
//!
//! - `domain` - bundles, identifiers, outcomes and ports
//! - `application` - scoring algorithms and the recommendation service
//! - `infrastructure` - configuration, logging, bundle loading
//! - `server` - Rocket HTTP API

/// Domain layer
pub mod domain {
    pub use trofes_domain::*;
}

/// Application layer
pub mod application {
    pub use trofes_application::*;
}

/// Infrastructure layer
pub mod infrastructure {
    pub use trofes_infrastructure::*;
}

/// HTTP server
pub mod server {
    pub use trofes_server::*;
}
