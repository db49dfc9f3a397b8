//! Application Layer - Trofes Recipe Engine
//!
//! Implements the recommendation-scoring core and the use case that serves
//! it.
//!
//! ## Architecture
//!
//! - `domain_services`: pure scoring algorithms (similarity, cluster
//!   affinity, exploit/explore selection, constraint filtering and sampling)
//! - `use_cases`: [`RecommendationServiceImpl`], which owns the loaded
//!   bundles and runs the algorithms per request
//! - `ports`: the service interface consumed by the HTTP facade
//!
//! ## Dependencies
//!
//! This crate depends only on `trofes-domain` and pure Rust libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
