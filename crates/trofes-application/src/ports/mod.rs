//! Application Ports
//!
//! Interfaces the service facade depends on.

/// Recommendation service interface
pub mod services;

pub use services::{CALCULATOR_MODEL, LIKED_MODEL, ModelStatus, RecommendationServiceInterface};
