//! Use Cases

/// Recommendation service implementation
pub mod recommendation_service;

pub use recommendation_service::{RecommendationServiceImpl, RecommendationSettings};
