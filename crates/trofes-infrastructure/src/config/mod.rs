//! Configuration management
//!
//! Layered configuration built with figment: compiled defaults, an optional
//! TOML file and `TROFES__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ModelsConfig, RecommendationConfig, ServerConfig};
