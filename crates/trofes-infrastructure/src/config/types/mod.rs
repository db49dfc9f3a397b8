//! Configuration types

mod app;
mod logging;
mod models;
mod recommendation;
mod server;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use models::ModelsConfig;
pub use recommendation::RecommendationConfig;
pub use server::ServerConfig;
