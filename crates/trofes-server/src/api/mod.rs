//! HTTP API
//!
//! Request/response models, route handlers, error mapping and the CORS
//! fairing.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::{ApiState, RequestDefaults};
pub use routes::trofes_rocket;
