//! # Infrastructure Layer
//!
//! Technical concerns around the recommendation core.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bundle`] | JSON model bundles and the fitted column pipeline |
//! | [`bootstrap`] | Builds the recommendation service from configuration |
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod bundle;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use error_ext::ErrorContext;
