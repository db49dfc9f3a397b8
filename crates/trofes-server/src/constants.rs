//! Server constants

/// Banner returned by `GET /`
pub const API_BANNER: &str = "Trofes API is Running";

/// Outcome label for a successful recommendation
pub const STATUS_SUCCESS: &str = "success";

/// Outcome label when no liked id is known to the model
pub const STATUS_EMPTY: &str = "empty";

/// Outcome label when constraints eliminate every candidate
pub const STATUS_NO_MATCH: &str = "no_match";

/// Health label when every model is loaded
pub const HEALTH_OK: &str = "ok";

/// Health label when at least one model is missing
pub const HEALTH_DEGRADED: &str = "degraded";
