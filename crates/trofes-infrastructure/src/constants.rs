//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Recommendation constants are defined in `trofes_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "trofes.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "trofes";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TROFES";

/// Separator between the prefix and nested keys of configuration variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

// ============================================================================
// MODEL BUNDLE CONSTANTS
// ============================================================================

/// Default path of the liked-recipes bundle
pub const DEFAULT_LIKED_BUNDLE_PATH: &str = "models/liked_recipes.json";

/// Default path of the calculator bundle
pub const DEFAULT_CALCULATOR_BUNDLE_PATH: &str = "models/calculator.json";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TROFES_LOG";

/// Log file name used when the configured path has no file stem
pub const DEFAULT_LOG_FILE_STEM: &str = "trofes";
