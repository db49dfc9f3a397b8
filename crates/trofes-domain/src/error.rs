//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Trofes recipe engine
#[derive(Error, Debug)]
pub enum Error {
    /// A model bundle was not loaded and cannot serve requests
    #[error("Model unavailable: {model}")]
    ModelUnavailable {
        /// Name of the model that is missing
        model: String,
    },

    /// No usable input remained after filtering against known items
    #[error("Empty input: {message}")]
    EmptyInput {
        /// Description of what was empty
        message: String,
    },

    /// Vector or record shape does not match what the model expects
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape
        expected: String,
        /// Actual shape
        actual: String,
    },

    /// Fitted feature transform failed
    #[error("Transform error: {message}")]
    Transform {
        /// Description of the transform failure
        message: String,
    },

    /// Recipe id is not present in the bundle index
    #[error("Unknown recipe id: {id}")]
    UnknownId {
        /// The id that could not be resolved
        id: u64,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Model bundle is malformed
    #[error("Bundle error: {message}")]
    Bundle {
        /// Description of the bundle problem
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Recommendation error creation methods
impl Error {
    /// Create a model unavailable error
    pub fn model_unavailable<S: Into<String>>(model: S) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input<S: Into<String>>(message: S) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch<E: ToString, A: ToString>(expected: E, actual: A) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a transform error
    pub fn transform<S: Into<String>>(message: S) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }

    /// Create an unknown id error
    pub fn unknown_id(id: u64) -> Self {
        Self::UnknownId { id }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Loading and configuration error creation methods
impl Error {
    /// Create a bundle error
    pub fn bundle<S: Into<String>>(message: S) -> Self {
        Self::Bundle {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bundle error with source
    pub fn bundle_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Bundle {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the error came from a malformed query row or transform crash
    pub fn is_transform_failure(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::Transform { .. })
    }
}
