//! Error types for ocrmac-bridge.
//!
//! All fallible operations in the crate return [`Result`]. The error kinds
//! mirror the failure modes of the pipeline:
//!
//! - `Io` (from `std::io::Error`) - system errors, always bubble up unchanged
//! - `UnsupportedPlatform` / `UnsupportedOsVersion` - host gating failures
//! - `FileNotFound` / `UnsupportedFormat` - input precondition failures
//! - `BackendUnavailable` - the recognition library is missing
//! - `Rasterization` - PDF page rendering failed
//! - `Processing` - recognition or conversion failed; wraps the collaborator
//!   error and carries its original message
//! - `Validation` - malformed parameters, rejected before any I/O
//!
//! Every error is terminal for the current call; nothing is retried at this
//! layer.
use std::path::Path;
use thiserror::Error;

/// Result type alias using [`OcrmacError`].
pub type Result<T> = std::result::Result<T, OcrmacError>;

/// Main error type for all ocrmac-bridge operations.
#[derive(Debug, Error)]
pub enum OcrmacError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ocrmac is only available on macOS systems. Current platform: {0}")]
    UnsupportedPlatform(String),

    #[error("{0}")]
    UnsupportedOsVersion(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {extension}. Supported formats: {supported}")]
    UnsupportedFormat { extension: String, supported: String },

    #[error("Recognition backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("PDF conversion failed: {message}")]
    Rasterization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("ocrmac processing failed: {message}")]
    Processing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl OcrmacError {
    /// Create a `FileNotFound` error for the given path.
    pub fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound(path.display().to_string())
    }

    /// Create a `Processing` error.
    pub fn processing<S: Into<String>>(message: S) -> Self {
        Self::Processing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Processing` error with source.
    pub fn processing_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Processing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a `Rasterization` error.
    pub fn rasterization<S: Into<String>>(message: S) -> Self {
        Self::Rasterization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Rasterization` error with source.
    pub fn rasterization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Rasterization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a `Validation` error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Validation` error with source.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<crate::backend::BackendError> for OcrmacError {
    fn from(err: crate::backend::BackendError) -> Self {
        match err {
            crate::backend::BackendError::Unavailable(message) => OcrmacError::BackendUnavailable(message),
            crate::backend::BackendError::Recognition(message) => OcrmacError::Processing {
                message,
                source: None,
            },
        }
    }
}

impl From<crate::pdf::RasterizeError> for OcrmacError {
    fn from(err: crate::pdf::RasterizeError) -> Self {
        OcrmacError::Rasterization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
