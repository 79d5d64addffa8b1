//! Recognition backend contract.
//!
//! The platform OCR engine (Apple's Vision/LiveText frameworks, reached
//! through the `ocrmac` bindings) is a collaborator, not part of this crate.
//! Callers implement [`RecognitionBackend`] and inject it into
//! [`OcrmacEngine`](crate::engine::OcrmacEngine).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A bounding box in fractions of the source image, bottom-left origin.
///
/// All four fields are nominally in `[0, 1]`; values outside that range are
/// backend output and pass through the pipeline unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RelativeBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// One recognized text span as produced by the backend.
///
/// Text and confidence are taken verbatim; the pipeline does not trim, clamp
/// or reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedSpan {
    pub text: String,
    /// Recognition confidence as a fraction, nominally in `[0, 1]`.
    pub confidence: f64,
    pub bounding_box: RelativeBox,
}

impl RecognizedSpan {
    pub fn new<S: Into<String>>(text: S, confidence: f64, bounding_box: RelativeBox) -> Self {
        Self {
            text: text.into(),
            confidence,
            bounding_box,
        }
    }
}

/// Quality directive handed to the backend.
///
/// Derived from [`RecognitionLevel`](crate::params::RecognitionLevel) in one
/// place so the three-way dispatch is not duplicated across the image and
/// document paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionDirective {
    /// Omit the quality parameter; the backend applies its default.
    UseDefault,
    /// Pass the named Vision quality level straight through.
    Quality(&'static str),
    /// Select the LiveText framework instead of a Vision quality level.
    LiveText,
}

/// Errors a recognition backend may report.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The recognition library is not installed or cannot be loaded.
    #[error("{0}")]
    Unavailable(String),
    /// Recognition ran and failed.
    #[error("{0}")]
    Recognition(String),
}

/// Contract for the platform OCR engine.
///
/// Given a path to a raster image, the caller's language preferences and a
/// quality directive, an implementation returns recognized spans in reading
/// order, each with a relative bottom-left-origin bounding box.
///
/// Implementations must be thread-safe (`Send + Sync`); the engine itself is
/// reentrant and concurrent callers may share one backend.
pub trait RecognitionBackend: Send + Sync {
    /// Backend identifier used in logs.
    fn name(&self) -> &str;

    /// Recognize text in the image at `image_path`.
    fn recognize(
        &self,
        image_path: &Path,
        languages: Option<&[String]>,
        directive: RecognitionDirective,
    ) -> std::result::Result<Vec<RecognizedSpan>, BackendError>;
}
