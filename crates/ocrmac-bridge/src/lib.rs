//! ocrmac-bridge - Apple Vision OCR to hOCR conversion
//!
//! A thin adapter that feeds images and PDFs to the macOS `ocrmac`
//! recognition backend (Apple's Vision/LiveText frameworks) and converts the
//! raw annotations into hOCR XML. The backend itself is a collaborator:
//! callers implement [`RecognitionBackend`] over whatever binding they use
//! and inject it into the engine.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ocrmac_bridge::{
//!     BackendError, OcrmacEngine, OcrmacParams, RecognitionBackend, RecognitionDirective,
//!     RecognitionLevel, RecognizedSpan,
//! };
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! struct VisionBackend;
//!
//! impl RecognitionBackend for VisionBackend {
//!     fn name(&self) -> &str {
//!         "vision-ffi"
//!     }
//!
//!     fn recognize(
//!         &self,
//!         _image_path: &Path,
//!         _languages: Option<&[String]>,
//!         _directive: RecognitionDirective,
//!     ) -> Result<Vec<RecognizedSpan>, BackendError> {
//!         Err(BackendError::Unavailable("not linked against Vision".to_string()))
//!     }
//! }
//!
//! # fn main() -> ocrmac_bridge::Result<()> {
//! let engine = OcrmacEngine::new(Arc::new(VisionBackend));
//! let params = OcrmacParams::new(RecognitionLevel::Accurate, Some(vec!["en-US".to_string()]))?;
//! let hocr = engine.process("scan.pdf", Some(params))?;
//! println!("{hocr}");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **params**: recognition level and BCP 47 language validation
//! - **platform**: macOS / macOS-version gating behind an injectable probe
//! - **backend**: the recognition collaborator contract
//! - **pdf**: document rasterization (pdfium by default)
//! - **hocr**: coordinate flip and hOCR serialization, multi-page merge
//! - **engine**: per-file orchestration and the `process` entry operation
//!
//! Processing is synchronous and blocking; one call handles one file, and
//! concurrent callers do not interfere.

#![deny(unsafe_code)]

pub mod backend;
pub mod engine;
pub mod error;
pub mod hocr;
pub mod params;
pub mod pdf;
pub mod platform;

pub use backend::{BackendError, RecognitionBackend, RecognitionDirective, RecognizedSpan, RelativeBox};
pub use engine::{ENGINE_NAME, OcrmacEngine, SUPPORTED_EXTENSIONS};
pub use error::{OcrmacError, Result};
pub use hocr::{merge_hocr_pages, page_to_hocr};
pub use params::{MAX_LANGUAGES, OcrmacParams, RecognitionLevel};
pub use pdf::{PageRasterizer, PdfiumRasterizer, RasterizeError};
pub use platform::{LIVETEXT_MIN_MAJOR_VERSION, PlatformProbe, SystemProbe};
