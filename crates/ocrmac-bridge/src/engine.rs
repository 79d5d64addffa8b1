//! The ocrmac conversion pipeline.
//!
//! [`OcrmacEngine::process`] is the entry operation: validate the host and
//! the input, route the file to the single-image or multi-page path, run
//! recognition through the injected backend, and serialize the result as one
//! hOCR document. The call chain is synchronous and blocking; each
//! invocation is independent and reentrant.

use crate::backend::RecognitionBackend;
use crate::error::{OcrmacError, Result};
use crate::hocr;
use crate::params::OcrmacParams;
use crate::pdf::{PageRasterizer, PdfiumRasterizer};
use crate::platform::{self, PlatformProbe, SystemProbe};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Engine identifier, also emitted as the hOCR `ocr-system` meta value.
pub const ENGINE_NAME: &str = "ocrmac";

/// File extensions (lowercase, without dot) the engine accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "pdf", "tiff", "tif"];

/// The supported set as shown in error messages, sorted.
const SUPPORTED_FORMATS_LIST: &str = ".jpeg, .jpg, .pdf, .png, .tif, .tiff";

/// Resolution used when rasterizing document pages for recognition.
const RASTER_DPI: i32 = 300;

/// Worker-count hint passed to the rasterizer.
const RASTER_WORKERS: usize = 2;

/// Converts images and PDFs to hOCR through a platform recognition backend.
///
/// The recognition backend is injected; the rasterizer defaults to
/// [`PdfiumRasterizer`] and the platform probe to [`SystemProbe`], both
/// replaceable through the `with_*` builders.
pub struct OcrmacEngine {
    backend: Arc<dyn RecognitionBackend>,
    rasterizer: Arc<dyn PageRasterizer>,
    probe: Arc<dyn PlatformProbe>,
}

impl OcrmacEngine {
    /// Create an engine around the given recognition backend.
    pub fn new(backend: Arc<dyn RecognitionBackend>) -> Self {
        Self {
            backend,
            rasterizer: Arc::new(PdfiumRasterizer::new()),
            probe: Arc::new(SystemProbe),
        }
    }

    /// Replace the document rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: Arc<dyn PageRasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    /// Replace the platform probe.
    pub fn with_probe(mut self, probe: Arc<dyn PlatformProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Engine name.
    pub fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    /// Extensions accepted by [`process`](Self::process), lowercase, without dot.
    pub fn supported_extensions(&self) -> &'static [&'static str] {
        &SUPPORTED_EXTENSIONS
    }

    /// Process a file and return its hOCR document.
    ///
    /// Absent `params` means balanced recognition with no language
    /// preference. Platform and version gates run before any file access;
    /// the path must exist and carry one of the six supported extensions.
    ///
    /// # Errors
    ///
    /// See [`OcrmacError`]; collaborator failures are wrapped but carry the
    /// original message. Nothing is retried.
    pub fn process(&self, file_path: impl AsRef<Path>, params: Option<OcrmacParams>) -> Result<String> {
        let file_path = file_path.as_ref();

        platform::validate_platform(self.probe.as_ref())?;

        let params = params.unwrap_or_default();
        platform::validate_livetext_requirement(self.probe.as_ref(), params.recognition_level())?;

        if !file_path.exists() {
            return Err(OcrmacError::file_not_found(file_path));
        }

        let extension = file_path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(OcrmacError::UnsupportedFormat {
                extension: format!(".{extension}"),
                supported: SUPPORTED_FORMATS_LIST.to_string(),
            });
        }

        debug!(
            "processing {} with level {}",
            file_path.display(),
            params.recognition_level().as_str()
        );

        if extension == "pdf" {
            self.process_document(file_path, &params)
        } else {
            self.process_image(file_path, &params)
        }
    }

    /// Single-image path: recognize, read pixel dimensions, serialize.
    fn process_image(&self, image_path: &Path, params: &OcrmacParams) -> Result<String> {
        let spans = self.backend.recognize(
            image_path,
            params.languages(),
            params.recognition_level().directive(),
        )?;

        // The recognition call alone does not guarantee dimensions; read
        // them from the file header.
        let (width, height) = image::image_dimensions(image_path)
            .map_err(|e| OcrmacError::processing_with_source(format!("failed to read image dimensions: {e}"), e))?;

        debug!("{} recognized {} spans in {}", self.backend.name(), spans.len(), image_path.display());
        Ok(hocr::page_to_hocr(&spans, width, height))
    }

    /// Multi-page path: rasterize, recognize page by page, merge.
    fn process_document(&self, pdf_path: &Path, params: &OcrmacParams) -> Result<String> {
        let images = self.rasterizer.rasterize(pdf_path, RASTER_DPI, RASTER_WORKERS)?;
        debug!("rasterized {} into {} pages", pdf_path.display(), images.len());

        let mut pages = Vec::with_capacity(images.len());
        for image in &images {
            pages.push(self.process_page(image, params)?);
        }

        Ok(hocr::merge_hocr_pages(&pages))
    }

    /// Recognize one rasterized page through a uniquely named temporary PNG.
    ///
    /// The backend needs a file path. The temporary file is unique per call
    /// and is removed on every exit path when its handle drops.
    fn process_page(&self, image: &DynamicImage, params: &OcrmacParams) -> Result<String> {
        let temp_file = tempfile::Builder::new()
            .prefix("ocrmac-page-")
            .suffix(".png")
            .tempfile()?;

        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|e| OcrmacError::processing_with_source(format!("failed to encode page image: {e}"), e))?;
        std::fs::write(temp_file.path(), &encoded)?;

        let spans = self.backend.recognize(
            temp_file.path(),
            params.languages(),
            params.recognition_level().directive(),
        )?;

        let (width, height) = image.dimensions();
        Ok(hocr::page_to_hocr(&spans, width, height))
    }
}
