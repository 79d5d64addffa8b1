//! PDF page rasterization.
//!
//! Multi-page documents are turned into ordered page images before
//! recognition. The bundled implementation uses pdfium; callers can inject
//! any other [`PageRasterizer`].

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use thiserror::Error;

const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Errors the rasterizer may report.
#[derive(Debug, Clone, Error)]
pub enum RasterizeError {
    /// The pdfium library could not be located or bound.
    #[error("pdfium unavailable: {0}")]
    Unavailable(String),
    /// The document could not be opened or parsed.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    /// A page failed to render.
    #[error("page {page} failed to render: {message}")]
    Rendering { page: usize, message: String },
}

/// Contract for turning a multi-page document into ordered page images.
///
/// `workers` is a parallelism hint; whether and how an implementation
/// parallelizes is its own business, as long as page order is preserved.
pub trait PageRasterizer: Send + Sync {
    fn rasterize(
        &self,
        pdf_path: &Path,
        dpi: i32,
        workers: usize,
    ) -> std::result::Result<Vec<DynamicImage>, RasterizeError>;
}

/// Rasterizer backed by pdfium.
///
/// Binds a pdfium library next to the executable first, then falls back to
/// the system library. Binding happens per call; pdfium serializes rendering
/// internally, so the worker hint has no effect here.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfiumRasterizer;

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize(
        &self,
        pdf_path: &Path,
        dpi: i32,
        _workers: usize,
    ) -> std::result::Result<Vec<DynamicImage>, RasterizeError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| RasterizeError::Unavailable(e.to_string()))?;
        let pdfium = Pdfium::new(bindings);

        let document = pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| RasterizeError::InvalidDocument(e.to_string()))?;

        let scale = dpi as f32 / PDF_POINTS_PER_INCH;
        let mut images = Vec::with_capacity(document.pages().len() as usize);

        for (index, page) in document.pages().iter().enumerate() {
            let config = PdfRenderConfig::new()
                .set_target_width(((page.width().value * scale) as i32).max(1))
                .set_target_height(((page.height().value * scale) as i32).max(1));

            let bitmap = page.render_with_config(&config).map_err(|e| RasterizeError::Rendering {
                page: index + 1,
                message: e.to_string(),
            })?;

            images.push(DynamicImage::ImageRgb8(bitmap.as_image().into_rgb8()));
        }

        tracing::debug!("rasterized {} pages from {} at {} dpi", images.len(), pdf_path.display(), dpi);
        Ok(images)
    }
}
