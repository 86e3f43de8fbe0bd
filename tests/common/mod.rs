pub mod fixtures;

use folio::{Bitmap, ExportArtifact, Rasterizer, RenderError, RenderSurface, SurfaceHost};
use lopdf::Document as LopdfDocument;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_artifact(artifact: &ExportArtifact) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(artifact.document.clone())
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A rasterizer that records whether the surface was attached while it ran,
/// then fails.
pub struct FailingRasterizer {
    pub host: Arc<SurfaceHost>,
    pub attached_during_call: AtomicUsize,
}

impl FailingRasterizer {
    pub fn new(host: Arc<SurfaceHost>) -> Self {
        Self {
            host,
            attached_during_call: AtomicUsize::new(0),
        }
    }
}

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        if self.host.is_attached(surface.id()) {
            self.attached_during_call.fetch_add(1, Ordering::SeqCst);
        }
        Err(RenderError::Rasterization("simulated backend failure".into()))
    }
}

pub struct PanickingRasterizer;

impl Rasterizer for PanickingRasterizer {
    fn rasterize(&self, _surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        panic!("rasterizer crashed");
    }
}

/// Paints a flat bitmap of the surface's size at 1 px per unit and counts
/// its calls.
#[derive(Default)]
pub struct FlatRasterizer {
    pub calls: AtomicUsize,
}

impl Rasterizer for FlatRasterizer {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let size = surface.size();
        Ok(Bitmap::filled(
            size.width.ceil() as u32,
            size.height.ceil() as u32,
            [240, 240, 240, 255],
        ))
    }
}

/// A rasterizer returning a bitmap with no rows.
pub struct EmptyBitmapRasterizer;

impl Rasterizer for EmptyBitmapRasterizer {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        Ok(Bitmap::filled(surface.size().width as u32, 0, [0, 0, 0, 255]))
    }
}
