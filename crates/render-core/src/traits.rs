use crate::error::RenderError;
use crate::surface::RenderSurface;
use crate::types::Bitmap;

/// Turns a populated render surface into pixels.
///
/// Implementations must produce a bitmap whose width is the surface width
/// times the rasterizer's scale, and whose height covers the surface's full
/// content height, not just a viewport. Failures are reported as
/// [`RenderError::Rasterization`]; the caller owns retry decisions.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for std::sync::Arc<R> {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        (**self).rasterize(surface)
    }
}
