use crate::error::RenderError;
use image::{Rgba, RgbaImage};

/// The output of a rasterizer: one RGBA image covering the whole surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Builds a bitmap from tightly packed, non-premultiplied RGBA rows.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RenderError::Rasterization(format!(
                "pixel buffer holds {} bytes, {}x{} RGBA needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        RgbaImage::from_raw(width, height, data)
            .map(Self::new)
            .ok_or_else(|| RenderError::Rasterization("pixel buffer rejected".into()))
    }

    /// A bitmap of one solid color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    pub fn width_px(&self) -> u32 {
        self.image.width()
    }

    pub fn height_px(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }
}
