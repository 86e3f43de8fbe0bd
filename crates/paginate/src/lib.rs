//! Raster pagination.
//!
//! A composed profile is rasterized as one bitmap as tall as its content.
//! This crate cuts it into pages of a fixed physical height:
//! - `plan_bands` decides, in physical units, which vertical band of the
//!   image each page shows
//! - `paginate` copies each band's pixel rows into its own page image

mod bands;
mod slicer;

pub use bands::{Band, image_height_units, plan_bands};
pub use slicer::{PageImage, paginate};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaginateError {
    #[error("Bitmap of {width}x{height} pixels cannot be paginated.")]
    InvalidBitmap { width: u32, height: u32 },
    #[error("Page size {width}x{height} must be positive and finite.")]
    InvalidPageSize { width: f32, height: f32 },
    #[error("Image height {0} must be finite and not negative.")]
    InvalidImageHeight(f32),
}
