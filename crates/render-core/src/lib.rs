//! Core rendering abstractions for profile exports.
//!
//! This crate provides the contract between the export pipeline and whatever
//! turns a composed surface into pixels:
//! - `Rasterizer` trait, the capability a backend provides
//! - `Bitmap`, the rasterizer's output
//! - `with_render_surface`, the scoped lifetime of the transient surface
//! - Error types for rendering operations

mod error;
pub mod surface;
mod traits;
mod types;

pub use error::RenderError;
pub use surface::{RenderSurface, SurfaceHost, SurfaceId, with_render_surface};
pub use traits::Rasterizer;
pub use types::Bitmap;
