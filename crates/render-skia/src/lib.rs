//! Software rasterizer backend built on tiny-skia.
//!
//! `SkiaRasterizer` implements the `Rasterizer` contract from
//! `folio-render-core`; `FontBook` supplies shaped text both to the
//! compositor (as a `TextMeasurer`) and to the painter.

mod fonts;
mod rasterizer;

pub use fonts::{FontBook, FontError, FontInstance, PlacedGlyph, ShapedLine};
pub use rasterizer::{DEFAULT_SCALE, SkiaRasterizer};
