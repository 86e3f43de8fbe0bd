//! Profile-to-PDF export.
//!
//! A [`Profile`] goes through section selection and fixed-width composition,
//! is rasterized on a scoped off-screen surface, cut into page-height bands
//! and assembled into a multi-page PDF:
//!
//! ```ignore
//! use folio::{ExporterBuilder, FileSink};
//!
//! let exporter = ExporterBuilder::new().with_system_fonts(true).build()?;
//! let mut sink = FileSink::new("out");
//! exporter.export_to(&profile, &mut sink)?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::ExportError;
pub use pipeline::{
    DocumentSink, ExportArtifact, ExportConfig, ExporterBuilder, FileSink, MemorySink,
    ProfileExporter, artifact_file_name, export_all,
};

pub use folio_layout::{LayoutConfig, LayoutError, TruncationPolicy};
pub use folio_paginate::PageImage;
pub use folio_pdf_composer::PageFormat;
pub use folio_render_core::{Bitmap, Rasterizer, RenderError, RenderSurface, SurfaceHost};
pub use folio_render_skia::{FontBook, SkiaRasterizer};
pub use folio_types::profile::*;
