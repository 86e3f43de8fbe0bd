// src/error.rs
use folio_layout::LayoutError;
use folio_paginate::PaginateError;
use folio_pdf_composer::ComposerError;
use folio_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a profile export. No variant is produced after a
/// document has been handed to a sink.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Pagination failed: {0}")]
    Paginate(#[from] PaginateError),

    #[error("Document assembly failed: {0}")]
    Compose(#[from] ComposerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
