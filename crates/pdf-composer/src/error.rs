use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Cannot assemble a document without pages")]
    NoPages,

    #[error("Invalid page format: {0}")]
    InvalidPageFormat(String),

    #[error("Failed to encode page image: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    Pdf(String),
}
