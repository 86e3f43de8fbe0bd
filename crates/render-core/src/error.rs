use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Rasterization failed: {0}")]
    Rasterization(String),
}
