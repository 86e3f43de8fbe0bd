use crate::error::ExportError;
use folio_layout::{LayoutConfig, TruncationPolicy};
use folio_pdf_composer::PageFormat;
use serde::Deserialize;
use std::path::Path;

/// Tunables for one exporter. Every field is optional in JSON; missing ones
/// take the documented defaults.
///
/// ```json
/// {
///   "layout": { "pageWidthPx": 800, "fontScale": 1.0 },
///   "truncation": { "experience": 3, "skills": null },
///   "page": { "widthMm": 210, "heightMm": 297, "bandHeightMm": 295 },
///   "rasterScale": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    pub layout: LayoutConfig,
    pub truncation: TruncationPolicy,
    pub page: PageFormat,
    /// Device pixels per layout pixel when rasterizing.
    pub raster_scale: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            truncation: TruncationPolicy::default(),
            page: PageFormat::A4,
            raster_scale: folio_render_skia::DEFAULT_SCALE,
        }
    }
}

impl ExportConfig {
    pub fn from_json(source: &str) -> Result<Self, ExportError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ExportError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        self.layout.validate()?;
        self.page.validate()?;
        if !self.raster_scale.is_finite() || self.raster_scale <= 0.0 {
            return Err(ExportError::Config(format!(
                "rasterScale must be a positive number, got {}",
                self.raster_scale
            )));
        }
        Ok(())
    }
}
