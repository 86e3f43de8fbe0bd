// src/pipeline/builder.rs
use super::config::ExportConfig;
use super::orchestrator::ProfileExporter;
use crate::error::ExportError;
use folio_layout::TextMeasurer;
use folio_render_core::{Rasterizer, SurfaceHost};
use folio_render_skia::{FontBook, SkiaRasterizer};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `ProfileExporter`.
///
/// By default the exporter paints with [`SkiaRasterizer`] and measures text
/// with the same [`FontBook`], so wrapped lines fit the painted glyphs.
#[derive(Default)]
pub struct ExporterBuilder {
    config: ExportConfig,
    rasterizer: Option<Arc<dyn Rasterizer>>,
    measurer: Option<Arc<dyn TextMeasurer>>,
    fonts: Option<Arc<FontBook>>,
    system_fonts: bool,
    host: Option<Arc<SurfaceHost>>,
}

impl ExporterBuilder {
    /// Creates a builder with the default configuration and no fonts loaded.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ExportError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    /// Replaces the default software rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: Arc<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    /// Replaces the text measurer used for line breaking.
    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Uses an explicit font book for the default rasterizer and measurer.
    pub fn with_fonts(mut self, fonts: Arc<FontBook>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Scans the host system for a sans-serif regular and bold face.
    /// Ignored when `with_fonts` supplied a font book.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.system_fonts = system_fonts;
        self
    }

    /// Shares a surface host between several exporters.
    pub fn with_surface_host(mut self, host: Arc<SurfaceHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Validates the configuration and creates the `ProfileExporter`.
    pub fn build(self) -> Result<ProfileExporter, ExportError> {
        self.config.validate()?;

        let fonts = match self.fonts {
            Some(fonts) => fonts,
            None if self.system_fonts => Arc::new(FontBook::system()),
            None => Arc::new(FontBook::empty()),
        };
        if !fonts.has_faces() {
            log::info!("No fonts configured; text is measured approximately and not painted.");
        }

        let rasterizer = self.rasterizer.unwrap_or_else(|| {
            Arc::new(SkiaRasterizer::new(Arc::clone(&fonts)).with_scale(self.config.raster_scale))
        });
        let measurer = self
            .measurer
            .unwrap_or_else(|| Arc::clone(&fonts) as Arc<dyn TextMeasurer>);
        let host = self.host.unwrap_or_default();

        Ok(ProfileExporter::new(self.config, rasterizer, measurer, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let exporter = ExporterBuilder::new().build().unwrap();
        assert_eq!(exporter.config(), &ExportConfig::default());
        assert_eq!(exporter.surface_host().attached_count(), 0);
    }

    #[test]
    fn rejects_invalid_config_at_build_time() {
        let mut config = ExportConfig::default();
        config.raster_scale = -1.0;
        assert!(matches!(
            ExporterBuilder::new().with_config(config).build(),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        assert!(matches!(
            ExporterBuilder::new().with_config_file("/no/such/export.json"),
            Err(ExportError::Io(_))
        ));
    }

    #[test]
    fn shares_an_explicit_surface_host() {
        let host = Arc::new(SurfaceHost::new());
        let exporter = ExporterBuilder::new()
            .with_surface_host(Arc::clone(&host))
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(exporter.surface_host(), &host));
    }
}
