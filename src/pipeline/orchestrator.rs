// src/pipeline/orchestrator.rs
use super::config::ExportConfig;
use super::naming::artifact_file_name;
use super::sink::DocumentSink;
use crate::error::ExportError;
use folio_layout::{TextMeasurer, compose_profile};
use folio_paginate::{PageImage, paginate};
use folio_pdf_composer::assemble;
use folio_render_core::{Rasterizer, SurfaceHost, with_render_surface};
use folio_types::Profile;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// A finished export: the page images and the assembled PDF bytes.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub pages: Vec<PageImage>,
    pub document: Vec<u8>,
}

impl ExportArtifact {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Runs the export pipeline for one profile at a time. Shareable across
/// threads; exports hold no state beyond the surface host's bookkeeping.
pub struct ProfileExporter {
    config: ExportConfig,
    rasterizer: Arc<dyn Rasterizer>,
    measurer: Arc<dyn TextMeasurer>,
    host: Arc<SurfaceHost>,
}

impl std::fmt::Debug for ProfileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileExporter")
            .field("config", &self.config)
            .field("attached_surfaces", &self.host.attached_count())
            .finish()
    }
}

impl ProfileExporter {
    pub(crate) fn new(
        config: ExportConfig,
        rasterizer: Arc<dyn Rasterizer>,
        measurer: Arc<dyn TextMeasurer>,
        host: Arc<SurfaceHost>,
    ) -> Self {
        Self {
            config,
            rasterizer,
            measurer,
            host,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The host render surfaces are attached to while rasterizing.
    pub fn surface_host(&self) -> &Arc<SurfaceHost> {
        &self.host
    }

    /// Select, compose, rasterize on a scoped surface, paginate and assemble.
    ///
    /// Stages run strictly in order and the first failure aborts the export.
    /// The render surface is always released before this returns.
    pub fn export(&self, profile: &Profile) -> Result<ExportArtifact, ExportError> {
        let descriptor = compose_profile(
            profile,
            &self.config.truncation,
            self.config.layout,
            self.measurer.as_ref(),
        )?;
        // Composition has already rejected profiles without a name.
        let name = profile.identity.display_name().unwrap_or_default();
        log::debug!(
            "Composed '{}' into {}x{} surface with {} nodes",
            name,
            descriptor.width,
            descriptor.natural_height,
            descriptor.nodes.len()
        );

        let bitmap = with_render_surface(&self.host, &descriptor, |surface| {
            self.rasterizer.rasterize(surface)
        })?;

        let page = &self.config.page;
        let pages = paginate(&bitmap, page.width_mm, page.band_height_mm)?;
        let document = assemble(&pages, page, name)?;

        let artifact = ExportArtifact {
            file_name: artifact_file_name(name),
            pages,
            document,
        };
        log::info!(
            "Exported '{}' as {} ({} page(s))",
            name,
            artifact.file_name,
            artifact.page_count()
        );
        Ok(artifact)
    }

    /// Exports `profile` and hands the document to `sink`. Nothing is
    /// delivered unless every stage succeeded.
    pub fn export_to(
        &self,
        profile: &Profile,
        sink: &mut dyn DocumentSink,
    ) -> Result<ExportArtifact, ExportError> {
        let artifact = self.export(profile)?;
        sink.deliver(&artifact)?;
        Ok(artifact)
    }
}

/// Exports every profile on the blocking pool, concurrently. Results come
/// back in input order; one failing export does not affect the others.
pub async fn export_all(
    exporter: Arc<ProfileExporter>,
    profiles: Vec<Profile>,
) -> Vec<Result<ExportArtifact, ExportError>> {
    let count = profiles.len();
    let mut tasks: JoinSet<(usize, Result<ExportArtifact, ExportError>)> = JoinSet::new();
    for (index, profile) in profiles.into_iter().enumerate() {
        let exporter = Arc::clone(&exporter);
        tasks.spawn_blocking(move || (index, exporter.export(&profile)));
    }

    let mut results = BTreeMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => {
                results.insert(index, result);
            }
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => log::error!("Export task was cancelled: {}", e),
        }
    }
    log::debug!("Finished {} of {} exports", results.len(), count);
    (0..count)
        .map(|index| {
            results.remove(&index).unwrap_or_else(|| {
                Err(ExportError::Io(std::io::Error::new(
                    std::io::ErrorKind::Interrupted,
                    "export task was cancelled",
                )))
            })
        })
        .collect()
}
