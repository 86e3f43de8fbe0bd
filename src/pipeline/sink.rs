use crate::error::ExportError;
use crate::pipeline::orchestrator::ExportArtifact;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives finished documents. Only called after an export fully succeeded.
pub trait DocumentSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError>;
}

/// Writes each document as `<dir>/<file_name>`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DocumentSink for FileSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.document).map_err(|e| {
            ExportError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write '{}': {}", path.display(), e),
            ))
        })?;
        log::info!(
            "Wrote {} ({} page(s), {} bytes)",
            path.display(),
            artifact.pages.len(),
            artifact.document.len()
        );
        self.written.push(path);
        Ok(())
    }
}

/// Keeps delivered documents in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: Vec<ExportArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for MemorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), ExportError> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
