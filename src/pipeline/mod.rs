//! Profile export pipeline orchestration.
//!
//! - [`ExporterBuilder`]: fluent builder for constructing exporters
//! - [`ProfileExporter`]: runs Select → Compose → Render → Paginate → Assemble
//! - [`DocumentSink`]: where finished documents go
//! - [`export_all`]: concurrent exports on the tokio blocking pool
//!
//! # Example
//!
//! ```ignore
//! use folio::{ExporterBuilder, MemorySink};
//!
//! let exporter = ExporterBuilder::new()
//!     .with_config_file("export.json")?
//!     .with_system_fonts(true)
//!     .build()?;
//!
//! let mut sink = MemorySink::new();
//! exporter.export_to(&profile, &mut sink)?;
//! ```

mod builder;
pub mod config;
mod naming;
mod orchestrator;
pub mod sink;

pub use builder::ExporterBuilder;
pub use config::ExportConfig;
pub use naming::artifact_file_name;
pub use orchestrator::{ExportArtifact, ProfileExporter, export_all};
pub use sink::{DocumentSink, FileSink, MemorySink};
