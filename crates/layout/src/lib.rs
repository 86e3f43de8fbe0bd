use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Profile is missing required field '{0}'.")]
    MissingRequiredField(&'static str),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod compose;
pub mod config;
pub mod elements;
pub mod format;
pub mod select;
pub mod text;

pub use self::compose::{Compositor, Header, compose_profile};
pub use self::config::{LayoutConfig, TruncationPolicy};
pub use self::elements::{BoxFill, FontWeight, NodeKind, SurfaceDescriptor, SurfaceNode, TextRun};
pub use self::select::{Column, Section, SectionKind, SelectedSkill, select, select_default};
pub use self::text::{ApproximateMetrics, TextMeasurer};

// Re-export geometry types used in descriptors to prevent type mismatches
pub use folio_types::geometry::{Rect, Size};

#[cfg(test)]
mod compose_test;
