use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// The tunables of the document compositor.
///
/// Everything below these (spacing, typography, colors) is fixed by the
/// document design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Width of the composed surface in CSS-style pixels. Defaults to `800`.
    pub page_width_px: f32,
    /// Relative width of the primary (experience/projects/research) column.
    pub primary_column_weight: f32,
    /// Relative width of the secondary (skills/education/certifications) column.
    pub secondary_column_weight: f32,
    /// Multiplier applied to every font size and line height.
    pub font_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_px: 800.0,
            primary_column_weight: 3.0,
            secondary_column_weight: 2.0,
            font_scale: 1.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("pageWidthPx", self.page_width_px),
            ("primaryColumnWeight", self.primary_column_weight),
            ("secondaryColumnWeight", self.secondary_column_weight),
            ("fontScale", self.font_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// How many items of each collection make it into the document.
///
/// Limits are applied to the caller-supplied order; `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TruncationPolicy {
    pub experience: Option<usize>,
    pub projects: Option<usize>,
    pub research: Option<usize>,
    pub education: Option<usize>,
    pub certifications: Option<usize>,
    pub skills: Option<usize>,
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        Self {
            experience: Some(3),
            projects: Some(2),
            research: Some(2),
            education: Some(2),
            certifications: Some(3),
            skills: None,
        }
    }
}

impl TruncationPolicy {
    /// A policy that keeps every item of every collection.
    pub fn unbounded() -> Self {
        Self {
            experience: None,
            projects: None,
            research: None,
            education: None,
            certifications: None,
            skills: None,
        }
    }

    /// Takes the prefix of `items` allowed by `limit`.
    pub fn prefix<T>(items: &[T], limit: Option<usize>) -> &[T] {
        match limit {
            Some(n) => &items[..items.len().min(n)],
            None => items,
        }
    }
}
