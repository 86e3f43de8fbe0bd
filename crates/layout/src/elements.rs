//! The composed surface: a fixed-width, variable-height list of absolutely
//! positioned text and box nodes, ready to be painted by a rasterizer.

use folio_types::{Color, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// A single line of text. Wrapping has already happened.
    pub text: String,
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxFill {
    pub color: Color,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Text(TextRun),
    Fill(BoxFill),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceNode {
    /// Position in surface pixels, origin at the top-left corner.
    pub rect: Rect,
    pub kind: NodeKind,
}

impl SurfaceNode {
    pub fn text(&self) -> Option<&TextRun> {
        match &self.kind {
            NodeKind::Text(run) => Some(run),
            NodeKind::Fill(_) => None,
        }
    }

    pub fn fill(&self) -> Option<&BoxFill> {
        match &self.kind {
            NodeKind::Fill(fill) => Some(fill),
            NodeKind::Text(_) => None,
        }
    }
}

/// Description of one render surface. `width` is fixed by the layout config;
/// `natural_height` is whatever the content needed.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDescriptor {
    pub width: f32,
    pub natural_height: f32,
    pub background: Color,
    /// Nodes in paint order.
    pub nodes: Vec<SurfaceNode>,
}

impl SurfaceDescriptor {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.natural_height)
    }

    pub fn text_runs(&self) -> impl Iterator<Item = (&Rect, &TextRun)> {
        self.nodes
            .iter()
            .filter_map(|n| n.text().map(|run| (&n.rect, run)))
    }

    /// Returns `true` if any text node contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|(_, run)| run.text.contains(needle))
    }
}
