//! Font resolution and shaping for the software rasterizer.
//!
//! A `FontBook` holds at most one regular and one bold sans-serif face. The
//! same book measures text for the compositor and paints it in the
//! rasterizer, so wrapped lines fit the width they were wrapped to.

use folio_layout::{ApproximateMetrics, FontWeight, TextMeasurer};
use rustybuzz::UnicodeBuffer;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Font data is not a parseable OpenType face")]
    InvalidFace,

    #[error("Failed to read font file: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared, immutable font bytes plus the face index inside them.
#[derive(Clone)]
pub struct FontInstance {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontInstance {
    pub fn new(data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let instance = Self {
            data: Arc::new(data),
            index,
        };
        if instance.as_face().is_none() {
            return Err(FontError::InvalidFace);
        }
        Ok(instance)
    }

    /// Parses a face view over the shared bytes. Parsing only reads the
    /// table directory, so this is cheap enough to do per text run.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

/// One glyph of a shaped run, positioned in pixels relative to the run's
/// origin on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub id: u16,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapedLine {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: f32,
    /// Font units to pixels.
    pub scale: f32,
    pub ascender: f32,
    pub descender: f32,
}

#[derive(Debug, Clone, Default)]
pub struct FontBook {
    regular: Option<FontInstance>,
    bold: Option<FontInstance>,
}

impl FontBook {
    /// A book with no faces. Text is measured approximately and not painted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves regular and bold sans-serif faces from the fonts installed
    /// on this machine.
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} system font faces", db.len());
        Self::from_database(&db)
    }

    /// Uses caller-supplied font files. Without a bold face, bold text is
    /// painted with the regular one.
    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self, FontError> {
        let regular = FontInstance::new(regular, 0)?;
        let bold = bold.map(|data| FontInstance::new(data, 0)).transpose()?;
        Ok(Self {
            regular: Some(regular),
            bold,
        })
    }

    pub fn from_files(
        regular: impl AsRef<std::path::Path>,
        bold: Option<&std::path::Path>,
    ) -> Result<Self, FontError> {
        let regular = std::fs::read(regular)?;
        let bold = bold.map(std::fs::read).transpose()?;
        Self::from_bytes(regular, bold)
    }

    fn from_database(db: &fontdb::Database) -> Self {
        let regular = load_face(db, fontdb::Weight::NORMAL);
        let bold = load_face(db, fontdb::Weight::BOLD);
        if regular.is_none() {
            log::warn!("No sans-serif system font found; text will not be painted");
        }
        Self { regular, bold }
    }

    pub fn has_faces(&self) -> bool {
        self.regular.is_some()
    }

    pub fn face_for(&self, weight: FontWeight) -> Option<&FontInstance> {
        match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref(),
        }
    }

    /// Shapes a single line. `None` when no face is available.
    pub fn shape(&self, text: &str, font_size: f32, weight: FontWeight) -> Option<ShapedLine> {
        let face = self.face_for(weight)?.as_face()?;
        let scale = font_size / face.units_per_em() as f32;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let shaped = rustybuzz::shape(&face, &[], buffer);

        let mut glyphs = Vec::with_capacity(shaped.len());
        let mut pen = 0.0;
        for (info, pos) in shaped.glyph_infos().iter().zip(shaped.glyph_positions()) {
            glyphs.push(PlacedGlyph {
                id: info.glyph_id as u16,
                x: pen + pos.x_offset as f32 * scale,
                y: -(pos.y_offset as f32 * scale),
            });
            pen += pos.x_advance as f32 * scale;
        }

        Some(ShapedLine {
            glyphs,
            width: pen,
            scale,
            ascender: face.ascender() as f32 * scale,
            descender: face.descender() as f32 * scale,
        })
    }
}

impl TextMeasurer for FontBook {
    fn advance(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        match self.shape(text, font_size, weight) {
            Some(line) => line.width,
            None => ApproximateMetrics.advance(text, font_size, weight),
        }
    }
}

fn load_face(db: &fontdb::Database, weight: fontdb::Weight) -> Option<FontInstance> {
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query)?;
    if let Some(face) = db.face(id) {
        log::debug!("Matched font: {:?} ({})", face.families, face.post_script_name);
    }
    db.with_face_data(id, |data, index| FontInstance::new(data.to_vec(), index))?
        .map_err(|e| log::warn!("Skipping system font {:?}: {}", id, e))
        .ok()
}
