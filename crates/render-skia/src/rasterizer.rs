use crate::fonts::{FontBook, ShapedLine};
use folio_layout::{BoxFill, NodeKind, TextRun};
use folio_render_core::{Bitmap, Rasterizer, RenderError, RenderSurface};
use folio_types::{Color, Rect};
use std::sync::Arc;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Device pixels per surface unit unless configured otherwise.
pub const DEFAULT_SCALE: f32 = 2.0;

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Paints composed surfaces with tiny-skia.
#[derive(Debug, Clone)]
pub struct SkiaRasterizer {
    scale: f32,
    fonts: Arc<FontBook>,
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self::new(Arc::new(FontBook::empty()))
    }
}

impl SkiaRasterizer {
    pub fn new(fonts: Arc<FontBook>) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            fonts,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn fonts(&self) -> &Arc<FontBook> {
        &self.fonts
    }

    fn paint_fill(&self, pixmap: &mut Pixmap, rect: &Rect, fill: &BoxFill, ts: Transform) {
        // An empty skill bar has a zero-width accent fill.
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let paint = solid(fill.color);
        let path = if fill.corner_radius > 0.0 {
            rounded_rect(rect, fill.corner_radius)
        } else {
            tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
                .map(PathBuilder::from_rect)
        };
        if let Some(path) = path {
            pixmap.fill_path(&path, &paint, FillRule::Winding, ts, None);
        }
    }

    fn paint_text(&self, pixmap: &mut Pixmap, rect: &Rect, run: &TextRun, ts: Transform) -> bool {
        let Some(face) = self.fonts.face_for(run.weight).and_then(|f| f.as_face()) else {
            return false;
        };
        let Some(line) = self.fonts.shape(&run.text, run.font_size, run.weight) else {
            return false;
        };

        let paint = solid(run.color);
        let baseline = baseline(rect, &line);
        for glyph in &line.glyphs {
            let mut builder = GlyphPath(PathBuilder::new());
            if face
                .outline_glyph(ttf_parser::GlyphId(glyph.id), &mut builder)
                .is_none()
            {
                // Spaces and other blank glyphs.
                continue;
            }
            let Some(path) = builder.0.finish() else {
                continue;
            };
            let glyph_ts = ts
                .pre_translate(rect.x + glyph.x, baseline + glyph.y)
                .pre_scale(line.scale, -line.scale);
            pixmap.fill_path(&path, &paint, FillRule::Winding, glyph_ts, None);
        }
        true
    }
}

impl Rasterizer for SkiaRasterizer {
    fn rasterize(&self, surface: &RenderSurface<'_>) -> Result<Bitmap, RenderError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::Rasterization(format!(
                "invalid raster scale {}",
                self.scale
            )));
        }
        let content = surface.content();
        let size = surface.size();
        let width = (size.width * self.scale).ceil() as u32;
        let height = (size.height * self.scale).ceil() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::Rasterization(format!(
                "cannot allocate a {}x{} pixmap for surface {:?}",
                width,
                height,
                surface.id()
            ))
        })?;
        log::debug!(
            "Rasterizing surface {:?} at {}x{} px ({} nodes)",
            surface.id(),
            width,
            height,
            content.nodes.len()
        );

        pixmap.fill(skia_color(content.background));
        let ts = Transform::from_scale(self.scale, self.scale);

        let mut skipped_text = 0usize;
        for node in &content.nodes {
            match &node.kind {
                NodeKind::Fill(fill) => self.paint_fill(&mut pixmap, &node.rect, fill, ts),
                NodeKind::Text(run) => {
                    if !self.paint_text(&mut pixmap, &node.rect, run, ts) {
                        skipped_text += 1;
                    }
                }
            }
        }
        if skipped_text > 0 {
            log::warn!(
                "No usable font face; skipped {} text node(s) on surface {:?}",
                skipped_text,
                surface.id()
            );
        }

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Bitmap::from_rgba(width, height, data)
    }
}

/// Vertically centers the line box inside the node's rect.
fn baseline(rect: &Rect, line: &ShapedLine) -> f32 {
    let content_height = line.ascender - line.descender;
    rect.y + (rect.height - content_height) / 2.0 + line.ascender
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn rounded_rect(rect: &Rect, radius: f32) -> Option<tiny_skia::Path> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    if r <= 0.0 {
        return tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
            .map(PathBuilder::from_rect);
    }
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Feeds ttf-parser outlines (font units, y up) into a tiny-skia path.
struct GlyphPath(PathBuilder);

impl ttf_parser::OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
