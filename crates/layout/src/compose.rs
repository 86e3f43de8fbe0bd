//! Lays selected sections out on a single fixed-width surface.
//!
//! The design is fixed: a dark header band spanning the full width, then two
//! columns side by side. The primary column holds the summary, experience,
//! projects and research; the secondary column holds skills, education and
//! certifications. Only the width is fixed, the surface grows downwards to
//! fit whatever the columns need.

use crate::config::{LayoutConfig, TruncationPolicy};
use crate::elements::{BoxFill, FontWeight, NodeKind, SurfaceDescriptor, SurfaceNode, TextRun};
use crate::format::{date_range, month_year};
use crate::select::{Column, Section, SelectedSkill, select};
use crate::text::{TextMeasurer, normalize_text, paragraphs, wrap_text};
use crate::LayoutError;
use folio_types::{
    Certification, Color, Education, Experience, Identity, Profile, ProfileSummary, Project, Rect,
    Research,
};

const MARGIN: f32 = 32.0;
const GUTTER: f32 = 24.0;
const SECTION_GAP: f32 = 20.0;
const ITEM_GAP: f32 = 12.0;
const LINE_HEIGHT: f32 = 1.4;
const BULLET_INDENT: f32 = 12.0;
const RULE_HEIGHT: f32 = 2.0;
const BAR_HEIGHT: f32 = 6.0;

const HEADER_BG: Color = Color::rgb(0x1e, 0x29, 0x3b);
const ACCENT: Color = Color::rgb(0x25, 0x63, 0xeb);
const RULE: Color = Color::rgb(0xbf, 0xdb, 0xfe);
const TRACK: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const INK: Color = Color::rgb(0x0f, 0x17, 0x2a);
const BODY: Color = Color::rgb(0x33, 0x41, 0x55);
const MUTED: Color = Color::rgb(0x47, 0x55, 0x69);

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f32,
    weight: FontWeight,
    color: Color,
}

impl TextStyle {
    const fn new(size: f32, weight: FontWeight, color: Color) -> Self {
        Self { size, weight, color }
    }
}

const NAME: TextStyle = TextStyle::new(28.0, FontWeight::Bold, Color::WHITE);
const HEADLINE: TextStyle = TextStyle::new(15.0, FontWeight::Regular, Color::rgb(0xcb, 0xd5, 0xe1));
const CONTACT: TextStyle = TextStyle::new(12.0, FontWeight::Regular, TRACK);
const LINKS: TextStyle = TextStyle::new(12.0, FontWeight::Regular, Color::rgb(0x93, 0xc5, 0xfd));
const SECTION_TITLE: TextStyle = TextStyle::new(16.0, FontWeight::Bold, ACCENT);
const ITEM_TITLE: TextStyle = TextStyle::new(14.0, FontWeight::Bold, INK);
const META: TextStyle = TextStyle::new(11.5, FontWeight::Regular, MUTED);
const TEXT: TextStyle = TextStyle::new(12.5, FontWeight::Regular, BODY);

/// Header data: who the document is about and how to reach them.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub identity: &'a Identity,
    pub summary: &'a ProfileSummary,
}

impl<'a> Header<'a> {
    pub fn from_profile(profile: &'a Profile) -> Self {
        Self {
            identity: &profile.identity,
            summary: &profile.summary,
        }
    }
}

/// Writes nodes top-down into a vertical strip of the surface.
struct ColumnWriter<'m> {
    measurer: &'m dyn TextMeasurer,
    font_scale: f32,
    x: f32,
    width: f32,
    y: f32,
    nodes: Vec<SurfaceNode>,
}

impl<'m> ColumnWriter<'m> {
    fn new(measurer: &'m dyn TextMeasurer, font_scale: f32, x: f32, y: f32, width: f32) -> Self {
        Self {
            measurer,
            font_scale,
            x,
            width,
            y,
            nodes: Vec::new(),
        }
    }

    fn line_height(&self, style: TextStyle) -> f32 {
        style.size * self.font_scale * LINE_HEIGHT
    }

    fn gap(&mut self, px: f32) {
        self.y += px;
    }

    fn fill(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.nodes.push(SurfaceNode {
            rect,
            kind: NodeKind::Fill(BoxFill {
                color,
                corner_radius,
            }),
        });
    }

    fn push_line(&mut self, x: f32, text: String, style: TextStyle) {
        let size = style.size * self.font_scale;
        let width = self.measurer.advance(&text, size, style.weight);
        let height = self.line_height(style);
        self.nodes.push(SurfaceNode {
            rect: Rect::new(x, self.y, width, height),
            kind: NodeKind::Text(TextRun {
                text,
                font_size: size,
                weight: style.weight,
                color: style.color,
            }),
        });
    }

    /// Wraps `text` to the column width (less `indent`) and advances past it.
    fn text(&mut self, text: &str, style: TextStyle, indent: f32) {
        let size = style.size * self.font_scale;
        let max_width = (self.width - indent).max(1.0);
        for line in wrap_text(self.measurer, text, size, style.weight, max_width) {
            self.push_line(self.x + indent, line, style);
            self.y += self.line_height(style);
        }
    }

    fn optional_text(&mut self, text: Option<&str>, style: TextStyle) {
        if let Some(text) = text.map(normalize_text).filter(|t| !t.is_empty()) {
            self.text(&text, style, 0.0);
        }
    }

    fn bullet(&mut self, text: &str, style: TextStyle) {
        let text = normalize_text(text);
        if text.is_empty() {
            return;
        }
        self.push_line(self.x, "•".to_string(), style);
        self.text(&text, style, BULLET_INDENT);
    }

    fn labelled_list(&mut self, label: &str, items: &[String], style: TextStyle) {
        let items: Vec<String> = items
            .iter()
            .map(|s| normalize_text(s))
            .filter(|s| !s.is_empty())
            .collect();
        if !items.is_empty() {
            self.text(&format!("{}: {}", label, items.join(", ")), style, 0.0);
        }
    }

    fn section_title(&mut self, title: &str) {
        self.text(title, SECTION_TITLE, 0.0);
        self.gap(2.0);
        self.fill(
            Rect::new(self.x, self.y, self.width, RULE_HEIGHT),
            RULE,
            0.0,
        );
        self.gap(RULE_HEIGHT + 8.0);
    }

    fn section(&mut self, section: &Section<'_>) {
        self.section_title(section.kind().title());
        match section {
            Section::Summary(summary) => self.summary(summary),
            Section::Experience(items) => self.items(items, Self::experience),
            Section::Projects(items) => self.items(items, Self::project),
            Section::Research(items) => self.items(items, Self::research),
            Section::Skills(skills) => self.items(skills, Self::skill),
            Section::Education(items) => self.items(items, Self::education),
            Section::Certifications(items) => self.items(items, Self::certification),
        }
        self.gap(SECTION_GAP);
    }

    fn items<T>(&mut self, items: &[T], mut item: impl FnMut(&mut Self, &T)) {
        for (i, entry) in items.iter().enumerate() {
            if i > 0 {
                self.gap(ITEM_GAP);
            }
            item(self, entry);
        }
    }

    fn summary(&mut self, summary: &ProfileSummary) {
        let bio = summary.bio.as_deref().map(paragraphs).unwrap_or_default();
        for (i, paragraph) in bio.iter().enumerate() {
            if i > 0 {
                self.gap(6.0);
            }
            self.text(paragraph, TEXT, 0.0);
        }
    }

    fn experience(&mut self, e: &Experience) {
        self.text(&normalize_text(&e.title), ITEM_TITLE, 0.0);
        let place = join_present(&[Some(e.company.as_str()), e.location.as_deref()], " · ");
        self.optional_text(place.as_deref(), META);
        self.optional_text(
            date_range(e.start_date, e.end_date, e.currently_working).as_deref(),
            META,
        );
        self.labelled_list("Skills", &e.skills, TEXT);
    }

    fn project(&mut self, p: &Project) {
        self.text(&normalize_text(&p.title), ITEM_TITLE, 0.0);
        let started = p.start_date.map(|d| format!("Started {}", month_year(d)));
        self.optional_text(started.as_deref(), META);
        for feature in &p.key_features {
            self.bullet(feature, TEXT);
        }
        self.labelled_list("Technologies", &p.technologies, TEXT);
    }

    fn research(&mut self, r: &Research) {
        self.text(&normalize_text(&r.title), ITEM_TITLE, 0.0);
        let published = r.publication_date.map(month_year);
        let meta = join_present(&[r.publisher.as_deref(), published.as_deref()], " · ");
        self.optional_text(meta.as_deref(), META);
        let field = r.field.as_deref().map(|f| format!("Field: {}", f));
        self.optional_text(field.as_deref(), TEXT);
        self.labelled_list("Keywords", &r.keywords, TEXT);
    }

    fn skill(&mut self, skill: &SelectedSkill<'_>) {
        let percent = format!("{:.0}%", skill.proficiency);
        let size = META.size * self.font_scale;
        let percent_width = self.measurer.advance(&percent, size, META.weight);
        let row_y = self.y;

        // Name on the left, percentage right-aligned on the same row.
        let saved_width = self.width;
        self.width = (self.width - percent_width - 8.0).max(1.0);
        self.text(&normalize_text(skill.name), TEXT, 0.0);
        self.width = saved_width;
        let name_bottom = self.y;

        self.y = row_y;
        self.push_line(self.x + self.width - percent_width, percent, META);
        self.y = name_bottom.max(row_y + self.line_height(META));

        self.gap(2.0);
        let track = Rect::new(self.x, self.y, self.width, BAR_HEIGHT);
        self.fill(track, TRACK, BAR_HEIGHT / 2.0);
        let filled = track.width * skill.ratio();
        if filled > 0.0 {
            self.fill(
                Rect::new(track.x, track.y, filled, BAR_HEIGHT),
                ACCENT,
                BAR_HEIGHT / 2.0,
            );
        }
        self.gap(BAR_HEIGHT);
    }

    fn education(&mut self, e: &Education) {
        let degree = match e.field_of_study.as_deref().map(normalize_text) {
            Some(field) if !field.is_empty() => format!("{} in {}", normalize_text(&e.degree), field),
            _ => normalize_text(&e.degree),
        };
        self.text(&degree, ITEM_TITLE, 0.0);
        self.optional_text(Some(e.school.as_str()), META);
        self.optional_text(
            date_range(e.start_date, e.end_date, e.currently_studying).as_deref(),
            META,
        );
        let grade = e.grade.as_deref().map(|g| format!("Grade: {}", g));
        self.optional_text(grade.as_deref(), TEXT);
    }

    fn certification(&mut self, c: &Certification) {
        self.text(&normalize_text(&c.title), ITEM_TITLE, 0.0);
        let issued = c.issue_date.map(month_year);
        let meta = join_present(&[Some(c.issuer.as_str()), issued.as_deref()], " · ");
        self.optional_text(meta.as_deref(), META);
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, LayoutError> {
    value
        .map(normalize_text)
        .filter(|v| !v.is_empty())
        .ok_or(LayoutError::MissingRequiredField(field))
}

fn join_present(parts: &[Option<&str>], separator: &str) -> Option<String> {
    let parts: Vec<String> = parts
        .iter()
        .flatten()
        .map(|p| normalize_text(p))
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

/// Turns selected sections into a [`SurfaceDescriptor`].
pub struct Compositor<'m> {
    config: LayoutConfig,
    measurer: &'m dyn TextMeasurer,
}

impl<'m> Compositor<'m> {
    pub fn new(config: LayoutConfig, measurer: &'m dyn TextMeasurer) -> Self {
        Self { config, measurer }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn compose(
        &self,
        header: Header<'_>,
        sections: &[Section<'_>],
    ) -> Result<SurfaceDescriptor, LayoutError> {
        self.config.validate()?;
        // Control characters alone do not make a name or an address.
        let name = required(header.identity.display_name(), "name")?;
        let email = required(header.identity.contact_email(), "email")?;

        let width = self.config.page_width_px;
        let scale = self.config.font_scale;
        let content_width = (width - 2.0 * MARGIN).max(1.0);

        let mut head = ColumnWriter::new(self.measurer, scale, MARGIN, MARGIN, content_width);
        head.text(&name, NAME, 0.0);
        if let Some(headline) = header.summary.headline.as_deref() {
            head.gap(4.0);
            head.optional_text(Some(headline), HEADLINE);
        }
        head.gap(8.0);
        let contact = join_present(
            &[
                Some(email.as_str()),
                header.summary.phone.as_deref(),
                header.summary.location.as_deref(),
            ],
            "  ·  ",
        );
        head.optional_text(contact.as_deref(), CONTACT);
        let links: Vec<String> = header
            .summary
            .social_links
            .iter()
            .filter(|l| !l.url.trim().is_empty())
            .map(|l| match normalize_text(&l.label) {
                label if label.is_empty() => normalize_text(&l.url),
                label => format!("{}: {}", label, normalize_text(&l.url)),
            })
            .collect();
        if !links.is_empty() {
            head.gap(2.0);
            head.text(&links.join("   "), LINKS, 0.0);
        }
        let header_height = head.y + MARGIN;

        let body_top = header_height + GUTTER;
        let available = (content_width - GUTTER).max(1.0);
        let weights = self.config.primary_column_weight + self.config.secondary_column_weight;
        let primary_width = available * self.config.primary_column_weight / weights;
        let secondary_width = available - primary_width;

        let mut primary = ColumnWriter::new(self.measurer, scale, MARGIN, body_top, primary_width);
        let mut secondary = ColumnWriter::new(
            self.measurer,
            scale,
            MARGIN + primary_width + GUTTER,
            body_top,
            secondary_width,
        );
        for section in sections {
            match section.kind().column() {
                Column::Primary => primary.section(section),
                Column::Secondary => secondary.section(section),
            }
        }

        let content_bottom = primary.y.max(secondary.y).max(body_top);
        let natural_height = content_bottom + MARGIN;

        let mut nodes = Vec::with_capacity(1 + head.nodes.len() + primary.nodes.len() + secondary.nodes.len());
        nodes.push(SurfaceNode {
            rect: Rect::new(0.0, 0.0, width, header_height),
            kind: NodeKind::Fill(BoxFill {
                color: HEADER_BG,
                corner_radius: 0.0,
            }),
        });
        nodes.append(&mut head.nodes);
        nodes.append(&mut primary.nodes);
        nodes.append(&mut secondary.nodes);

        log::debug!(
            "Composed surface {}x{:.1} with {} nodes from {} sections",
            width,
            natural_height,
            nodes.len(),
            sections.len()
        );

        Ok(SurfaceDescriptor {
            width,
            natural_height,
            background: Color::WHITE,
            nodes,
        })
    }
}

/// Selects and composes in one step.
pub fn compose_profile(
    profile: &Profile,
    policy: &TruncationPolicy,
    config: LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Result<SurfaceDescriptor, LayoutError> {
    let sections = select(profile, policy);
    Compositor::new(config, measurer).compose(Header::from_profile(profile), &sections)
}
