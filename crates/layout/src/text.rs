//! Text measurement and greedy line breaking.

use crate::elements::FontWeight;

/// Measures the horizontal advance of a run of text.
///
/// The compositor only needs widths; vertical metrics are derived from the
/// font size and the fixed line-height ratio of the design.
pub trait TextMeasurer: Send + Sync {
    fn advance(&self, text: &str, font_size: f32, weight: FontWeight) -> f32;
}

/// Font-independent metrics based on average glyph widths of a sans-serif
/// face. Deterministic, so layouts built with it are reproducible anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    fn em_fraction(c: char, weight: FontWeight) -> f32 {
        let base = match c {
            ' ' => 0.28,
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.25,
            'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 0.35,
            'm' | 'w' | 'M' | 'W' | '@' => 0.85,
            c if c.is_ascii_uppercase() || c.is_ascii_digit() => 0.62,
            c if c.is_ascii() => 0.52,
            // CJK and other wide scripts
            c if (c as u32) >= 0x2E80 => 1.0,
            _ => 0.6,
        };
        match weight {
            FontWeight::Regular => base,
            FontWeight::Bold => base * 1.07,
        }
    }
}

impl TextMeasurer for ApproximateMetrics {
    fn advance(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        text.chars()
            .map(|c| Self::em_fraction(c, weight))
            .sum::<f32>()
            * font_size
    }
}

/// Drops control characters and collapses whitespace runs to single spaces.
pub fn normalize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in input
        .split(|c: char| c.is_whitespace())
        .filter(|w| !w.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().filter(|c| !c.is_control()));
    }
    out
}

/// Splits free text into paragraphs on line breaks, normalizing each one and
/// dropping the empty ones.
pub fn paragraphs(input: &str) -> Vec<String> {
    input
        .lines()
        .map(normalize_text)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Greedy word wrap. Words wider than `max_width` are broken between
/// characters. Always returns at least one line for non-empty input.
pub fn wrap_text(
    measurer: &dyn TextMeasurer,
    text: &str,
    font_size: f32,
    weight: FontWeight,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measurer.advance(&candidate, font_size, weight) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measurer.advance(word, font_size, weight) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = break_word(measurer, word, font_size, weight, max_width);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(
    measurer: &dyn TextMeasurer,
    word: &str,
    font_size: f32,
    weight: FontWeight,
    max_width: f32,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if piece.chars().count() > 1 && measurer.advance(&piece, font_size, weight) > max_width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
