//! Positioned text runs, the input unit of the analysis pipeline.

use unicode_normalization::UnicodeNormalization;

/// One styled, positioned span of text on one page.
///
/// Runs are created once per extracted span and are immutable afterwards.
/// Text is trimmed and NFC-normalized at construction; the typographic
/// statistics (`word_count`, `char_count`, `is_all_caps`, `has_digits`)
/// are derived from the normalized text.
///
/// Coordinates use a top-left origin: `y` grows downward, so the topmost
/// line on a page has the smallest `y`. The extractor flips PDF's bottom-up
/// baseline coordinate before constructing a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Trimmed, NFC-normalized text content.
    pub text: String,

    /// Font size in points, rounded to one decimal.
    pub font_size: f32,

    /// Font size in tenths of a point. Grouping and comparison key: two
    /// runs share a size exactly when their keys are equal.
    pub size_key: i32,

    /// Base font name (e.g., "Helvetica-Bold").
    pub font_name: String,

    /// Whether the font appears to be bold.
    pub is_bold: bool,

    /// Whether the font appears to be italic.
    pub is_italic: bool,

    /// Page number (1-indexed).
    pub page: u32,

    /// Distance from the top of the page.
    pub y: f32,

    /// Distance from the left edge of the page.
    pub x: f32,

    /// Number of whitespace-separated tokens in the text.
    pub word_count: usize,

    /// Number of characters in the text.
    pub char_count: usize,

    /// Whether every alphabetic character is uppercase (and at least one
    /// alphabetic character exists).
    pub is_all_caps: bool,

    /// Whether the text contains any decimal digit.
    pub has_digits: bool,

    /// Line box height; approximated from the font size when the source
    /// provides no bounding box.
    pub line_height: f32,
}

impl TextRun {
    /// Create a new text run.
    ///
    /// Bold and italic are inferred from the font name; use
    /// [`with_style`](Self::with_style) to override with authoritative
    /// font-flag information.
    pub fn new(
        text: impl Into<String>,
        font_size: f32,
        font_name: impl Into<String>,
        page: u32,
        x: f32,
        y: f32,
    ) -> Self {
        let text: String = text.into().nfc().collect::<String>().trim().to_string();
        let font_name = font_name.into();

        let lower = font_name.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        let is_italic = lower.contains("italic") || lower.contains("oblique");

        let font_size = (font_size * 10.0).round() / 10.0;
        let size_key = (font_size * 10.0).round() as i32;

        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        let is_all_caps = !letters.is_empty() && letters.iter().all(|c| c.is_uppercase());
        let has_digits = text.chars().any(|c| c.is_ascii_digit());

        Self {
            text,
            font_size,
            size_key,
            font_name,
            is_bold,
            is_italic,
            page,
            y,
            x,
            word_count,
            char_count,
            is_all_caps,
            has_digits,
            line_height: font_size,
        }
    }

    /// Override the bold/italic flags, ORing in font-descriptor bits that
    /// the name heuristic cannot see.
    pub fn with_style(mut self, is_bold: bool, is_italic: bool) -> Self {
        self.is_bold = self.is_bold || is_bold;
        self.is_italic = self.is_italic || is_italic;
        self
    }

    /// Set the line box height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Check if the run carries no text after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
