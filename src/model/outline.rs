//! Outline output types.

use serde::{Deserialize, Serialize};

/// Heading level in the extracted outline.
///
/// At most three levels are populated per document; styles beyond the third
/// largest are dropped by the classifier rather than demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading (largest candidate style).
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
}

impl HeadingLevel {
    /// String form used in the JSON output ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the final outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level.
    pub level: HeadingLevel,

    /// Trimmed heading text.
    pub text: String,

    /// Page the heading appears on (1-indexed).
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The extracted outline of one document: title plus ordered headings.
///
/// This is the sole per-document artifact. It serializes to exactly the
/// keys `title` and `outline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Best-effort document title.
    pub title: String,

    /// Headings in document reading order (page, then top of page first).
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Title used when no text can be extracted.
    pub const DEFAULT_TITLE: &'static str = "Untitled Document";

    /// The default result for unreadable or empty documents.
    pub fn untitled() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            outline: Vec::new(),
        }
    }

    /// Check if the outline carries no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

impl Default for DocumentOutline {
    fn default() -> Self {
        Self::untitled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serialization() {
        let entry = OutlineEntry::new(HeadingLevel::H2, "Background", 3);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"level":"H2","text":"Background","page":3}"#);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(HeadingLevel::H1.to_string(), "H1");
        assert_eq!(HeadingLevel::H3.as_str(), "H3");
    }

    #[test]
    fn test_untitled_default() {
        let outline = DocumentOutline::untitled();
        assert_eq!(outline.title, "Untitled Document");
        assert!(outline.is_empty());

        let json = serde_json::to_string(&outline).unwrap();
        assert_eq!(json, r#"{"title":"Untitled Document","outline":[]}"#);
    }

    #[test]
    fn test_round_trip() {
        let outline = DocumentOutline {
            title: "Report".to_string(),
            outline: vec![
                OutlineEntry::new(HeadingLevel::H1, "Introduction", 1),
                OutlineEntry::new(HeadingLevel::H2, "Scope", 2),
            ],
        };
        let json = serde_json::to_string(&outline).unwrap();
        let back: DocumentOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outline);
    }
}
