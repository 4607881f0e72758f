//! Heading level classification by style clustering.

use std::collections::{BTreeSet, HashMap};

use crate::model::{HeadingLevel, TextRun};

use super::candidates::HeadingCandidate;

/// The style clustering key: two candidates belong to the same heading
/// style only when size, boldness and casing all match exactly.
///
/// The ordering is the level-ranking policy: larger sizes first, and for
/// identical sizes bold styles rank before non-bold, all-caps before
/// mixed case. Deriving nothing from map iteration order keeps the
/// classification deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSignature {
    /// Font size in tenths of a point.
    pub size_key: i32,
    /// Whether the style is bold.
    pub is_bold: bool,
    /// Whether the style is all-caps.
    pub is_all_caps: bool,
}

impl StyleSignature {
    /// The signature of a run.
    pub fn of(run: &TextRun) -> Self {
        Self {
            size_key: run.size_key,
            is_bold: run.is_bold,
            is_all_caps: run.is_all_caps,
        }
    }
}

impl Ord for StyleSignature {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Descending size; bold before non-bold; all-caps before mixed.
        other
            .size_key
            .cmp(&self.size_key)
            .then(other.is_bold.cmp(&self.is_bold))
            .then(other.is_all_caps.cmp(&self.is_all_caps))
    }
}

impl PartialOrd for StyleSignature {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A candidate mapped to a heading level. The y position is kept so the
/// finalizer can order entries within a page; it is not part of the output.
#[derive(Debug, Clone)]
pub struct ClassifiedHeading {
    /// Assigned level.
    pub level: HeadingLevel,
    /// Heading text.
    pub text: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Distance from the top of the page.
    pub y: f32,
}

/// Cluster candidates by style signature and map the three largest styles
/// to H1, H2 and H3.
///
/// Candidates of any style beyond the third largest are dropped entirely,
/// not demoted. Documents with fewer than three distinct styles populate
/// only that many levels.
pub fn classify_levels(candidates: &[HeadingCandidate]) -> Vec<ClassifiedHeading> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let signatures: BTreeSet<StyleSignature> = candidates
        .iter()
        .map(|c| StyleSignature::of(c.run))
        .collect();

    let level_mapping: HashMap<StyleSignature, HeadingLevel> = signatures
        .iter()
        .take(3)
        .zip([HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3])
        .map(|(sig, level)| (*sig, level))
        .collect();

    candidates
        .iter()
        .filter_map(|c| {
            level_mapping
                .get(&StyleSignature::of(c.run))
                .map(|&level| ClassifiedHeading {
                    level,
                    text: c.run.text.clone(),
                    page: c.run.page,
                    y: c.run.y,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(run: &TextRun) -> HeadingCandidate<'_> {
        HeadingCandidate { run, score: 5 }
    }

    fn heading(text: &str, size: f32, bold: bool, page: u32, y: f32) -> TextRun {
        let font = if bold { "Helvetica-Bold" } else { "Helvetica" };
        TextRun::new(text, size, font, page, 0.0, y)
    }

    #[test]
    fn test_three_sizes_map_to_three_levels() {
        let runs = vec![
            heading("Sub Sub Section", 12.0, true, 2, 30.0),
            heading("Main Title Style", 18.0, true, 1, 10.0),
            heading("Section Style", 14.0, true, 1, 40.0),
        ];
        let candidates: Vec<_> = runs.iter().map(candidate).collect();

        let classified = classify_levels(&candidates);
        let by_text: std::collections::HashMap<&str, HeadingLevel> = classified
            .iter()
            .map(|h| (h.text.as_str(), h.level))
            .collect();

        assert_eq!(by_text["Main Title Style"], HeadingLevel::H1);
        assert_eq!(by_text["Section Style"], HeadingLevel::H2);
        assert_eq!(by_text["Sub Sub Section"], HeadingLevel::H3);
    }

    #[test]
    fn test_fourth_style_is_dropped() {
        let runs = vec![
            heading("Level One", 20.0, true, 1, 0.0),
            heading("Level Two", 16.0, true, 1, 10.0),
            heading("Level Three", 13.0, true, 1, 20.0),
            heading("Level Four", 11.0, true, 1, 30.0),
        ];
        let candidates: Vec<_> = runs.iter().map(candidate).collect();

        let classified = classify_levels(&candidates);
        assert_eq!(classified.len(), 3);
        assert!(classified.iter().all(|h| h.text != "Level Four"));
    }

    #[test]
    fn test_same_size_bold_ranks_before_non_bold() {
        let runs = vec![
            heading("Plain Variant", 14.0, false, 1, 0.0),
            heading("Bold Variant", 14.0, true, 1, 10.0),
        ];
        let candidates: Vec<_> = runs.iter().map(candidate).collect();

        let classified = classify_levels(&candidates);
        let by_text: std::collections::HashMap<&str, HeadingLevel> = classified
            .iter()
            .map(|h| (h.text.as_str(), h.level))
            .collect();

        // Two distinct signatures competing by size alone; the documented
        // tie-break puts bold first.
        assert_eq!(by_text["Bold Variant"], HeadingLevel::H1);
        assert_eq!(by_text["Plain Variant"], HeadingLevel::H2);
    }

    #[test]
    fn test_single_style_yields_only_h1() {
        let runs = vec![
            heading("First Heading", 15.0, true, 1, 0.0),
            heading("Second Heading", 15.0, true, 2, 0.0),
        ];
        let candidates: Vec<_> = runs.iter().map(candidate).collect();

        let classified = classify_levels(&candidates);
        assert_eq!(classified.len(), 2);
        assert!(classified.iter().all(|h| h.level == HeadingLevel::H1));
    }

    #[test]
    fn test_signature_ordering_is_total() {
        let a = StyleSignature { size_key: 140, is_bold: true, is_all_caps: false };
        let b = StyleSignature { size_key: 140, is_bold: false, is_all_caps: false };
        let c = StyleSignature { size_key: 180, is_bold: false, is_all_caps: false };
        let d = StyleSignature { size_key: 140, is_bold: true, is_all_caps: true };

        let mut sigs = vec![a, b, c, d];
        sigs.sort();
        assert_eq!(sigs, vec![c, d, a, b]);
    }
}
