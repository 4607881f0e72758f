//! Outline ordering and de-duplication.

use std::collections::HashSet;

use crate::model::OutlineEntry;

use super::levels::ClassifiedHeading;

/// Order classified headings into the final outline.
///
/// Headings are stably sorted by page, then top of page first. Duplicate
/// text (trimmed, case-insensitive) collapses to its first occurrence
/// globally, so a running header styled like a heading appears once.
/// Entries whose normalized text is two characters or fewer are dropped.
pub fn finalize_outline(mut headings: Vec<ClassifiedHeading>) -> Vec<OutlineEntry> {
    headings.sort_by(|a, b| {
        a.page.cmp(&b.page).then(
            a.y.partial_cmp(&b.y)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut outline = Vec::new();

    for heading in headings {
        let normalized = heading.text.trim().to_lowercase();
        if normalized.chars().count() <= 2 {
            continue;
        }
        if seen.insert(normalized) {
            outline.push(OutlineEntry::new(
                heading.level,
                heading.text.trim(),
                heading.page,
            ));
        }
    }

    outline
}
