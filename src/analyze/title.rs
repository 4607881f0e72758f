//! Title extraction from first-page typography.

use crate::model::{DocumentOutline, TextRun};

/// How many of the largest first-page runs to consider.
const CANDIDATE_POOL: usize = 10;

/// Pick the document title from the first page.
///
/// Runs are ranked by font size (largest first), ties broken by the
/// visually topmost line. Among the ten highest-ranked runs, the first one
/// that looks like a title wins: at least 12pt, one to fifteen words, no
/// digits, not a "Page"/"Chapter" artifact, more than two characters.
/// When nothing qualifies, the largest run is returned as-is; when page 1
/// has no runs at all, the default title is used.
pub fn extract_title(runs: &[TextRun]) -> String {
    let mut first_page: Vec<&TextRun> = runs.iter().filter(|r| r.page == 1).collect();

    if first_page.is_empty() {
        return DocumentOutline::DEFAULT_TITLE.to_string();
    }

    first_page.sort_by(|a, b| {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    for run in first_page.iter().take(CANDIDATE_POOL) {
        let is_good_title = run.font_size >= 12.0
            && run.word_count >= 1
            && run.word_count <= 15
            && !run.has_digits
            && !run.text.starts_with("Page")
            && !run.text.starts_with("Chapter")
            && run.char_count > 2;

        if is_good_title {
            return run.text.clone();
        }
    }

    // Fallback: the largest run on the first page, whatever it says.
    first_page[0].text.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, size: f32, page: u32, y: f32) -> TextRun {
        TextRun::new(text, size, "Helvetica", page, 0.0, y)
    }

    #[test]
    fn test_largest_qualifying_run_wins() {
        let runs = vec![
            run("body text on the page", 10.0, 1, 400.0),
            run("A Study of Document Structure", 24.0, 1, 80.0),
            run("Some Subtitle", 16.0, 1, 120.0),
        ];

        assert_eq!(extract_title(&runs), "A Study of Document Structure");
    }

    #[test]
    fn test_ties_broken_by_topmost() {
        let runs = vec![
            run("Lower Banner", 20.0, 1, 200.0),
            run("Upper Banner", 20.0, 1, 60.0),
        ];

        assert_eq!(extract_title(&runs), "Upper Banner");
    }

    #[test]
    fn test_page_prefix_and_digits_rejected() {
        let runs = vec![
            run("Page Header Text", 30.0, 1, 20.0),
            run("Version 2 Overview", 22.0, 1, 60.0),
            run("Clean Title Line", 18.0, 1, 100.0),
        ];

        // The two larger runs fail the prefix/digit rules.
        assert_eq!(extract_title(&runs), "Clean Title Line");
    }

    #[test]
    fn test_fallback_to_largest_when_nothing_qualifies() {
        let runs = vec![
            run("Page 1 of 10", 30.0, 1, 20.0),
            run("Introduction", 11.0, 1, 60.0),
        ];

        // "Page 1 of 10" fails the rules but is still the fallback.
        assert_eq!(extract_title(&runs), "Page 1 of 10");
    }

    #[test]
    fn test_only_first_page_considered() {
        let runs = vec![
            run("Huge Second Page Banner", 40.0, 2, 10.0),
            run("Modest First Page Title", 14.0, 1, 50.0),
        ];

        assert_eq!(extract_title(&runs), "Modest First Page Title");
    }

    #[test]
    fn test_no_first_page_runs() {
        let runs = vec![run("Second page only", 12.0, 2, 10.0)];
        assert_eq!(extract_title(&runs), "Untitled Document");
    }
}
