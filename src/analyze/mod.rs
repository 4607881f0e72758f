//! The outline analysis core.
//!
//! Turns a flat stream of positioned text runs into a title and a ranked
//! heading outline, using typographic cues only. Every stage is a pure
//! function over immutable input, so extractions for different documents
//! share no state and can run in parallel.
//!
//! Pipeline: [`baseline`] establishes what counts as body text,
//! [`candidates`] scores runs against that baseline, [`levels`] clusters
//! surviving candidates into at most three heading levels, and
//! [`finalize`] orders and de-duplicates the result. [`title`]
//! independently picks a title from the first page.

pub mod baseline;
pub mod candidates;
pub mod finalize;
pub mod levels;
pub mod title;

pub use baseline::BodyStats;
pub use candidates::HeadingCandidate;
pub use levels::{ClassifiedHeading, StyleSignature};

use crate::model::{DocumentOutline, TextRun};

/// Analyze a document's text runs into a title and outline.
///
/// Returns the default result (title `"Untitled Document"`, empty outline)
/// when there are no runs.
pub fn outline_from_runs(runs: &[TextRun]) -> DocumentOutline {
    if runs.is_empty() {
        return DocumentOutline::untitled();
    }

    let title = title::extract_title(runs);

    let stats = baseline::estimate_body_stats(runs);
    log::debug!(
        "Body baseline: {}pt ({} of {} runs)",
        stats.size,
        stats.frequency,
        stats.total_runs
    );

    let candidates = candidates::identify_candidates(runs, &stats);
    let classified = levels::classify_levels(&candidates);
    let outline = finalize::finalize_outline(classified);

    DocumentOutline { title, outline }
}
