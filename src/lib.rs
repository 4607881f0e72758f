//! # pdfoutline
//!
//! Structural outline extraction from PDF documents.
//!
//! This library recovers a document's title and a ranked heading outline
//! (H1–H3 with page numbers) from visual and typographic cues alone —
//! font size, weight and casing — without relying on embedded bookmarks
//! or tagged structure.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_outline, render, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Never fails: unreadable documents yield the default result.
//!     let outline = extract_outline("document.pdf");
//!
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - The **extractor** walks every page's content streams and yields
//!   positioned text runs (text, font size, weight, casing, page, x/y).
//! - The **baseline estimator** finds the dominant font size, which is
//!   treated as body text.
//! - The **candidate identifier** scores each run against the baseline
//!   using typographic signals; runs at or below body size never qualify.
//! - The **level classifier** clusters candidates by exact style
//!   signature and maps the three largest styles to H1–H3.
//! - The **finalizer** orders headings by page and position and removes
//!   duplicate text.
//! - The **title extractor** independently picks the best first-page run.
//!
//! Batch processing of a whole directory into JSON sidecar files lives in
//! [`batch`].

pub mod analyze;
pub mod batch;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{outline_from_runs, BodyStats, HeadingCandidate, StyleSignature};
pub use batch::{BatchOptions, BatchSummary};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use extract::RunExtractor;
pub use model::{DocumentOutline, HeadingLevel, OutlineEntry, TextRun};
pub use render::{to_json, JsonFormat};

use std::path::Path;

/// Extract the outline of a PDF file, with a typed failure.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::try_extract_outline;
///
/// match try_extract_outline("document.pdf") {
///     Ok(outline) => println!("{} headings", outline.outline.len()),
///     Err(e) => eprintln!("unreadable: {}", e),
/// }
/// ```
pub fn try_extract_outline<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    let extractor = RunExtractor::open(path)?;
    let runs = extractor.extract_runs()?;
    Ok(outline_from_runs(&runs))
}

/// Extract the outline of a PDF file.
///
/// This never fails: any parse failure is logged and replaced by the
/// default result (`"Untitled Document"`, empty outline), matching the
/// behavior batch callers want. Use [`try_extract_outline`] to observe the
/// failure instead.
pub fn extract_outline<P: AsRef<Path>>(path: P) -> DocumentOutline {
    let path = path.as_ref();
    match try_extract_outline(path) {
        Ok(outline) => outline,
        Err(e) => {
            log::warn!("Failed to extract outline from {}: {}", path.display(), e);
            DocumentOutline::untitled()
        }
    }
}

/// Extract the outline of a PDF held in memory, with a typed failure.
pub fn try_extract_outline_from_bytes(data: &[u8]) -> Result<DocumentOutline> {
    let extractor = RunExtractor::from_bytes(data)?;
    let runs = extractor.extract_runs()?;
    Ok(outline_from_runs(&runs))
}

/// Extract the outline of a PDF held in memory, defaulting on failure.
pub fn extract_outline_from_bytes(data: &[u8]) -> DocumentOutline {
    match try_extract_outline_from_bytes(data) {
        Ok(outline) => outline,
        Err(e) => {
            log::warn!("Failed to extract outline from bytes: {}", e);
            DocumentOutline::untitled()
        }
    }
}
