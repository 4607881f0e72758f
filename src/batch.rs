//! Batch orchestration: a directory of PDFs in, a JSON sidecar per PDF out.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::render::{to_json, JsonFormat};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory to enumerate for `.pdf` files (non-recursive).
    pub input_dir: PathBuf,

    /// Directory sidecar JSON files are written to; created if missing.
    pub output_dir: PathBuf,

    /// Whether to process documents in parallel. Documents share no state,
    /// so this only changes throughput, never output.
    pub parallel: bool,

    /// JSON output format for the sidecar files.
    pub format: JsonFormat,
}

impl BatchOptions {
    /// Create options for the given input and output directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            parallel: true,
            format: JsonFormat::Pretty,
        }
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the sidecar JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of PDF files found.
    pub processed: usize,
    /// Files whose sidecar was written.
    pub succeeded: usize,
    /// Files skipped because extraction or writing failed.
    pub failed: usize,
}

impl BatchSummary {
    /// Whether every file produced a sidecar.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Enumerate the PDF files in a directory (case-insensitive `.pdf`
/// extension, non-recursive), sorted by path for a stable processing
/// order.
///
/// Failure to read the directory is fatal to the whole batch.
pub fn find_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::DirectoryAccess {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::DirectoryAccess {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if path.is_file() && is_pdf {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Extract one document and write its sidecar. Returns the path written.
///
/// The sidecar mirrors the PDF's base name with a `.json` extension. The
/// serialized outline is validated before writing: every item must carry
/// the `level`, `text` and `page` keys, or the whole document is rejected.
pub fn process_file(pdf_path: &Path, options: &BatchOptions) -> Result<PathBuf> {
    let outline = crate::try_extract_outline(pdf_path)?;

    let json = to_json(&outline, options.format)?;
    validate_sidecar(&json)?;

    let stem = pdf_path
        .file_stem()
        .ok_or_else(|| Error::Other(format!("No file name in {}", pdf_path.display())))?;
    let output_path = options.output_dir.join(stem).with_extension("json");

    fs::write(&output_path, json)?;
    Ok(output_path)
}

/// Process every PDF in the input directory, skipping failures.
///
/// Per-document failures are logged and counted; only directory access
/// (or creating the output directory) aborts the batch.
pub fn process_directory(options: &BatchOptions) -> Result<BatchSummary> {
    let files = find_pdf_files(&options.input_dir)?;
    fs::create_dir_all(&options.output_dir)?;

    let outcomes: Vec<bool> = if options.parallel {
        files
            .par_iter()
            .map(|path| run_one(path, options))
            .collect()
    } else {
        files.iter().map(|path| run_one(path, options)).collect()
    };

    let succeeded = outcomes.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        processed: files.len(),
        succeeded,
        failed: files.len() - succeeded,
    })
}

fn run_one(path: &Path, options: &BatchOptions) -> bool {
    match process_file(path, options) {
        Ok(written) => {
            log::info!("{} -> {}", path.display(), written.display());
            true
        }
        Err(e) => {
            log::warn!("Failed to process {}: {}", path.display(), e);
            false
        }
    }
}

/// Defensive check that a serialized outline matches the sidecar contract:
/// top-level `title` and `outline` keys, and `level`/`text`/`page` on every
/// item.
fn validate_sidecar(json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::Render(e.to_string()))?;

    for key in ["title", "outline"] {
        if value.get(key).is_none() {
            return Err(Error::InvalidOutline(key.to_string()));
        }
    }

    let items = value["outline"]
        .as_array()
        .ok_or_else(|| Error::InvalidOutline("outline".to_string()))?;

    for item in items {
        for key in ["level", "text", "page"] {
            if item.get(key).is_none() {
                return Err(Error::InvalidOutline(key.to_string()));
            }
        }
    }

    Ok(())
}
