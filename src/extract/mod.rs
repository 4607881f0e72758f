//! Text-run extraction from PDF documents.
//!
//! This module is the adapter between the PDF backend and the analysis
//! pipeline: it walks every page's content streams and yields positioned
//! [`TextRun`]s in page order. The pipeline itself never touches the PDF.

mod content;

use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::TextRun;

use content::{build_font_faces, parse_content_stream};

/// Extracts positioned text runs from one PDF document.
///
/// The underlying document handle is released when the extractor is
/// dropped, before the caller moves on to the next document.
pub struct RunExtractor {
    doc: LopdfDocument,
}

impl RunExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Reject non-PDF input before handing it to the parser.
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc)
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc)
    }

    /// Open a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get the PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Extract all text runs, in page order and content-stream order within
    /// a page.
    ///
    /// Pages whose content cannot be decoded are skipped with a warning;
    /// a document where nothing decodes yields an empty vector rather than
    /// an error.
    pub fn extract_runs(&self) -> Result<Vec<TextRun>> {
        let mut runs = Vec::new();

        for (&page_num, &page_id) in self.doc.get_pages().iter() {
            match self.extract_page_runs(page_num, page_id) {
                Ok(mut page_runs) => runs.append(&mut page_runs),
                Err(e) => {
                    log::warn!("Skipping page {}: {}", page_num, e);
                }
            }
        }

        Ok(runs)
    }

    /// Extract the runs of a single page.
    fn extract_page_runs(&self, page_num: u32, page_id: ObjectId) -> Result<Vec<TextRun>> {
        let page_height = self.page_height(page_id);

        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;
        let faces = build_font_faces(&self.doc, &fonts);

        let stream = self.page_content(page_id)?;
        let spans = parse_content_stream(&self.doc, &stream, &faces, &fonts)?;

        let runs = spans
            .into_iter()
            .map(|span| {
                // Flip the bottom-up baseline into a top-left-origin y.
                let y_top = page_height - span.y;
                TextRun::new(
                    span.text,
                    span.font_size,
                    span.font_name,
                    page_num,
                    span.x,
                    y_top,
                )
                .with_style(span.is_bold, span.is_italic)
            })
            .filter(|run| !run.is_empty())
            .collect();

        Ok(runs)
    }

    /// Page height from the MediaBox, defaulting to Letter.
    fn page_height(&self, page_id: ObjectId) -> f32 {
        if let Ok(page_dict) = self.doc.get_dictionary(page_id) {
            if let Ok(media_box) = page_dict.get(b"MediaBox") {
                if let Ok(array) = media_box.as_array() {
                    if array.len() >= 4 {
                        return array[3].as_float().unwrap_or(792.0);
                    }
                }
            }
        }
        792.0
    }

    /// Get a page's (possibly concatenated) content stream.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => self.stream_data(*r).ok_or_else(|| {
                Error::PdfParse("Invalid content stream".to_string())
            }),
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Some(data) = self.stream_data(*r) {
                            content.extend_from_slice(&data);
                            content.push(b' ');
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Resolve a stream object to its data, decompressing when filtered.
    fn stream_data(&self, id: ObjectId) -> Option<Vec<u8>> {
        if let Ok(Object::Stream(s)) = self.doc.get_object(id) {
            return Some(
                s.decompressed_content()
                    .unwrap_or_else(|_| s.content.clone()),
            );
        }
        None
    }
}
