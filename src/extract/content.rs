//! Content-stream text extraction with position and font information.

use std::collections::BTreeMap;

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// A decoded span straight out of a content stream, before coordinate
/// flipping and run construction. `y` is the PDF baseline (bottom-up).
#[derive(Debug, Clone)]
pub(crate) struct RawSpan {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub font_name: String,
    pub is_bold: bool,
    pub is_italic: bool,
}

/// Resolved font attributes for one page-resource font.
#[derive(Debug, Clone)]
pub(crate) struct FontFace {
    /// Base font name (e.g., "Helvetica-Bold").
    pub name: String,
    /// ForceBold descriptor flag.
    pub flag_bold: bool,
    /// Italic descriptor flag.
    pub flag_italic: bool,
}

/// Font descriptor flag bits (PDF 32000-1, table 123).
const FLAG_ITALIC: i64 = 1 << 6;
const FLAG_FORCE_BOLD: i64 = 1 << 18;

/// Build the font-face map for a page from its font resource dictionaries.
pub(crate) fn build_font_faces(
    doc: &LopdfDocument,
    fonts: &BTreeMap<Vec<u8>, &lopdf::Dictionary>,
) -> BTreeMap<Vec<u8>, FontFace> {
    let mut faces = BTreeMap::new();
    for (name, font) in fonts {
        let base_font = font
            .get(b"BaseFont")
            .ok()
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let flags = descriptor_flags(doc, font).unwrap_or(0);
        faces.insert(
            name.clone(),
            FontFace {
                name: base_font,
                flag_bold: flags & FLAG_FORCE_BOLD != 0,
                flag_italic: flags & FLAG_ITALIC != 0,
            },
        );
    }
    faces
}

/// Read the Flags entry from a font's FontDescriptor, if any.
fn descriptor_flags(doc: &LopdfDocument, font: &lopdf::Dictionary) -> Option<i64> {
    let descriptor = font.get(b"FontDescriptor").ok()?;
    let dict = match descriptor {
        Object::Reference(r) => doc.get_dictionary(*r).ok()?,
        Object::Dictionary(d) => d,
        _ => return None,
    };
    dict.get(b"Flags").ok()?.as_i64().ok()
}

/// Parse a page content stream into positioned spans.
///
/// Walks the text-showing operators with a text matrix, decoding strings
/// through each font's encoding. TJ kerning adjustments larger than 200
/// units (1/1000 text space) become word spaces, except between characters
/// of scripts that do not use them.
pub(crate) fn parse_content_stream(
    doc: &LopdfDocument,
    content: &[u8],
    faces: &BTreeMap<Vec<u8>, FontFace>,
    fonts: &BTreeMap<Vec<u8>, &lopdf::Dictionary>,
) -> Result<Vec<RawSpan>> {
    let content =
        lopdf::content::Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

    let mut spans = Vec::new();
    let mut current_face: Option<FontFace> = None;
    let mut current_font_name: Vec<u8> = Vec::new();
    let mut current_font_size: f32 = 12.0;
    let mut text_matrix = TextMatrix::default();
    let mut in_text_block = false;

    for op in content.operations {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                text_matrix.reset();
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Object::Name(font_name) = &op.operands[0] {
                        current_font_name = font_name.clone();
                        current_face = faces.get(font_name.as_slice()).cloned();
                    }
                    current_font_size = get_number(&op.operands[1]).unwrap_or(12.0);
                }
            }
            "TL" => {
                if let Some(leading) = op.operands.first().and_then(get_number) {
                    text_matrix.set_leading(leading);
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                    let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                    if op.operator == "TD" {
                        text_matrix.set_leading(-ty);
                    }
                    text_matrix.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    text_matrix.set(
                        get_number(&op.operands[0]).unwrap_or(1.0),
                        get_number(&op.operands[1]).unwrap_or(0.0),
                        get_number(&op.operands[2]).unwrap_or(0.0),
                        get_number(&op.operands[3]).unwrap_or(1.0),
                        get_number(&op.operands[4]).unwrap_or(0.0),
                        get_number(&op.operands[5]).unwrap_or(0.0),
                    );
                }
            }
            "T*" => {
                text_matrix.next_line();
            }
            "Tj" | "TJ" => {
                if in_text_block {
                    let encoding = fonts
                        .get(&current_font_name)
                        .and_then(|f| f.get_font_encoding(doc).ok());

                    let text = if op.operator == "TJ" {
                        decode_tj_array(op.operands.first(), encoding.as_ref())
                    } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                        decode_string(bytes, encoding.as_ref())
                    } else {
                        String::new()
                    };

                    push_span(
                        &mut spans,
                        text,
                        &text_matrix,
                        current_font_size,
                        current_face.as_ref(),
                        &current_font_name,
                    );
                }
            }
            "'" | "\"" => {
                text_matrix.next_line();
                if in_text_block {
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let encoding = fonts
                            .get(&current_font_name)
                            .and_then(|f| f.get_font_encoding(doc).ok());
                        let text = decode_string(bytes, encoding.as_ref());
                        push_span(
                            &mut spans,
                            text,
                            &text_matrix,
                            current_font_size,
                            current_face.as_ref(),
                            &current_font_name,
                        );
                    }
                }
            }
            _ => {}
        }
    }

    Ok(spans)
}

/// Append a span for `text` at the current text position, if non-blank.
fn push_span(
    spans: &mut Vec<RawSpan>,
    text: String,
    matrix: &TextMatrix,
    font_size: f32,
    face: Option<&FontFace>,
    raw_font_name: &[u8],
) {
    if text.trim().is_empty() {
        return;
    }

    let (x, y) = matrix.position();
    let effective_size = font_size * matrix.scale();
    let (name, flag_bold, flag_italic) = match face {
        Some(f) => (f.name.clone(), f.flag_bold, f.flag_italic),
        None => (
            String::from_utf8_lossy(raw_font_name).to_string(),
            false,
            false,
        ),
    };

    spans.push(RawSpan {
        text,
        x,
        y,
        font_size: effective_size,
        font_name: name,
        is_bold: flag_bold,
        is_italic: flag_italic,
    });
}

/// Decode a TJ operand array, turning large kerning gaps into spaces.
fn decode_tj_array(
    operand: Option<&Object>,
    encoding: Option<&lopdf::Encoding>,
) -> String {
    let Some(Object::Array(items)) = operand else {
        return String::new();
    };

    let mut combined = String::new();
    // 200/1000 text-space units; word gaps in most fonts exceed this.
    let space_threshold = 200.0;

    for item in items {
        match item {
            Object::String(bytes, _) => {
                combined.push_str(&decode_string(bytes, encoding));
            }
            Object::Integer(n) => {
                maybe_push_space(&mut combined, -(*n as f32), space_threshold);
            }
            Object::Real(n) => {
                maybe_push_space(&mut combined, -n, space_threshold);
            }
            _ => {}
        }
    }

    combined
}

/// Insert a space for a kerning advance beyond the threshold, unless the
/// preceding character belongs to a spaceless script or is already a space.
fn maybe_push_space(combined: &mut String, adjustment: f32, threshold: f32) {
    if adjustment <= threshold
        || combined.is_empty()
        || combined.ends_with(' ')
        || combined.ends_with('\u{00A0}')
    {
        return;
    }

    if let Some(c) = combined.chars().last() {
        if !is_spaceless_script(c) {
            combined.push(' ');
        }
    }
}

/// Decode one PDF string through the font encoding, with a raw fallback.
fn decode_string(bytes: &[u8], encoding: Option<&lopdf::Encoding>) -> String {
    if let Some(enc) = encoding {
        if let Ok(decoded) = LopdfDocument::decode_text(enc, bytes) {
            return decoded;
        }
    }
    decode_bytes_fallback(bytes)
}

/// Text matrix state for tracking the pen position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            leading: 12.0,
        }
    }
}

impl TextMatrix {
    fn reset(&mut self) {
        let leading = self.leading;
        *self = Self::default();
        self.leading = leading;
    }

    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn set_leading(&mut self, leading: f32) {
        if leading > 0.0 {
            self.leading = leading;
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        self.f -= self.leading * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        // Vertical scale factor of the matrix.
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Check if a character belongs to a script that does not use word spaces
/// (CJK ideographs, kana, CJK punctuation; Hangul does use spaces).
fn is_spaceless_script(c: char) -> bool {
    let code = c as u32;

    (0x4E00..=0x9FFF).contains(&code)
        || (0x3400..=0x4DBF).contains(&code)
        || (0x20000..=0x2A6DF).contains(&code)
        || (0x2A700..=0x2B73F).contains(&code)
        || (0x2B740..=0x2B81F).contains(&code)
        || (0x2B820..=0x2CEAF).contains(&code)
        || (0x2CEB0..=0x2EBEF).contains(&code)
        || (0x3040..=0x309F).contains(&code)
        || (0x30A0..=0x30FF).contains(&code)
        || (0x3000..=0x303F).contains(&code)
}

/// Simple text decoding fallback when no encoding is available.
fn decode_bytes_fallback(bytes: &[u8]) -> String {
    // UTF-16BE with BOM marker
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_matrix_translate() {
        let mut m = TextMatrix::default();
        m.translate(100.0, 700.0);
        assert_eq!(m.position(), (100.0, 700.0));

        m.translate(0.0, -14.0);
        assert_eq!(m.position(), (100.0, 686.0));
    }

    #[test]
    fn test_text_matrix_next_line_uses_leading() {
        let mut m = TextMatrix::default();
        m.set_leading(18.0);
        m.translate(72.0, 720.0);
        m.next_line();
        assert_eq!(m.position(), (72.0, 702.0));
    }

    #[test]
    fn test_text_matrix_scale() {
        let mut m = TextMatrix::default();
        m.set(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        assert!((m.scale() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_fallback_utf16be() {
        let bytes = [0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42];
        assert_eq!(decode_bytes_fallback(&bytes), "AB");
    }

    #[test]
    fn test_decode_fallback_utf8_and_latin1() {
        assert_eq!(decode_bytes_fallback(b"plain"), "plain");
        assert_eq!(decode_bytes_fallback(&[0xE9]), "é");
    }

    #[test]
    fn test_kerning_space_insertion() {
        let mut s = String::from("Hello");
        maybe_push_space(&mut s, 250.0, 200.0);
        assert_eq!(s, "Hello ");

        // Below threshold: untouched.
        let mut s = String::from("Hello");
        maybe_push_space(&mut s, 100.0, 200.0);
        assert_eq!(s, "Hello");

        // No double spaces.
        let mut s = String::from("Hello ");
        maybe_push_space(&mut s, 250.0, 200.0);
        assert_eq!(s, "Hello ");
    }

    #[test]
    fn test_spaceless_script() {
        assert!(is_spaceless_script('中'));
        assert!(is_spaceless_script('の'));
        assert!(!is_spaceless_script('A'));
        assert!(!is_spaceless_script('한'));
    }
}
