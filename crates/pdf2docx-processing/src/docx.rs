//! DOCX generation via the docx-rs crate.

use docx_rs::{Docx, Paragraph, Run, RunFonts};
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
#[error("DOCX generation failed: {0}")]
pub struct DocxError(String);

/// Builds a minimal single-section Word document: one paragraph whose entire
/// text is rendered as one run with a fixed font family and size.
///
/// No layout fidelity (images, tables, multi-page structure, headings) is
/// preserved. This is an intentional, documented limitation of the service.
pub struct TextDocumentBuilder {
    font_family: String,
    /// Font size in half-points, as OOXML measures run sizes.
    font_size_half_points: usize,
}

impl Default for TextDocumentBuilder {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size_half_points: 24,
        }
    }
}

impl TextDocumentBuilder {
    pub fn new(font_family: impl Into<String>, font_size_half_points: usize) -> Self {
        Self {
            font_family: font_family.into(),
            font_size_half_points,
        }
    }

    /// Serialize a document containing `text` to DOCX bytes.
    pub fn build(&self, text: &str) -> Result<Vec<u8>, DocxError> {
        let run = Run::new()
            .add_text(text)
            .fonts(
                RunFonts::new()
                    .ascii(&self.font_family)
                    .hi_ansi(&self.font_family),
            )
            .size(self.font_size_half_points);

        let docx = Docx::new().add_paragraph(Paragraph::new().add_run(run));

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| DocxError(e.to_string()))?;

        Ok(buf.into_inner())
    }
}
