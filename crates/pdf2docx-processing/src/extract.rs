//! PDF text extraction via the pdf-extract crate.

#[derive(Debug, thiserror::Error)]
#[error("PDF text extraction failed: {0}")]
pub struct ExtractError(String);

/// Extract plain text from in-memory PDF content.
///
/// Any parse failure (corrupt or unsupported PDF) is surfaced as an
/// `ExtractError` carrying the underlying message. Extraction is CPU-bound;
/// callers on an async runtime should run this on the blocking pool.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                tracing::warn!("PDF text extraction returned empty");
            } else {
                tracing::debug!(text_len = trimmed.len(), "PDF text extracted");
            }
            Ok(trimmed.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "PDF text extraction failed");
            Err(ExtractError(e.to_string()))
        }
    }
}
