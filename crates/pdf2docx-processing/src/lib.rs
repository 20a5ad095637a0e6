//! Document processing: upload validation, PDF text extraction, and DOCX
//! generation.
//!
//! The heavy lifting is delegated: `pdf-extract` derives plain text from PDF
//! content and `docx-rs` encodes the Word document. This crate wraps both
//! behind small, synchronous functions the API layer runs on the blocking
//! thread pool.

pub mod docx;
pub mod extract;
pub mod validator;

pub use docx::{DocxError, TextDocumentBuilder};
pub use extract::{extract_pdf_text, ExtractError};
pub use validator::{UploadValidator, ValidationError};
