//! Workspace-wide constants.

/// Multipart form field name carrying the uploaded PDF.
pub const UPLOAD_FIELD_NAME: &str = "pdf";

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Maximum number of records returned by the history endpoint.
pub const HISTORY_READ_LIMIT: usize = 20;

/// Content type accepted for uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Content type of generated documents.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Route prefix under which generated documents are served.
pub const DOWNLOADS_PATH: &str = "/downloads";
