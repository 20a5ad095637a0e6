use pdf2docx_core::constants::PDF_CONTENT_TYPE;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no file uploaded")]
    MissingFile,

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("unsupported file type: {content_type} (expected application/pdf)")]
    InvalidContentType { content_type: String },

    #[error("Empty file")]
    EmptyFile,
}

/// Upload validator
///
/// Enforces the upload contract before anything is persisted to the staging
/// area: PDF content type, non-empty body, size ceiling.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate content type indicates PDF
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        if !content_type.eq_ignore_ascii_case(PDF_CONTENT_TYPE) {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
            });
        }

        Ok(())
    }

    /// Validate all aspects of an upload
    pub fn validate(&self, content_type: &str, file_size: usize) -> Result<(), ValidationError> {
        self.validate_content_type(content_type)?;
        self.validate_file_size(file_size)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 10 * 1024 * 1024;

    #[test]
    fn test_valid_pdf_upload() {
        let validator = UploadValidator::new(MAX);
        assert!(validator.validate("application/pdf", 1024).is_ok());
        assert!(validator.validate("Application/PDF", 1024).is_ok());
    }

    #[test]
    fn test_rejects_non_pdf_content_type() {
        let validator = UploadValidator::new(MAX);
        let result = validator.validate("image/png", 1024);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidContentType { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_file() {
        let validator = UploadValidator::new(MAX);
        let result = validator.validate("application/pdf", MAX + 1);
        assert!(matches!(result, Err(ValidationError::FileTooLarge { .. })));
    }

    #[test]
    fn test_accepts_file_at_exact_limit() {
        let validator = UploadValidator::new(MAX);
        assert!(validator.validate("application/pdf", MAX).is_ok());
    }

    #[test]
    fn test_rejects_empty_file() {
        let validator = UploadValidator::new(MAX);
        let result = validator.validate("application/pdf", 0);
        assert!(matches!(result, Err(ValidationError::EmptyFile)));
    }
}
