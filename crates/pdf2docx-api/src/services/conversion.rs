//! Conversion orchestrator.
//!
//! Given a staged PDF, runs the extract → generate → persist → cleanup →
//! record sequence. The orchestrator holds no locks; concurrent conversions
//! each operate on their own uniquely named staged/output files.

use crate::history::ConversionHistory;
use crate::state::AppState;
use pdf2docx_core::{AppError, ConversionRecord, ErrorMetadata};
use pdf2docx_processing::{extract_pdf_text, TextDocumentBuilder};
use pdf2docx_storage::Storage;
use std::sync::Arc;

pub struct ConversionService {
    staging: Arc<dyn Storage>,
    output: Arc<dyn Storage>,
    history: ConversionHistory,
}

impl ConversionService {
    pub fn new(state: &AppState) -> Self {
        Self {
            staging: state.staging.clone(),
            output: state.output.clone(),
            history: state.history.clone(),
        }
    }

    /// Convert the staged file named `staged_key` into a Word document.
    ///
    /// Exactly one history record is appended per call, at the end of the
    /// attempt. The staged input is deleted unconditionally once the attempt
    /// finishes, success or failure; a cleanup failure never changes the
    /// reported outcome.
    pub async fn convert(
        &self,
        staged_key: &str,
        original_name: &str,
    ) -> Result<ConversionRecord, AppError> {
        let outcome = self.run(staged_key).await;

        if let Err(e) = self.staging.delete(staged_key).await {
            tracing::warn!(error = %e, key = %staged_key, "Failed to clean up staged upload");
        }

        match outcome {
            Ok(file_name) => {
                let record = ConversionRecord::completed(original_name, file_name);
                tracing::info!(
                    original_name = %original_name,
                    file_name = record.file_name.as_deref().unwrap_or_default(),
                    "Conversion completed"
                );
                self.history.record(record.clone());
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(
                    original_name = %original_name,
                    error = %e,
                    "Conversion failed"
                );
                self.history
                    .record(ConversionRecord::failed(original_name, e.client_message()));
                Err(e)
            }
        }
    }

    async fn run(&self, staged_key: &str) -> Result<String, AppError> {
        let data = self.staging.get(staged_key).await?;

        let base_name = staged_key.strip_suffix(".pdf").unwrap_or(staged_key);
        let file_name = format!("{}.docx", base_name);

        // Text extraction and DOCX serialization are CPU-bound; keep them off
        // the request-handling threads.
        let docx = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
            let text =
                extract_pdf_text(&data).map_err(|e| AppError::Conversion(e.to_string()))?;
            TextDocumentBuilder::default()
                .build(&text)
                .map_err(|e| AppError::Conversion(e.to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(format!("Conversion task failed: {}", e)))??;

        self.output.put(&file_name, docx).await?;

        Ok(file_name)
    }
}
