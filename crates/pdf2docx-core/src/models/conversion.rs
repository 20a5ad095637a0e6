//! Conversion attempt records kept in the in-memory history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::constants::DOWNLOADS_PATH;

/// Outcome of a conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Completed,
    Failed,
}

/// One attempted conversion, success or failure.
///
/// Records are immutable once created: the history log appends them and never
/// updates or deletes them. A completed record references its output file by
/// name only; it shares no handle with the file on disk.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub id: Uuid,
    /// Client-supplied original file name. Untrusted, display-only.
    pub original_name: String,
    pub status: ConversionStatus,
    /// Generated output file name; present iff completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Relative path at which the output can be fetched; present iff completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Failure message; present iff failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn completed(original_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let download_url = format!("{}/{}", DOWNLOADS_PATH, file_name);
        ConversionRecord {
            id: Uuid::new_v4(),
            original_name: original_name.into(),
            status: ConversionStatus::Completed,
            file_name: Some(file_name),
            download_url: Some(download_url),
            error: None,
            created_at: Utc::now(),
        }
    }

    pub fn failed(original_name: impl Into<String>, error: impl Into<String>) -> Self {
        ConversionRecord {
            id: Uuid::new_v4(),
            original_name: original_name.into(),
            status: ConversionStatus::Failed,
            file_name: None,
            download_url: None,
            error: Some(error.into()),
            created_at: Utc::now(),
        }
    }
}
