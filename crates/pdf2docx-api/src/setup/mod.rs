//! Application setup and initialization
//!
//! Builds the application state and router. Serving is separate (see
//! `server`) so the same route set can be embedded by a host process.

pub mod routes;
pub mod server;

use crate::history::ConversionHistory;
use crate::state::AppState;
use anyhow::{Context, Result};
use pdf2docx_core::Config;
use pdf2docx_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Initialize the entire application: storage areas, state, and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let staging: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir())
            .await
            .context("Failed to initialize staging area")?,
    );
    let output: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.output_dir())
            .await
            .context("Failed to initialize output area")?,
    );

    tracing::info!(
        upload_dir = %config.upload_dir(),
        output_dir = %config.output_dir(),
        "Storage areas ready"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        staging,
        output,
        history: ConversionHistory::new(),
    });

    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
