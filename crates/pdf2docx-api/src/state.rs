//! Application state.
//!
//! Constructed once at process start and passed to handlers via
//! `State<Arc<AppState>>`. The history log lives here as an explicitly owned,
//! injectable component rather than module-level global state.

use crate::history::ConversionHistory;
use pdf2docx_core::Config;
use pdf2docx_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    /// Staging area for incoming PDFs, cleaned per-conversion.
    pub staging: Arc<dyn Storage>,
    /// Output area for generated documents, retained for process lifetime.
    pub output: Arc<dyn Storage>,
    pub history: ConversionHistory,
}
