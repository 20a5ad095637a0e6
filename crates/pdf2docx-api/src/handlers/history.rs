use crate::state::AppState;
use axum::{extract::State, Json};
use pdf2docx_core::constants::HISTORY_READ_LIMIT;
use pdf2docx_core::ConversionRecord;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/history",
    tag = "history",
    responses(
        (status = 200, description = "Up to 20 most recent conversion attempts, newest first", body = [ConversionRecord])
    )
)]
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<ConversionRecord>> {
    Json(state.history.list(HISTORY_READ_LIMIT))
}
