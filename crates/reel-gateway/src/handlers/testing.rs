use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;

/// Wipes the store. Used by test suites to reset state between runs.
pub async fn clear_all_handler(State(state): State<AppState>) -> Result<StatusCode> {
    state.catalog().clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
