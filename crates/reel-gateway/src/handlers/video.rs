use crate::error::Result;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::{Video, VideoId};
use serde_json::Value;

pub async fn list_videos_handler(State(state): State<AppState>) -> Result<Json<Vec<Video>>> {
    Ok(Json(state.catalog().list().await?))
}

pub async fn get_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Video>> {
    let video = state.catalog().get(&VideoId::new(id)).await?;
    Ok(Json(video))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Video>)> {
    let Json(input) = payload?;
    let video = state.catalog().create(&input).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

pub async fn update_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Video>> {
    let Json(input) = payload?;
    let video = state.catalog().update(&VideoId::new(id), &input).await?;
    Ok(Json(video))
}

pub async fn delete_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.catalog().delete(&VideoId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
