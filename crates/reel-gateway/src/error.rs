use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reel_catalog::CatalogError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorsResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Catalog(CatalogError::Validation(err)) => bad_request(err.into_messages()),
            AppError::MalformedBody(rejection) => bad_request(vec![rejection.body_text()]),
            AppError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            AppError::Catalog(CatalogError::Storage(err)) => {
                error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn bad_request(errors_messages: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorsResponse { errors_messages }),
    )
        .into_response()
}
