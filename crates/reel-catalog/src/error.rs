use reel_core::{StorageError, ValidationError, VideoId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("video not found: {0}")]
    NotFound(VideoId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
