use crate::error::StorageError;
use crate::video::{NewVideo, Video, VideoId, VideoPatch};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the record store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored record in insertion order.
    async fn list(&self) -> Result<Vec<Video>>;

    /// Retrieves the record for a given id.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &VideoId) -> Result<Option<Video>>;
}

/// The record store: the only component that mutates record state.
///
/// Inputs are expected to have passed validation already; the store does
/// not re-check field rules.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Assigns a fresh id to `video`, inserts it and returns the stored record.
    async fn create(&self, video: NewVideo) -> Result<Video>;

    /// Applies the fields present in `patch` to an existing record.
    /// Returns `None` if the id does not exist.
    async fn update(&self, id: &VideoId, patch: VideoPatch) -> Result<Option<Video>>;

    /// Deletes the record for a given id.
    /// Returns `true` if the record existed and was removed.
    async fn delete(&self, id: &VideoId) -> Result<bool>;

    /// Removes every record. Always succeeds.
    async fn clear(&self) -> Result<()>;
}
