use crate::error::Result;
use async_trait::async_trait;
use reel_core::{Video, VideoId};
use serde_json::Value;

#[async_trait]
pub trait VideoCatalog: Send + Sync + 'static {
    /// Returns every video currently stored.
    async fn list(&self) -> Result<Vec<Video>>;

    /// Fails with `NotFound` if the id does not exist.
    async fn get(&self, id: &VideoId) -> Result<Video>;

    /// Validates `input` as a full video and stores it under a fresh id.
    async fn create(&self, input: &Value) -> Result<Video>;

    /// Validates `input` as a partial video and applies it to an existing one.
    ///
    /// The body is validated before the store is consulted, so an invalid
    /// body is reported as such even if the id is unknown.
    async fn update(&self, id: &VideoId, input: &Value) -> Result<Video>;

    /// Fails with `NotFound` if the id does not exist.
    async fn delete(&self, id: &VideoId) -> Result<()>;

    /// Removes every video.
    async fn clear(&self) -> Result<()>;
}
