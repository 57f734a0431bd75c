use crate::catalog::VideoCatalog;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use reel_core::{NewVideo, Repository, Video, VideoId, VideoPatch};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// A concrete implementation of the `VideoCatalog` trait.
///
/// This service wraps a `Repository` and handles:
/// - validation of create and update input
/// - mapping absent records to `NotFound`
///
/// A rejected input never reaches the repository.
#[derive(Debug)]
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository> VideoCatalog for CatalogService<R> {
    async fn list(&self) -> Result<Vec<Video>> {
        Ok(self.repository.list().await?)
    }

    async fn get(&self, id: &VideoId) -> Result<Video> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    async fn create(&self, input: &Value) -> Result<Video> {
        let video = NewVideo::from_input(input).inspect_err(|err| {
            debug!(errors = ?err.messages(), "rejected video create");
        })?;

        let video = self.repository.create(video).await?;
        info!(video_id = %video.id, "video created");
        Ok(video)
    }

    async fn update(&self, id: &VideoId, input: &Value) -> Result<Video> {
        let patch = VideoPatch::from_input(input).inspect_err(|err| {
            debug!(video_id = %id, errors = ?err.messages(), "rejected video update");
        })?;

        let video = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        info!(video_id = %id, "video updated");
        Ok(video)
    }

    async fn delete(&self, id: &VideoId) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound(id.clone()));
        }
        info!(video_id = %id, "video deleted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.repository.clear().await?;
        info!("all videos cleared");
        Ok(())
    }
}
