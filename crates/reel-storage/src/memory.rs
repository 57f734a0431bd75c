use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reel_core::{
    IdGenerator, NewVideo, ReadRepository, Repository, StorageError, Video, VideoId, VideoPatch,
};
use reel_generator::RandomAlphanumeric;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

type Result<T> = std::result::Result<T, StorageError>;

/// How many candidate ids `create` tries before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// A stored record together with its insertion sequence number.
#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    video: Video,
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// Every mutation holds the shard lock of the key it touches for the whole
/// read-modify-write, so two creates cannot claim the same id and two
/// updates of one record cannot interleave. Listing returns records in
/// insertion order.
#[derive(Debug)]
pub struct InMemoryRepository<G = RandomAlphanumeric> {
    storage: DashMap<VideoId, Slot>,
    generator: G,
    sequence: AtomicU64,
}

impl InMemoryRepository<RandomAlphanumeric> {
    /// Creates an empty repository with the default random id generator.
    pub fn new() -> Self {
        Self::with_generator(RandomAlphanumeric::default())
    }
}

impl Default for InMemoryRepository<RandomAlphanumeric> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryRepository<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            storage: DashMap::new(),
            generator,
            sequence: AtomicU64::new(0),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl<G: IdGenerator> ReadRepository for InMemoryRepository<G> {
    async fn list(&self) -> Result<Vec<Video>> {
        let mut slots: Vec<Slot> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        slots.sort_by_key(|slot| slot.seq);
        Ok(slots.into_iter().map(|slot| slot.video).collect())
    }

    async fn get(&self, id: &VideoId) -> Result<Option<Video>> {
        Ok(self.storage.get(id).map(|slot| slot.video.clone()))
    }
}

#[async_trait]
impl<G: IdGenerator> Repository for InMemoryRepository<G> {
    async fn create(&self, video: NewVideo) -> Result<Video> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id: VideoId = self.generator.generate().into();

            // Check-and-insert under the shard lock of `id`.
            match self.storage.entry(id) {
                Entry::Occupied(occupied) => {
                    warn!(video_id = %occupied.key(), attempt, "generated id is taken, retrying");
                }
                Entry::Vacant(vacant) => {
                    let video = video.into_video(vacant.key().clone());
                    let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
                    vacant.insert(Slot {
                        seq,
                        video: video.clone(),
                    });
                    return Ok(video);
                }
            }
        }

        Err(StorageError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    async fn update(&self, id: &VideoId, patch: VideoPatch) -> Result<Option<Video>> {
        let Some(mut slot) = self.storage.get_mut(id) else {
            return Ok(None);
        };

        patch.apply(&mut slot.video);
        Ok(Some(slot.video.clone()))
    }

    async fn delete(&self, id: &VideoId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.storage.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{Resolution, VideoDate};
    use reel_generator::SeqGenerator;
    use std::collections::HashSet;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    /// Replays a fixed list of ids, repeating the last one forever.
    struct Scripted {
        ids: &'static [&'static str],
        next: AtomicUsize,
    }

    impl Scripted {
        fn new(ids: &'static [&'static str]) -> Self {
            Self {
                ids,
                next: AtomicUsize::new(0),
            }
        }
    }

    impl IdGenerator for Scripted {
        type Output = VideoId;

        fn generate(&self) -> VideoId {
            let index = self.next.fetch_add(1, Ordering::SeqCst);
            VideoId::new(self.ids[index.min(self.ids.len() - 1)])
        }
    }

    fn new_video(title: &str) -> NewVideo {
        NewVideo::builder()
            .title(title)
            .description("B")
            .date(VideoDate::parse("2023-01-01").unwrap())
            .available_resolutions(vec![Resolution::P720])
            .build()
    }

    fn seq_repo() -> InMemoryRepository<SeqGenerator> {
        InMemoryRepository::with_generator(SeqGenerator::with_prefix("vid"))
    }

    #[tokio::test]
    async fn create_and_get() {
        let repo = seq_repo();

        let created = repo.create(new_video("A")).await.unwrap();
        assert_eq!(created.id.as_str(), "vid-0");

        let fetched = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.date.to_string(), "2023-01-01T00:00:00.000Z");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = seq_repo();
        assert!(repo.get(&VideoId::new("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let repo = InMemoryRepository::new();
        for title in ["one", "two", "three", "four"] {
            repo.create(new_video(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|video| video.title)
            .collect();
        assert_eq!(titles, ["one", "two", "three", "four"]);
    }

    #[tokio::test]
    async fn update_applies_present_fields_only() {
        let repo = seq_repo();
        let created = repo.create(new_video("A")).await.unwrap();

        let patch = VideoPatch {
            title: Some("C".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "C");
        assert_eq!(updated.description.as_deref(), Some("B"));
        assert_eq!(updated.id, created.id);
        assert_eq!(repo.get(&created.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn update_nonexistent() {
        let repo = seq_repo();
        let result = repo
            .update(&VideoId::new("nope"), VideoPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn delete_existing_then_again() {
        let repo = seq_repo();
        let created = repo.create(new_video("A")).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let repo = seq_repo();
        repo.create(new_video("A")).await.unwrap();
        repo.create(new_video("B")).await.unwrap();

        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_retries_on_collision() {
        let repo = InMemoryRepository::with_generator(Scripted::new(&["dup", "dup", "fresh"]));

        let first = repo.create(new_video("A")).await.unwrap();
        let second = repo.create(new_video("B")).await.unwrap();

        assert_eq!(first.id.as_str(), "dup");
        assert_eq!(second.id.as_str(), "fresh");
        assert_eq!(repo.get(&first.id).await.unwrap().unwrap().title, "A");
    }

    #[tokio::test]
    async fn create_gives_up_when_every_candidate_is_taken() {
        let repo = InMemoryRepository::with_generator(Scripted::new(&["dup"]));
        repo.create(new_video("A")).await.unwrap();

        let err = repo.create(new_video("B")).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::IdSpaceExhausted {
                attempts: MAX_ID_ATTEMPTS
            }
        ));
        assert_eq!(repo.len(), 1);
    }

    fn whole_patch(n: usize) -> VideoPatch {
        let resolutions = Resolution::ALL[..=n % Resolution::ALL.len()].to_vec();
        VideoPatch {
            title: Some(format!("title-{}", n)),
            description: Some(format!("description-{}", n)),
            date: VideoDate::parse(&format!("2023-01-{:02}", n % 28 + 1)),
            available_resolutions: Some(resolutions),
        }
    }

    fn assert_single_patch(video: &Video) {
        let n: usize = video
            .title
            .strip_prefix("title-")
            .and_then(|n| n.parse().ok())
            .unwrap();
        let mut expected = video.clone();
        whole_patch(n).apply(&mut expected);
        assert_eq!(video, &expected, "fields from different updates were mixed");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_of_one_id_do_not_interleave() {
        let repo = Arc::new(seq_repo());
        let id = repo.create(new_video("A")).await.unwrap().id;
        let mut handles = vec![];

        for n in 0..64 {
            let repo = Arc::clone(&repo);
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                repo.update(&id, whole_patch(n)).await.unwrap().unwrap()
            }));
        }

        for handle in handles {
            assert_single_patch(&handle.await.unwrap());
        }

        let last = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(last.id, id);
        assert_single_patch(&last);
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_video(&format!("video-{}", i)))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(repo.list().await.unwrap().len(), 50);
    }
}
