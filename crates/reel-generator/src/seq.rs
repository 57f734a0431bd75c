use reel_core::{IdGenerator, VideoId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `prefix-0`, `prefix-1`, ... so tests can predict ids.
#[derive(Debug)]
pub struct SeqGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SeqGenerator {
    type Output = VideoId;

    fn generate(&self) -> Self::Output {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        VideoId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_zero() {
        let generator = SeqGenerator::with_prefix("vid");

        let ids: Vec<VideoId> = (0..3).map(|_| generator.generate()).collect();
        assert_eq!(
            ids,
            [VideoId::new("vid-0"), VideoId::new("vid-1"), VideoId::new("vid-2")]
        );
    }
}
