use rand::distr::Alphanumeric;
use rand::Rng;
use reel_core::{IdGenerator, VideoId};

pub const DEFAULT_LENGTH: usize = 12;

/// Produces fixed-length random `[A-Za-z0-9]` ids from the thread-local RNG.
///
/// Ids are not cryptographically strong and carry no ordering. With the
/// default length there are 62^12 possible values; the store still checks
/// each candidate against existing keys.
#[derive(Debug, Clone, Copy)]
pub struct RandomAlphanumeric {
    length: usize,
}

impl RandomAlphanumeric {
    /// Creates a generator for ids of `length` characters (at least one).
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomAlphanumeric {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl IdGenerator for RandomAlphanumeric {
    type Output = VideoId;

    fn generate(&self) -> Self::Output {
        let id: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        VideoId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn produces_fixed_length_alphanumeric_ids() {
        let generator = RandomAlphanumeric::new(16);
        for _ in 0..100 {
            let id = generator.generate();
            assert_eq!(id.as_str().len(), 16);
            assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn default_length() {
        assert_eq!(RandomAlphanumeric::default().generate().as_str().len(), 12);
    }

    #[test]
    fn zero_length_is_clamped() {
        assert_eq!(RandomAlphanumeric::new(0).length(), 1);
    }

    #[test]
    fn ids_do_not_repeat_in_practice() {
        let generator = RandomAlphanumeric::default();
        let ids: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomAlphanumeric>();
    }
}
