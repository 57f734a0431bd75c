use crate::video::VideoId;

/// Trait for generating video identifiers.
///
/// Implementations are pure generators that don't interact with storage;
/// the store is responsible for rejecting an id that is already taken.
pub trait IdGenerator: Send + Sync + 'static {
    type Output: Into<VideoId>;

    /// Generates a candidate identifier.
    ///
    /// Callers must not rely on ordering or predictability of the output.
    fn generate(&self) -> Self::Output;
}
