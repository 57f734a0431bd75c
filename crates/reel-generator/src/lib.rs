//! Video id generators.

pub mod random;
pub mod seq;

pub use random::RandomAlphanumeric;
pub use reel_core::IdGenerator;
pub use seq::SeqGenerator;
