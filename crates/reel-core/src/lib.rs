//! Core types and traits for the Reel video record store.
//!
//! This crate holds the record model, the input validator and the
//! storage/generator seams shared by the store, the catalog service
//! and the HTTP gateway.

pub mod date;
pub mod error;
pub mod generator;
pub mod repository;
pub mod resolution;
pub mod validation;
pub mod video;

pub use date::VideoDate;
pub use error::{StorageError, ValidationError};
pub use generator::IdGenerator;
pub use repository::{ReadRepository, Repository};
pub use resolution::Resolution;
pub use validation::{validate, Mode, Validation};
pub use video::{NewVideo, Video, VideoId, VideoPatch};
