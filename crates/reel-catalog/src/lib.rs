//! Video catalog service.
//!
//! Sits between the transport and the record store: decodes raw input,
//! validates it and only then mutates the store.

pub mod catalog;
pub mod error;
pub mod service;

pub use catalog::VideoCatalog;
pub use error::CatalogError;
pub use service::CatalogService;
