//! File storage for staged uploads and generated documents.
//!
//! Defines the `Storage` trait and the local filesystem backend. The service
//! uses two instances of the same backend: a staging area for incoming PDFs
//! (cleaned per-conversion) and an output area for generated documents
//! (retained for process lifetime).
//!
//! # Storage key format
//!
//! Keys are flat file names, never paths. Keys containing `..`, a path
//! separator, or a NUL byte are rejected so a key can never resolve outside
//! its area's base directory.

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
