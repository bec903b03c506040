//! Storage backends for guidebook.
//!
//! This crate provides:
//! - [`Storage`]: trait abstracting source reads and output writes
//! - [`FsStorage`]: filesystem backend rooted at a base directory
//! - [`MockStorage`]: in-memory backend for testing
//!
//! All path parameters are forward-slash relative paths; backends map
//! them to their internal representation.

mod fs;
mod mock;
mod storage;

pub use fs::FsStorage;
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
