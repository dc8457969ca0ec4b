//! Filesystem primitives used by the fixtures.
//!
//! These are the small "safe" helpers the fixture composes: create a
//! directory tree, create a fresh uniquely-named directory, dump a file
//! atomically and list what ended up on disk.

pub mod create;
pub mod error;
pub mod helpers;
pub mod walk;

pub use create::{safe_mkdir, safe_mkdtemp};
pub use error::FsOpError;
pub use helpers::{atomic_write, ensure_parent_exists, safe_file_dump};
pub use walk::list_files;
