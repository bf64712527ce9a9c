//! Core bytedir: the backend-agnostic Directory contract
//!
//! Three cooperating abstractions make up the contract:
//! - [`Path`]: a normalized, hashable, immutable identifier for an
//!   entry's location relative to some root
//! - [`File`]: a transient handle supporting whole-content read/replace
//!   on one entry
//! - [`Directory`]: a container of Path-keyed entries with
//!   create/get/remove and snapshot enumeration, polymorphic over
//!   backends
//!
//! Code written against these traits runs unchanged over any backend;
//! the `bytedir-store` crate provides an in-memory and a local-disk one.
//!
//! # Example
//!
//! ```rust
//! use bytedir_core::{Directory, Error, File, Path};
//!
//! fn copy_entry<D: Directory>(directory: &mut D, from: &Path, to: &Path) -> Result<(), Error> {
//!     let content = directory.get(from)?.read()?;
//!     directory.create(to)?.write(&content)
//! }
//! ```

mod error;
mod path;
mod traits;

pub use error::Error;
pub use path::Path;
pub use traits::{Directory, File, MemoryFile};

#[cfg(any(test, feature = "test-utils"))]
pub use traits::trait_test_suite;
