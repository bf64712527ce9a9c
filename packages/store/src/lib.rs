//! Directory backends for bytedir.
//!
//! Two implementations of the `bytedir-core` contract:
//! - [`InMemoryDirectory`]: a map held in memory, for hermetic tests and
//!   simulation
//! - [`LocalDiskDirectory`]: a real file-system hierarchy under a
//!   configured root
//!
//! The same scripted sequence of create/write/get/remove/enumerate calls
//! produces identical observable outcomes on both.

pub mod in_memory;
pub mod local_disk;

pub use bytedir_core::{Directory, Error, File, MemoryFile, Path};

pub use in_memory::{InMemoryDirectory, InMemoryFile};
pub use local_disk::{LocalDiskDirectory, LocalDiskFile};
