//! Core traits: File and Directory.

use crate::error::Error;
use crate::path::Path;

/// Whole-content access to one entry.
///
/// A `File` is a transient handle bound to a single entry's identity, not
/// to its content. It supports reading all content and replacing all
/// content; there is no partial, streaming or appending access. Handles
/// are manufactured per `create`/`get` call and become meaningless (but
/// are not actively invalidated) once their entry is removed through the
/// Directory.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn File>`.
pub trait File {
    /// Read the entry's entire content.
    fn read(&self) -> Result<Vec<u8>, Error>;

    /// Replace the entry's entire content.
    fn write(&mut self, content: &[u8]) -> Result<(), Error>;
}

/// A container of Path-keyed byte entries, polymorphic over backends.
///
/// Any concrete type satisfying this trait is substitutable: code written
/// against `impl Directory` runs unchanged over an in-memory store or a
/// real on-disk hierarchy. The contract is single-threaded and
/// synchronous; concurrent access to one instance is undefined and must
/// be serialized externally.
pub trait Directory {
    /// The handle type this backend manufactures.
    type File: File;

    /// Create a new, empty entry at `path` and return a handle to it.
    ///
    /// # Returns
    ///
    /// * `Ok(file)` - The entry was created.
    /// * `Err(Error::NameCollision)` - An entry already exists at `path`;
    ///   create never overwrites.
    fn create(&mut self, path: &Path) -> Result<Self::File, Error>;

    /// Return a handle to the existing entry at `path`.
    ///
    /// Issuing a handle is a pure query: it never mutates the backend's
    /// state.
    ///
    /// # Returns
    ///
    /// * `Ok(file)` - A handle bound to the entry.
    /// * `Err(Error::NotFound)` - No entry exists at `path`.
    fn get(&self, path: &Path) -> Result<Self::File, Error>;

    /// Delete the entry at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The entry was deleted.
    /// * `Err(Error::NotFound)` - No entry exists at `path`; remove never
    ///   silently no-ops.
    fn remove(&mut self, path: &Path) -> Result<(), Error>;

    /// Enumerate the paths of all current entries.
    ///
    /// The result is a snapshot recomputed per call: later mutation of
    /// the Directory does not affect a vector already returned, and a new
    /// call reflects current state.
    fn paths(&self) -> Vec<Path>;
}

/// A standalone in-memory file, bound to no Directory.
///
/// Useful as the content source for ingestion operations (such as the
/// in-memory backend's `add`) and as a stand-in handle in tests.
pub struct MemoryFile {
    content: Vec<u8>,
}

impl MemoryFile {
    pub fn new(content: impl Into<Vec<u8>>) -> MemoryFile {
        MemoryFile {
            content: content.into(),
        }
    }
}

impl File for MemoryFile {
    fn read(&self) -> Result<Vec<u8>, Error> {
        Ok(self.content.clone())
    }

    fn write(&mut self, content: &[u8]) -> Result<(), Error> {
        self.content = content.to_vec();
        Ok(())
    }
}

// Blanket implementations for references and boxes

impl<T: File + ?Sized> File for &mut T {
    fn read(&self) -> Result<Vec<u8>, Error> {
        (**self).read()
    }

    fn write(&mut self, content: &[u8]) -> Result<(), Error> {
        (**self).write(content)
    }
}

impl<T: File + ?Sized> File for Box<T> {
    fn read(&self) -> Result<Vec<u8>, Error> {
        self.as_ref().read()
    }

    fn write(&mut self, content: &[u8]) -> Result<(), Error> {
        self.as_mut().write(content)
    }
}

impl<T: Directory + ?Sized> Directory for &mut T {
    type File = T::File;

    fn create(&mut self, path: &Path) -> Result<Self::File, Error> {
        (**self).create(path)
    }

    fn get(&self, path: &Path) -> Result<Self::File, Error> {
        (**self).get(path)
    }

    fn remove(&mut self, path: &Path) -> Result<(), Error> {
        (**self).remove(path)
    }

    fn paths(&self) -> Vec<Path> {
        (**self).paths()
    }
}

impl<T: Directory + ?Sized> Directory for Box<T> {
    type File = T::File;

    fn create(&mut self, path: &Path) -> Result<Self::File, Error> {
        self.as_mut().create(path)
    }

    fn get(&self, path: &Path) -> Result<Self::File, Error> {
        self.as_ref().get(path)
    }

    fn remove(&mut self, path: &Path) -> Result<(), Error> {
        self.as_mut().remove(path)
    }

    fn paths(&self) -> Vec<Path> {
        self.as_ref().paths()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod trait_test_suite {
    //! Contract checks shared by every Directory implementation.
    //!
    //! Backends run each of these against their own instances, so the
    //! same scripted sequence of operations is checked for identical
    //! observable outcomes across backends.

    use std::collections::HashSet;

    use super::*;

    pub fn create_collides_on_existing_path(directory: &mut impl Directory) {
        directory.create(&Path::new("dir/bar")).unwrap();

        assert!(matches!(
            directory.create(&Path::new("dir/bar")),
            Err(Error::NameCollision { .. })
        ));
    }

    pub fn get_missing_is_not_found(directory: &mut impl Directory) {
        assert!(matches!(
            directory.get(&Path::new("missing")),
            Err(Error::NotFound { .. })
        ));
    }

    pub fn remove_missing_is_not_found(directory: &mut impl Directory) {
        assert!(matches!(
            directory.remove(&Path::new("missing")),
            Err(Error::NotFound { .. })
        ));
    }

    pub fn write_read_round_trip(directory: &mut impl Directory) {
        let path = Path::new("dir/bar");
        directory.create(&path).unwrap().write(b"bar content").unwrap();

        let content = directory.get(&path).unwrap().read().unwrap();
        assert_eq!(b"bar content".to_vec(), content);
    }

    pub fn freshly_created_entry_is_empty(directory: &mut impl Directory) {
        let path = Path::new("empty");
        directory.create(&path).unwrap();

        let content = directory.get(&path).unwrap().read().unwrap();
        assert!(content.is_empty());
    }

    pub fn remove_clears_entry(directory: &mut impl Directory) {
        let path = Path::new("dir/bar");
        directory.create(&path).unwrap();
        directory.remove(&path).unwrap();

        assert!(!directory.paths().contains(&path));
        assert!(matches!(
            directory.get(&path),
            Err(Error::NotFound { .. })
        ));
    }

    pub fn create_after_remove_succeeds(directory: &mut impl Directory) {
        let path = Path::new("recycled");
        directory.create(&path).unwrap().write(b"first").unwrap();
        directory.remove(&path).unwrap();
        directory.create(&path).unwrap().write(b"second").unwrap();

        let content = directory.get(&path).unwrap().read().unwrap();
        assert_eq!(b"second".to_vec(), content);
    }

    pub fn iteration_tracks_creates_and_removes(directory: &mut impl Directory) {
        directory
            .create(&Path::new("dir/bar"))
            .unwrap()
            .write(b"bar content")
            .unwrap();
        directory.create(&Path::new("dir/foo")).unwrap();
        directory.remove(&Path::new("dir/foo")).unwrap();
        directory.create(&Path::new("dir/dir/foo")).unwrap();

        let paths: HashSet<Path> = directory.paths().into_iter().collect();
        let expected: HashSet<Path> = [Path::new("dir/bar"), Path::new("dir/dir/foo")]
            .into_iter()
            .collect();
        assert_eq!(expected, paths);

        let content = directory.get(&Path::new("dir/bar")).unwrap().read().unwrap();
        assert_eq!(b"bar content".to_vec(), content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_file_reads_back_initial_content() {
        let file = MemoryFile::new(b"foo content".to_vec());
        assert_eq!(b"foo content".to_vec(), file.read().unwrap());
    }

    #[test]
    fn memory_file_write_replaces_content() {
        let mut file = MemoryFile::new(b"before".to_vec());
        file.write(b"after").unwrap();
        assert_eq!(b"after".to_vec(), file.read().unwrap());
    }

    #[test]
    fn file_is_object_safe() {
        let mut file: Box<dyn File> = Box::new(MemoryFile::new(Vec::new()));
        file.write(b"boxed").unwrap();
        assert_eq!(b"boxed".to_vec(), file.read().unwrap());
    }
}
