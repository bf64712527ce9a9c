//! In-memory Directory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use bytedir_core::{Directory, Error, File, Path};

type SharedEntries = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// A Directory held entirely in memory, with zero external side effects.
///
/// Entries live in a map from normalized path string to byte content.
/// Every handle issued for an entry shares the backing map, so writes
/// made through one handle are visible through every other live handle
/// bound to the same entry. The map is owned by the directory for its
/// whole lifetime; handles never take ownership of it.
///
/// Useful for fast, hermetic testing of any code written against the
/// [`Directory`] contract.
///
/// # Example
///
/// ```rust
/// use bytedir_core::{Directory, File, Path};
/// use bytedir_store::InMemoryDirectory;
///
/// let mut directory = InMemoryDirectory::new();
/// directory.create(&Path::new("greeting")).unwrap().write(b"hello").unwrap();
///
/// let content = directory.get(&Path::new("greeting")).unwrap().read().unwrap();
/// assert_eq!(b"hello".to_vec(), content);
/// ```
pub struct InMemoryDirectory {
    entries: SharedEntries,
}

impl InMemoryDirectory {
    /// Create a new, empty in-memory directory.
    pub fn new() -> InMemoryDirectory {
        InMemoryDirectory {
            entries: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Ingest an existing file's current content as a new entry.
    ///
    /// The collision rule is the same as for `create`: fails with
    /// [`Error::NameCollision`] if an entry already exists at `path`.
    pub fn add(&mut self, path: &Path, file: &dyn File) -> Result<(), Error> {
        let key = path.to_string();
        if self.entries.borrow().contains_key(&key) {
            return Err(Error::NameCollision { path: path.clone() });
        }

        let content = file.read()?;
        self.entries.borrow_mut().insert(key, content);
        Ok(())
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory for InMemoryDirectory {
    type File = InMemoryFile;

    fn create(&mut self, path: &Path) -> Result<InMemoryFile, Error> {
        let key = path.to_string();
        {
            let mut entries = self.entries.borrow_mut();
            if entries.contains_key(&key) {
                return Err(Error::NameCollision { path: path.clone() });
            }
            entries.insert(key.clone(), Vec::new());
        }

        Ok(InMemoryFile {
            entries: Rc::clone(&self.entries),
            key,
        })
    }

    fn get(&self, path: &Path) -> Result<InMemoryFile, Error> {
        let key = path.to_string();
        if !self.entries.borrow().contains_key(&key) {
            return Err(Error::NotFound { path: path.clone() });
        }

        Ok(InMemoryFile {
            entries: Rc::clone(&self.entries),
            key,
        })
    }

    fn remove(&mut self, path: &Path) -> Result<(), Error> {
        if self.entries.borrow_mut().remove(&path.to_string()).is_none() {
            return Err(Error::NotFound { path: path.clone() });
        }

        Ok(())
    }

    fn paths(&self) -> Vec<Path> {
        self.entries.borrow().keys().map(|key| Path::new(key)).collect()
    }
}

/// Handle to one entry of an [`InMemoryDirectory`].
pub struct InMemoryFile {
    entries: SharedEntries,
    key: String,
}

impl File for InMemoryFile {
    fn read(&self) -> Result<Vec<u8>, Error> {
        self.entries
            .borrow()
            .get(&self.key)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                path: Path::new(&self.key),
            })
    }

    fn write(&mut self, content: &[u8]) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), content.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytedir_core::{trait_test_suite, MemoryFile};

    #[test]
    fn create_collides_on_existing_path() {
        trait_test_suite::create_collides_on_existing_path(&mut InMemoryDirectory::new());
    }

    #[test]
    fn get_missing_is_not_found() {
        trait_test_suite::get_missing_is_not_found(&mut InMemoryDirectory::new());
    }

    #[test]
    fn remove_missing_is_not_found() {
        trait_test_suite::remove_missing_is_not_found(&mut InMemoryDirectory::new());
    }

    #[test]
    fn write_read_round_trip() {
        trait_test_suite::write_read_round_trip(&mut InMemoryDirectory::new());
    }

    #[test]
    fn freshly_created_entry_is_empty() {
        trait_test_suite::freshly_created_entry_is_empty(&mut InMemoryDirectory::new());
    }

    #[test]
    fn remove_clears_entry() {
        trait_test_suite::remove_clears_entry(&mut InMemoryDirectory::new());
    }

    #[test]
    fn create_after_remove_succeeds() {
        trait_test_suite::create_after_remove_succeeds(&mut InMemoryDirectory::new());
    }

    #[test]
    fn iteration_tracks_creates_and_removes() {
        trait_test_suite::iteration_tracks_creates_and_removes(&mut InMemoryDirectory::new());
    }

    #[test]
    fn add_ingests_file_content() {
        let mut directory = InMemoryDirectory::new();

        let foo = MemoryFile::new(b"foo content".to_vec());
        directory.add(&Path::new("foo"), &foo).unwrap();
        directory
            .create(&Path::new("dir/bar"))
            .unwrap()
            .write(b"bar content")
            .unwrap();

        let content = directory.get(&Path::new("foo")).unwrap().read().unwrap();
        assert_eq!(b"foo content".to_vec(), content);
        let content = directory.get(&Path::new("dir/bar")).unwrap().read().unwrap();
        assert_eq!(b"bar content".to_vec(), content);
    }

    #[test]
    fn add_collides_on_existing_path() {
        let mut directory = InMemoryDirectory::new();
        let foo = MemoryFile::new(b"foo content".to_vec());
        directory.add(&Path::new("foo"), &foo).unwrap();

        assert!(matches!(
            directory.add(&Path::new("foo"), &foo),
            Err(Error::NameCollision { .. })
        ));
    }

    #[test]
    fn handles_to_one_entry_share_content() {
        let mut directory = InMemoryDirectory::new();
        let path = Path::new("shared");

        let mut writer = directory.create(&path).unwrap();
        let reader = directory.get(&path).unwrap();

        writer.write(b"first").unwrap();
        assert_eq!(b"first".to_vec(), reader.read().unwrap());

        writer.write(b"second").unwrap();
        assert_eq!(b"second".to_vec(), reader.read().unwrap());
    }

    #[test]
    fn read_through_dangling_handle_is_not_found() {
        let mut directory = InMemoryDirectory::new();
        let path = Path::new("gone");

        let handle = directory.create(&path).unwrap();
        directory.remove(&path).unwrap();

        assert!(matches!(handle.read(), Err(Error::NotFound { .. })));
    }

    #[test]
    fn paths_is_a_snapshot() {
        let mut directory = InMemoryDirectory::new();
        directory.create(&Path::new("one")).unwrap();

        let snapshot = directory.paths();
        directory.create(&Path::new("two")).unwrap();

        assert_eq!(1, snapshot.len());
        assert_eq!(2, directory.paths().len());
    }

    #[test]
    fn equivalent_paths_collide_to_one_key() {
        let mut directory = InMemoryDirectory::new();
        directory.create(&Path::new("dir/bar")).unwrap();

        assert!(matches!(
            directory.create(&Path::new("dir//bar/")),
            Err(Error::NameCollision { .. })
        ));
    }
}
