//! Local-disk Directory backend.

use std::collections::HashSet;
use std::{ffi, fs, io, path};

use bytedir_core::{Directory, Error, File, Path};

/// A Directory mapped onto a real file-system hierarchy under a root.
///
/// Entry identity is the relative path from the root with
/// forward-separated segments; the filesystem itself is the persisted
/// state, with no sidecar metadata. The working set of known entries is
/// mirrored in an in-memory index for fast existence checks and
/// enumeration, seeded by walking the root once at construction.
///
/// The index only tracks this instance's own operations: files created
/// or removed by other processes are not reflected until the directory
/// is reconstructed. `create` is still safe against such drift because
/// the filesystem-level exclusive create is authoritative for collision
/// detection.
pub struct LocalDiskDirectory {
    root: path::PathBuf,
    index: HashSet<path::PathBuf>,
}

impl LocalDiskDirectory {
    /// Open a directory rooted at `root`.
    ///
    /// The root must already exist and be a directory; it is not created
    /// here. Every regular file found under it is recorded in the index.
    pub fn new(root: impl Into<path::PathBuf>) -> Result<LocalDiskDirectory, Error> {
        let root = root.into();
        let attr = fs::metadata(&root)?;
        if !attr.is_dir() {
            return Err(io::Error::other(format!(
                "Root path ({}) must be a directory.",
                root.display()
            ))
            .into());
        }
        let root = root.canonicalize()?;

        let mut index = HashSet::new();
        for entry in walkdir::WalkDir::new(&root) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() {
                index.insert(entry.into_path());
            }
        }
        log::debug!("Indexed {} files under {}", index.len(), root.display());

        Ok(LocalDiskDirectory { root, index })
    }

    fn to_full_path(&self, path: &Path) -> path::PathBuf {
        self.root
            .components()
            .chain(
                path.segments()
                    .map(|segment| path::Component::Normal(ffi::OsStr::new(segment))),
            )
            .collect()
    }

    fn to_relative_path(&self, full_path: &path::Path) -> Path {
        let relative = full_path.strip_prefix(&self.root).unwrap_or(full_path);
        let joined = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Path::new(&joined)
    }
}

impl Directory for LocalDiskDirectory {
    type File = LocalDiskFile;

    fn create(&mut self, path: &Path) -> Result<LocalDiskFile, Error> {
        let full_path = self.to_full_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // The exclusive create makes the filesystem authoritative for
        // collisions: a file present on disk but untracked by the index
        // still collides.
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
        {
            Ok(_) => {}
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::NameCollision { path: path.clone() });
            }
            Err(error) => return Err(error.into()),
        }
        log::debug!("Created {}", full_path.display());

        self.index.insert(full_path.clone());
        Ok(LocalDiskFile {
            path: path.clone(),
            location: full_path,
        })
    }

    fn get(&self, path: &Path) -> Result<LocalDiskFile, Error> {
        let full_path = self.to_full_path(path);
        if !self.index.contains(&full_path) {
            return Err(Error::NotFound { path: path.clone() });
        }

        // Membership query only; issuing a handle never touches the index.
        Ok(LocalDiskFile {
            path: path.clone(),
            location: full_path,
        })
    }

    fn remove(&mut self, path: &Path) -> Result<(), Error> {
        let full_path = self.to_full_path(path);
        match fs::remove_file(&full_path) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound { path: path.clone() });
            }
            Err(error) => return Err(error.into()),
        }
        log::debug!("Removed {}", full_path.display());

        self.index.remove(&full_path);
        Ok(())
    }

    fn paths(&self) -> Vec<Path> {
        self.index
            .iter()
            .map(|full_path| self.to_relative_path(full_path))
            .collect()
    }
}

/// Handle to one file under a [`LocalDiskDirectory`] root.
pub struct LocalDiskFile {
    path: Path,
    location: path::PathBuf,
}

impl File for LocalDiskFile {
    fn read(&self) -> Result<Vec<u8>, Error> {
        match fs::read(&self.location) {
            Ok(content) => Ok(content),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
                path: self.path.clone(),
            }),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, content: &[u8]) -> Result<(), Error> {
        fs::write(&self.location, content)?;
        Ok(())
    }
}
