//! Path identity type with normalized, platform-neutral segments.

use std::fmt;

/// A normalized relative path identifying one entry within a Directory.
///
/// Paths are immutable values. Construction normalizes the string form:
/// segments are split on `/`, and empty and `.` segments are dropped, so
/// `foo//bar/`, `./foo/bar` and `foo/bar` all identify the same entry.
/// Equality, ordering and hashing all derive from the normalized segment
/// list, which makes them consistent with the normalized string form that
/// backends use as their store key.
///
/// No sanitization of `..` segments or absolute markers is performed at
/// this layer; callers that need it must harden paths themselves.
///
/// # Example
///
/// ```rust
/// use bytedir_core::Path;
///
/// let path = Path::new("dir//bar/");
/// assert_eq!(path, Path::new("dir/bar"));
/// assert_eq!("dir/bar", path.to_string());
/// assert_eq!("dir", path.parent());
/// assert_eq!("bar", path.base());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Construct a path from a string, normalizing it.
    ///
    /// Construction never fails: any string maps to some normalized path,
    /// possibly the empty one.
    pub fn new(path: &str) -> Path {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_string)
            .collect();

        Path { segments }
    }

    /// Iterate over the normalized segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// The normalized string form of every segment but the last.
    ///
    /// Returns the empty string for paths with fewer than two segments.
    /// This is a string projection, not a new `Path`.
    pub fn parent(&self) -> String {
        match self.segments.split_last() {
            Some((_, rest)) => rest.join("/"),
            None => String::new(),
        }
    }

    /// The last segment only, or the empty string for the empty path.
    pub fn base(&self) -> String {
        self.segments.last().cloned().unwrap_or_default()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Path {
        Path::new(path)
    }
}
