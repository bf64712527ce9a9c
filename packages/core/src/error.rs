//! Error taxonomy for the Directory contract.

use std::io;

use crate::path::Path;

/// Errors surfaced by Directory and File operations.
///
/// Exactly two kinds are recoverable at this layer: [`Error::NotFound`]
/// and [`Error::NameCollision`]. Both are always surfaced explicitly;
/// no operation silently overwrites an existing entry or no-ops on an
/// absent one. Everything else (permission denied, disk full, an invalid
/// root) propagates un-normalized as [`Error::Io`] and must be treated
/// as an unrecoverable environment fault.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No entry exists for path: {path}")]
    NotFound { path: Path },

    #[error("An entry already exists for path: {path}")]
    NameCollision { path: Path },

    #[error("{0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_path() {
        let error = Error::NotFound {
            path: Path::new("dir/bar"),
        };
        assert!(format!("{}", error).contains("dir/bar"));
    }

    #[test]
    fn name_collision_display_names_the_path() {
        let error = Error::NameCollision {
            path: Path::new("dir/bar"),
        };
        let display = format!("{}", error);
        assert!(display.contains("already exists"));
        assert!(display.contains("dir/bar"));
    }

    #[test]
    fn io_errors_convert_without_reclassification() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{}", error).contains("denied"));
    }
}
