//! Failure kinds surfaced by the repository core
//!
//! Every area returns [`Result`], so callers can tell an absent index apart
//! from a broken disk. The binary renders these and exits non-zero.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LitError {
    /// File system failure (permissions, missing parent, full disk...)
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An expected metadata file or object is absent
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    /// Commit attempted before `config` was run
    #[error("author identity unknown, run `lit config <username> <email>` first")]
    ConfigMissing,
    /// A path named explicitly for staging belongs to the repository metadata
    #[error("{} is reserved for repository metadata and cannot be staged", .0.display())]
    Reserved(PathBuf),
    /// Stored or decoded content does not have the expected shape
    #[error("malformed content: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, LitError>;

impl LitError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LitError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        LitError::Format(message.into())
    }

    /// Map `NotFound` io errors onto [`LitError::NotFound`], anything else onto [`LitError::Io`]
    pub fn from_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            LitError::NotFound(path.as_ref().to_path_buf())
        } else {
            LitError::io(path, source)
        }
    }
}

/// Attach a path to a raw `std::io::Result`
pub(crate) trait IoContext<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| LitError::io(path, source))
    }
}
