//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They identify
//! every stored object, blob or commit record alike.
//!
//! ## Storage
//!
//! Objects live at `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{LitError, Result};
use std::path::{Path, PathBuf};

/// SHA-1 object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase digits are folded to lowercase so that ids typed by a user
    /// resolve to the same storage path.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(LitError::format(format!(
                "invalid object ID length: {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LitError::format(format!(
                "invalid object ID characters: {id}"
            )));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Rebuild an ID from its sharded storage location (`ab/cdef...`)
    pub fn try_from_path(path: &Path) -> Result<Self> {
        let file = path.file_name().and_then(|name| name.to_str());
        let dir = path
            .parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str());

        match (dir, file) {
            (Some(dir), Some(file)) => Self::try_parse(format!("{dir}{file}")),
            _ => Err(LitError::format(format!(
                "not an object path: {}",
                path.display()
            ))),
        }
    }

    /// Convert to the sharded storage path
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
