//! Index entry representation
//!
//! Each entry maps a worktree-relative path to the object id of its content
//! at the time it was staged.

use crate::artifacts::index::FIELD_SEPARATOR;
use crate::artifacts::index::path_quote::{quote, unquote};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{LitError, Result};
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to the worktree root
    pub name: PathBuf,
    /// Id of the blob stored for this path
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Render the entry as a single index line, without the trailing newline
    ///
    /// Paths that are not plain printable ASCII are quoted.
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.oid, FIELD_SEPARATOR, quote(&self.name))
    }

    pub fn parse_line(line: &str) -> Result<Self> {
        let (oid, name) = line
            .split_once(FIELD_SEPARATOR)
            .filter(|(oid, name)| oid.len() == OBJECT_ID_LENGTH && !name.is_empty())
            .ok_or_else(|| LitError::format(format!("invalid index line: {line:?}")))?;

        Ok(IndexEntry::new(unquote(name)?, ObjectId::try_parse(oid)?))
    }
}
