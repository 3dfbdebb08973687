//! References (HEAD and the single branch)
//!
//! History is linear and has exactly one branch. HEAD is a symbolic reference
//! to it and the branch file holds the id of the most recent commit.
//!
//! ## File Format
//!
//! - `HEAD`: `ref: refs/heads/master`
//! - `refs/heads/master`: a 40-character object id

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, Result};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// The only branch of the history
pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.refs_path().join("tags")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn branch_path(&self) -> PathBuf {
        self.heads_path().join(DEFAULT_BRANCH)
    }

    /// Point HEAD at the default branch
    pub fn set_head(&self) -> Result<()> {
        let head_path = self.head_path();
        std::fs::write(&head_path, format!("ref: refs/heads/{DEFAULT_BRANCH}\n")).at(&head_path)
    }

    pub fn update_branch(&self, oid: &ObjectId) -> Result<()> {
        let heads_path = self.heads_path();
        std::fs::create_dir_all(&heads_path).at(&heads_path)?;

        let branch_path = self.branch_path();
        std::fs::write(&branch_path, format!("{oid}\n")).at(&branch_path)?;
        tracing::debug!(branch = DEFAULT_BRANCH, %oid, "updated branch");

        Ok(())
    }
}
