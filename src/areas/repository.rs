use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{GIT_DIR, Workspace};
use crate::errors::{LitError, Result};
use std::path::{Path, PathBuf};

/// Name of the identity file inside the metadata directory
pub const CONFIG_FILE: &str = "config.json";

/// Name of the index file inside the metadata directory
pub const INDEX_FILE: &str = "index";

/// Handle over one worktree and its `.git` metadata directory
///
/// Every command opens its own view of the index, so a handle can be reused
/// across commands without going stale.
#[derive(Debug)]
pub struct Repository {
    git_path: Box<Path>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .map_err(|e| LitError::from_read(path, e))?;
        let git_path = path.join(GIT_DIR);

        Ok(Repository {
            database: Database::new(git_path.join("objects").into_boxed_path()),
            refs: Refs::new(git_path.clone().into_boxed_path()),
            git_path: git_path.into_boxed_path(),
            workspace: Workspace::new(path.into_boxed_path()),
        })
    }

    /// The metadata directory (`<worktree>/.git`)
    pub fn git_path(&self) -> &Path {
        &self.git_path
    }

    pub fn config_path(&self) -> PathBuf {
        self.git_path.join(CONFIG_FILE)
    }

    /// A fresh, not yet loaded, view of the index
    pub fn index(&self) -> Index {
        Index::new(self.git_path.join(INDEX_FILE).into_boxed_path())
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
