use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, LitError, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding the repository metadata, never part of the worktree
pub const GIT_DIR: &str = ".git";

/// Root-level names reserved for repository metadata
pub const RESERVED_PATHS: [&str; 6] = [
    "HEAD",
    "config",
    "config.json",
    "description",
    "index",
    "objects",
];

/// Worktree path to content hash, as seen on disk right now
pub type WorkspaceSnapshot = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Hash every worktree file, keyed by its path relative to the root
    pub fn scan(&self) -> Result<WorkspaceSnapshot> {
        let files = self.list_files(None)?;

        let snapshot = files
            .into_iter()
            .map(|file| {
                let oid = self.parse_blob(&file)?.object_id()?;
                Ok((file, oid))
            })
            .collect::<Result<WorkspaceSnapshot>>()?;

        tracing::debug!(root = %self.path.display(), files = snapshot.len(), "scanned workspace");

        Ok(snapshot)
    }

    pub fn parse_blob(&self, path: &Path) -> Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data.into()))
    }

    /// Expand `root_file_path` (or the whole worktree) into relative file paths
    ///
    /// Directories are walked recursively in file-name order; metadata paths
    /// found along the way are skipped. A path outside the worktree, or one
    /// that is itself metadata, is rejected.
    pub fn list_files(&self, root_file_path: Option<&Path>) -> Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => {
                let p = self.path.join(p);
                std::fs::canonicalize(&p).map_err(|e| LitError::from_read(&p, e))?
            }
            None => self.path.to_path_buf(),
        };

        let relative_root = root_file_path.strip_prefix(self.path.as_ref()).map_err(|_| {
            LitError::format(format!(
                "{} is outside the worktree {}",
                root_file_path.display(),
                self.path.display()
            ))
        })?;
        if Self::is_ignored(relative_root) {
            return Err(LitError::Reserved(relative_root.to_path_buf()));
        }

        if root_file_path.is_dir() {
            WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    entry
                        .path()
                        .strip_prefix(self.path.as_ref())
                        .map(|relative| !Self::is_ignored(relative))
                        .unwrap_or(false)
                })
                .filter_map(|entry| match entry {
                    Ok(entry) if entry.file_type().is_file() => self
                        .relative_path(entry.path())
                        .map(Ok),
                    Ok(_) => None,
                    Err(e) => {
                        let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                        Some(Err(match e.into_io_error() {
                            Some(source) => LitError::io(path, source),
                            None => LitError::format(format!(
                                "filesystem loop under {}",
                                path.display()
                            )),
                        }))
                    }
                })
                .collect()
        } else {
            Ok(self.relative_path(&root_file_path).into_iter().collect())
        }
    }

    /// Metadata paths: anything inside `.git`, and reserved names at the root
    fn is_ignored(relative_path: &Path) -> bool {
        let mut components = relative_path.components().filter_map(|component| {
            if let Component::Normal(name) = component {
                Some(name.to_string_lossy())
            } else {
                None
            }
        });

        let Some(first) = components.next() else {
            return false;
        };

        first == GIT_DIR
            || RESERVED_PATHS.contains(&first.as_ref())
            || components.any(|name| name == GIT_DIR)
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path).at(&file_path)
    }
}
