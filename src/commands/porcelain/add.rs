use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::Result;
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage every file under `paths`, storing their blobs
    ///
    /// Each file upserts its own index entry; entries for other paths stay.
    /// Returns the worktree-relative paths that were staged.
    pub fn add(&self, paths: &[impl AsRef<Path>]) -> Result<Vec<PathBuf>> {
        let mut index = self.index();
        index.rehydrate_or_default()?;

        // Expand directories up front so a bad path stages nothing
        let files = paths
            .iter()
            .map(|path| self.workspace().list_files(Some(path.as_ref())))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        for file in &files {
            let blob = self.workspace().parse_blob(file)?;
            let blob_id = self.database().store(&blob)?;

            tracing::debug!(path = %file.display(), oid = %blob_id, "staged file");
            index.add(IndexEntry::new(file.clone(), blob_id));
        }

        if index.is_changed() || !index.exists() {
            index.write_updates()?;
        }

        Ok(files)
    }
}
