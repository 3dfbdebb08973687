use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;
use crate::errors::{LitError, Result};

// Terminology:
// - untracked files: files in the workspace that are not in the index
// - modified files: files in the index whose workspace content hashes differently
// - deleted files: files in the index that are gone from the workspace
impl Repository {
    pub fn status(&self) -> Result<StatusReport> {
        let mut index = self.index();
        let index_snapshot = match index.rehydrate() {
            Ok(()) => Some(index.snapshot()),
            Err(LitError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let workspace_snapshot = self.workspace().scan()?;

        Ok(StatusReport::build(
            &workspace_snapshot,
            index_snapshot.as_ref(),
        ))
    }
}
