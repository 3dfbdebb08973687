use crate::areas::index::IndexSnapshot;
use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::workspace::WorkspaceSnapshot;
use crate::artifacts::status::file_change::FileChangeType;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Report shown when nothing was ever staged
pub const NO_COMMITS_MESSAGE: &str =
    "No commits yet\nnothing to commit (create/copy files and use \"git add\" to track)\n";

pub type ChangeSet = BTreeMap<PathBuf, FileChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

/// Every path of the workspace and the index, classified exactly once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) changes: ChangeSet,
}

impl StatusInfo {
    pub fn compare(workspace: &WorkspaceSnapshot, index: &IndexSnapshot) -> Self {
        let paths = workspace.keys().chain(index.keys()).collect::<BTreeSet<_>>();

        let changes = paths
            .into_iter()
            .filter_map(|path| {
                FileChangeType::classify(workspace.get(path), index.get(path))
                    .map(|change| (path.clone(), change))
            })
            .collect::<ChangeSet>();

        StatusInfo { changes }
    }

    pub fn files_with(&self, change: FileChangeType) -> FileSet {
        self.changes
            .iter()
            .filter(|(_, file_change)| **file_change == change)
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Modified paths first, then deleted ones, each sorted by path
    pub fn staged_changes(&self) -> Vec<(PathBuf, FileChangeType)> {
        let mut staged_changes = self
            .changes
            .iter()
            .filter(|(_, change)| change.is_staged_change())
            .map(|(path, change)| (path.clone(), *change))
            .collect::<Vec<_>>();
        // stable, so paths stay sorted within each kind
        staged_changes.sort_by_key(|(_, change)| *change);

        staged_changes
    }

    pub fn untracked_files(&self) -> FileSet {
        self.files_with(FileChangeType::Untracked)
    }

    pub fn render(&self) -> String {
        let mut output = format!("On branch {DEFAULT_BRANCH}\n\n");

        let staged_changes = self.staged_changes();
        if !staged_changes.is_empty() {
            output.push_str("Changes to be committed:\n");
            for (path, change) in staged_changes {
                output.push_str(&format!("\t{}{}\n", change, path.display()));
            }
        }

        let untracked_files = self.untracked_files();
        if !untracked_files.is_empty() {
            output.push_str("\nUntracked files:\n");
            for path in untracked_files {
                output.push_str(&format!("\t{}\n", path.display()));
            }
        }

        output
    }
}

/// Outcome of a status run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    /// No index exists yet
    NoCommits,
    Changes(StatusInfo),
}

impl StatusReport {
    /// Compare the workspace against the index, or report that nothing is staged
    pub fn build(workspace: &WorkspaceSnapshot, index: Option<&IndexSnapshot>) -> Self {
        match index {
            None => StatusReport::NoCommits,
            Some(index) => StatusReport::Changes(StatusInfo::compare(workspace, index)),
        }
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusReport::NoCommits => write!(f, "{NO_COMMITS_MESSAGE}"),
            StatusReport::Changes(status_info) => write!(f, "{}", status_info.render()),
        }
    }
}
