use crate::artifacts::objects::object_id::ObjectId;

/// How a path in the workspace and/or index differs between the two
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    /// Staged, and the workspace content hashes differently
    Modified,
    /// Staged, but gone from the workspace
    Deleted,
    /// In the workspace, never staged
    Untracked,
    /// Staged with exactly the content in the workspace
    Unchanged,
}

impl FileChangeType {
    /// Classify one path from its workspace hash and its staged hash
    ///
    /// Returns `None` for a path absent from both sides.
    pub fn classify(workspace: Option<&ObjectId>, index: Option<&ObjectId>) -> Option<Self> {
        match (workspace, index) {
            (Some(current), Some(staged)) if current != staged => Some(FileChangeType::Modified),
            (Some(_), Some(_)) => Some(FileChangeType::Unchanged),
            (Some(_), None) => Some(FileChangeType::Untracked),
            (None, Some(_)) => Some(FileChangeType::Deleted),
            (None, None) => None,
        }
    }

    /// Whether the path is listed under "Changes to be committed"
    pub fn is_staged_change(&self) -> bool {
        matches!(self, FileChangeType::Modified | FileChangeType::Deleted)
    }
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Modified => "modified:   ",
            FileChangeType::Deleted => "deleted:   ",
            FileChangeType::Untracked | FileChangeType::Unchanged => "",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{label}")
    }
}
