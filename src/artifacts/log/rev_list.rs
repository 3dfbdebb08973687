use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;

/// Every commit record found in the object store
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
}

impl<'r> RevList<'r> {
    /// Lazily walk the store, skipping objects that are not commits
    pub fn commits(&self) -> impl Iterator<Item = Result<LogEntry>> + 'r {
        let database = self.database;

        database
            .objects()
            .filter_map(|object| match object {
                Ok((oid, ObjectBox::Commit(commit))) => Some(Ok(LogEntry::new(oid, *commit))),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Render every commit block, in store order
    pub fn render(&self) -> Result<String> {
        self.commits()
            .map(|entry| entry.map(|entry| entry.to_string()))
            .collect()
    }
}

/// A commit record together with the id it is stored under
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "commit {}\n{}\n\n", self.oid, self.commit.record())
    }
}
