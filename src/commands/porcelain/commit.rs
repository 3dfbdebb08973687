use crate::areas::config::Config;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use chrono::{DateTime, FixedOffset};

impl Repository {
    /// Record a commit authored by the configured identity
    pub fn commit(
        &self,
        message: &str,
        timestamp: Option<DateTime<FixedOffset>>,
    ) -> Result<ObjectId> {
        let config = self.load_config()?;

        self.commit_as(&config, message, timestamp)
    }

    /// Record a commit authored by `config`, at `timestamp` or now
    ///
    /// The message is recorded verbatim. The record is stored and the branch
    /// ref moved to it. No parent is recorded: two records with the same
    /// author, time and message share an id.
    pub fn commit_as(
        &self,
        config: &Config,
        message: &str,
        timestamp: Option<DateTime<FixedOffset>>,
    ) -> Result<ObjectId> {
        let author = Author::from_config(config, timestamp);
        let commit = Commit::new(author, message.to_string());

        let commit_id = self.database().store(&commit)?;
        self.refs().update_branch(&commit_id)?;

        tracing::info!(oid = %commit_id, message = %commit.short_message(), "committed");

        Ok(commit_id)
    }
}
