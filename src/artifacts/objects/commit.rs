//! Commit record object
//!
//! A commit is a flat text record: who committed, when, and why. It points at
//! no tree and no parent; history is recovered by walking the object store.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! commit <local timestamp>
//! Author: <name> <email>
//! Date: <RFC 2822 timestamp>
//!
//! <commit message>
//! ```

use crate::areas::config::Config;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{LitError, Result};
use bytes::Bytes;
use std::io::{BufRead, Read};

/// Marker opening every commit record body
pub const COMMIT_MARKER: &str = "commit";

/// Layout accepted for a pinned author date besides RFC 2822
const AUTHOR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Author information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author with the current local time
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Build the author from the configured identity
    ///
    /// A pinned `timestamp` is used as is; otherwise the current time is used.
    pub fn from_config(
        config: &Config,
        timestamp: Option<chrono::DateTime<chrono::FixedOffset>>,
    ) -> Self {
        let name = config.username().to_string();
        let email = config.email().to_string();
        match timestamp {
            Some(ts) => Author::new_with_timestamp(name, email, ts),
            None => Author::new(name, email),
        }
    }

    /// Parse a pinned author date, either RFC 2822 or `%Y-%m-%d %H:%M:%S %z`
    pub fn parse_date(value: &str) -> Result<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc2822(value)
            .or_else(|_| chrono::DateTime::parse_from_str(value, AUTHOR_DATE_FORMAT))
            .map_err(|e| LitError::format(format!("invalid author date {value:?}: {e}")))
    }

    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Timestamp like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// Timestamp like "Mon, 15 Jan 2024 12:34:56 +0000"
    pub fn rfc_timestamp(&self) -> String {
        self.timestamp.to_rfc2822()
    }
}

/// Split an `Author:` value into name and email
fn parse_identity(value: &str) -> Result<(String, String)> {
    let email_start = value
        .rfind('<')
        .ok_or_else(|| LitError::format("invalid author: missing '<'"))?;
    let email_end = value
        .rfind('>')
        .filter(|end| *end > email_start)
        .ok_or_else(|| LitError::format("invalid author: missing '>'"))?;

    Ok((
        value[..email_start].trim().to_string(),
        value[email_start + 1..email_end].to_string(),
    ))
}

/// Commit record
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    author: Author,
    message: String,
}

impl Commit {
    pub fn new(author: Author, message: String) -> Self {
        Commit { author, message }
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// The canonical text record that gets hashed and stored
    pub fn record(&self) -> String {
        format!(
            "{} {}\nAuthor: {}\nDate: {}\n\n{}\n",
            COMMIT_MARKER,
            self.author.readable_timestamp(),
            self.author.display_name(),
            self.author.rfc_timestamp(),
            self.message
        )
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        frame(self.object_type(), self.record().as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let mut content = String::new();
        Read::read_to_string(&mut reader, &mut content)
            .map_err(|_| LitError::format("commit record is not valid UTF-8"))?;

        let (headers, message) = content
            .split_once("\n\n")
            .ok_or_else(|| LitError::format("commit record: missing message separator"))?;
        let mut headers = headers.lines();

        headers
            .next()
            .filter(|line| line.starts_with(COMMIT_MARKER))
            .ok_or_else(|| LitError::format("commit record: missing commit line"))?;

        let author = headers
            .next()
            .and_then(|line| line.strip_prefix("Author: "))
            .ok_or_else(|| LitError::format("commit record: invalid author line"))?;
        let (name, email) = parse_identity(author)?;

        let date = headers
            .next()
            .and_then(|line| line.strip_prefix("Date: "))
            .ok_or_else(|| LitError::format("commit record: invalid date line"))?;
        let timestamp = chrono::DateTime::parse_from_rfc2822(date)
            .map_err(|e| LitError::format(format!("commit record: invalid date: {e}")))?;

        let message = message.strip_suffix('\n').unwrap_or(message).to_string();

        Ok(Self::new(
            Author::new_with_timestamp(name, email, timestamp),
            message,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn author() -> Author {
        let timestamp = Author::parse_date("2023-01-15 12:00:00 +0000").unwrap();
        Author::new_with_timestamp("alice".to_string(), "a@x.com".to_string(), timestamp)
    }

    #[test]
    fn renders_canonical_record() {
        let commit = Commit::new(author(), "first".to_string());

        assert_eq!(
            commit.record(),
            "commit Sun Jan 15 12:00:00 2023 +0000\n\
             Author: alice <a@x.com>\n\
             Date: Sun, 15 Jan 2023 12:00:00 +0000\n\
             \n\
             first\n"
        );
    }

    #[test]
    fn identical_records_share_an_id() {
        let first = Commit::new(author(), "first".to_string());
        let again = Commit::new(author(), "first".to_string());
        let other = Commit::new(author(), "second".to_string());

        assert_eq!(first.object_id().unwrap(), again.object_id().unwrap());
        assert_ne!(first.object_id().unwrap(), other.object_id().unwrap());
    }

    #[test]
    fn whitespace_is_part_of_the_message() {
        let ids = ["msg", " msg", "msg\n"]
            .into_iter()
            .map(|message| Commit::new(author(), message.to_string()).object_id().unwrap())
            .collect::<std::collections::BTreeSet<_>>();

        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn parses_back_its_own_record() {
        for message in ["first line\n\nbody", "  padded\n", "\nleading blank"] {
            let commit = Commit::new(author(), message.to_string());

            let parsed = Commit::deserialize(Cursor::new(commit.record())).unwrap();

            assert_eq!(parsed, commit);
        }
    }

    #[test]
    fn accepts_both_pinned_date_layouts() {
        let rfc = Author::parse_date("Sun, 15 Jan 2023 12:00:00 +0000").unwrap();
        let plain = Author::parse_date("2023-01-15 12:00:00 +0000").unwrap();

        assert_eq!(rfc, plain);
        assert!(matches!(
            Author::parse_date("yesterday"),
            Err(LitError::Format(_))
        ));
    }

    #[test]
    fn rejects_records_without_marker() {
        let result = Commit::deserialize(Cursor::new("hello\n\nworld\n"));

        assert!(matches!(result, Err(LitError::Format(_))));
    }
}
