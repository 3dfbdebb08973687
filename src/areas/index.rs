//! Index (staging area)
//!
//! The index tracks which content each path will have in the next commit.
//! Staging a path upserts its entry and leaves every other entry alone, so
//! files staged one `add` at a time accumulate.
//!
//! ## Data Structures
//!
//! - `entries`: maps worktree-relative paths to their index entries, sorted by path

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, LitError, Result};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Staged path to object id snapshot, as compared by status and diff
pub type IndexSnapshot = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    /// Staged files mapped by path
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// Fails with [`LitError::NotFound`] when nothing was ever staged. An empty
    /// file is a valid, empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .map_err(|e| LitError::from_read(self.path(), e))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .at(self.path())?;

        self.clear();

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => {
                    LitError::format("index file is not valid UTF-8")
                }
                _ => LitError::io(self.path(), e),
            })?;

        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            let entry = IndexEntry::parse_line(line)?;
            self.entries.insert(entry.name.clone(), entry);
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "loaded index"
        );

        Ok(())
    }

    /// Like [`Index::rehydrate`], but treats a missing index file as empty
    pub fn rehydrate_or_default(&mut self) -> Result<()> {
        match self.rehydrate() {
            Err(LitError::NotFound(_)) => {
                self.clear();
                Ok(())
            }
            result => result,
        }
    }

    /// Stage `entry`, replacing any previous entry for the same path
    pub fn add(&mut self, entry: IndexEntry) {
        let unchanged = self
            .entries
            .get(&entry.name)
            .is_some_and(|existing| existing.oid == entry.oid);

        if !unchanged {
            self.entries.insert(entry.name.clone(), entry);
            self.changed = true;
        }
    }

    /// Rewrite the index file with every entry, one line per path
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .at(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)
            .at(self.path())?;

        let content = self
            .entries()
            .map(|entry| format!("{}\n", entry.to_line()))
            .collect::<String>();

        lock.deref_mut()
            .write_all(content.as_bytes())
            .at(self.path())?;
        self.changed = false;

        tracing::debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "wrote index"
        );

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// Path to object id view of the staged entries
    pub fn snapshot(&self) -> IndexSnapshot {
        self.entries
            .iter()
            .map(|(path, entry)| (path.clone(), entry.oid.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    const OID_A: &str = "ce013625030ba8dba906f756967f9e9ca394464a";
    const OID_B: &str = "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed";

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    fn entry(path: &str, oid: &str) -> IndexEntry {
        IndexEntry::new(PathBuf::from(path), ObjectId::try_parse(oid).unwrap())
    }

    #[rstest]
    fn missing_index_is_not_found(dir: TempDir) {
        let mut index = Index::new(dir.path().join("index").into_boxed_path());

        assert!(matches!(index.rehydrate(), Err(LitError::NotFound(_))));
        assert!(index.rehydrate_or_default().is_ok());
        assert_eq!(index.entries().count(), 0);
    }

    #[rstest]
    fn staging_accumulates_entries_keyed_by_path(dir: TempDir) {
        let index_path = dir.path().join("index");

        let mut index = Index::new(index_path.clone().into_boxed_path());
        index.add(entry("b.txt", OID_A));
        index.write_updates().unwrap();

        let mut index = Index::new(index_path.clone().into_boxed_path());
        index.rehydrate().unwrap();
        index.add(entry("a.txt", OID_A));
        index.add(entry("b.txt", OID_B));
        index.write_updates().unwrap();

        let mut reloaded = Index::new(index_path.clone().into_boxed_path());
        reloaded.rehydrate().unwrap();

        assert_eq!(
            reloaded.entries().cloned().collect::<Vec<_>>(),
            vec![entry("a.txt", OID_A), entry("b.txt", OID_B)]
        );
        assert_eq!(
            std::fs::read_to_string(index_path).unwrap(),
            format!("{OID_A} a.txt\n{OID_B} b.txt\n")
        );
    }

    #[rstest]
    fn re_adding_identical_content_is_not_a_change(dir: TempDir) {
        let mut index = Index::new(dir.path().join("index").into_boxed_path());
        index.add(entry("a.txt", OID_A));
        index.write_updates().unwrap();

        index.add(entry("a.txt", OID_A));

        assert!(!index.is_changed());
    }

    #[rstest]
    fn unusual_file_names_survive_a_reload(dir: TempDir) {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let index_path = dir.path().join("index");
        let newline = PathBuf::from("a\nb.txt");
        let latin1 = PathBuf::from(OsStr::from_bytes(b"caf\xe9.txt"));

        let mut index = Index::new(index_path.clone().into_boxed_path());
        index.add(IndexEntry::new(newline.clone(), ObjectId::try_parse(OID_A).unwrap()));
        index.add(IndexEntry::new(latin1.clone(), ObjectId::try_parse(OID_B).unwrap()));
        index.write_updates().unwrap();

        let mut reloaded = Index::new(index_path.clone().into_boxed_path());
        reloaded.rehydrate().unwrap();

        assert_eq!(std::fs::read_to_string(index_path).unwrap().lines().count(), 2);
        assert_eq!(reloaded.snapshot(), index.snapshot());
        assert!(reloaded.is_tracked(&newline));
        assert!(reloaded.is_tracked(&latin1));
    }

    #[rstest]
    fn corrupt_lines_are_format_errors(dir: TempDir) {
        let index_path = dir.path().join("index");
        std::fs::write(&index_path, "not an index line\n").unwrap();

        let mut index = Index::new(index_path.into_boxed_path());

        assert!(matches!(index.rehydrate(), Err(LitError::Format(_))));
    }
}
