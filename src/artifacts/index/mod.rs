//! Index file format
//!
//! The index (staging area) records, for every staged path, the id of the blob
//! that was stored when it was added. It is plain text, one entry per line:
//!
//! ```text
//! <40-hex object id> <path relative to the worktree root>
//! ```
//!
//! Lines are kept sorted by path, so rewriting an unchanged index is a no-op.
//! Paths with control characters, quotes, backslashes or non-ASCII bytes are
//! written C-quoted (`"a\nb.txt"`).

pub mod index_entry;
pub mod path_quote;

/// Separator between the object id and the path on an index line
pub const FIELD_SEPARATOR: char = ' ';
