//! Data structures and algorithms
//!
//! - `diff`: "new file" diffs for unstaged workspace files
//! - `index`: index entries and their line format
//! - `log`: commit replay out of the object store
//! - `objects`: object types (blob, commit) and their on-disk framing
//! - `status`: classification of workspace paths against the index

pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
