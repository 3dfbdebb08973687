//! Plumbing commands (direct object access)
//!
//! - `hash-object`: compute, and optionally store, the blob id of a file
//! - `cat-file`: print the content of a stored object

pub mod cat_file;
pub mod hash_object;
