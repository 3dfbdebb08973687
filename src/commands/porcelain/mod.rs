//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: create the repository layout
//! - `config`: set the author identity
//! - `add`: stage files
//! - `status`: compare the workspace against the index
//! - `diff`: show workspace files that were never staged
//! - `commit`: record a commit
//! - `log`: replay every commit out of the object store

pub mod add;
pub mod commit;
pub mod config;
pub mod diff;
pub mod init;
pub mod log;
pub mod status;
