//! Diffs between the index and the workspace
//!
//! Only workspace files that were never staged produce a diff: each one is
//! shown as a new file against `/dev/null`. Staged files are not compared line
//! by line.

pub mod diff_target;
