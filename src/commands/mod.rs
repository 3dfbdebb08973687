//! Command implementations
//!
//! - `plumbing`: low-level commands for direct object manipulation (hash-object, cat-file)
//! - `porcelain`: user-facing commands (init, config, add, status, diff, commit, logs)
//!
//! Every command is an `impl Repository` block returning its payload; printing
//! is left to the binary.

pub mod plumbing;
pub mod porcelain;
