//! A minimal content-addressed version control core
//!
//! - `areas`: on-disk components (object database, index, workspace, refs, config)
//! - `artifacts`: values flowing between them (objects, index entries, status, diff, log)
//! - `commands`: the operations, as methods on [`areas::repository::Repository`]

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::{LitError, Result};
