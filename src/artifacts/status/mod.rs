//! Working tree status inspection
//!
//! Status is a pure comparison between two snapshots: what the workspace holds
//! right now and what the index staged. Nothing here touches the disk.
//!
//! ## Components
//!
//! - `file_change`: classification of a single path
//! - `status_info`: classification of every path and the rendered report

pub mod file_change;
pub mod status_info;
