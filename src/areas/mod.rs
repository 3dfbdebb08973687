//! Core repository components
//!
//! - `config`: user identity read before every commit
//! - `database`: content-addressed object store for blobs and commit records
//! - `index`: staging area mapping paths to staged object ids
//! - `refs`: HEAD and the single branch
//! - `repository`: handle tying the areas together
//! - `workspace`: working directory scanning and file reads

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
