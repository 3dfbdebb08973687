#![allow(dead_code)]

pub mod command;
pub mod file;

/// Fixed author date so commit ids are reproducible across runs
pub const AUTHOR_DATE: &str = "2023-01-15 12:00:00 +0000";

pub fn is_object_id(candidate: &str) -> bool {
    candidate.len() == 40 && candidate.chars().all(|c| c.is_ascii_hexdigit())
}
