//! Object types and operations
//!
//! Everything in the store is an object identified by a SHA-1 hash:
//!
//! - **Blob**: file content (raw bytes)
//! - **Commit**: an author, a timestamp and a message
//!
//! Both share the on-disk framing `<type> <size>\0<content>`, so the type of
//! any stored object is known without guessing from its content.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
