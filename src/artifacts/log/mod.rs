//! Commit history replay for `lit logs`
//!
//! Commits carry no parent link, so history is recovered by walking the whole
//! object store and keeping the commit records. The order is the store's
//! enumeration order (shard, then file name), not commit time.

pub mod rev_list;
