// crates/domain/src/value_objects.rs
//! Value objects shared with the kernel crate.

pub use tag_grouper_shared_kernel::value_objects::{EntryCount, SourceLine, Tag};
