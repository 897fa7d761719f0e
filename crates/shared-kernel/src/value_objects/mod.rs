// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod tag;

pub use counts::{EntryCount, SourceLine};
pub use tag::Tag;
