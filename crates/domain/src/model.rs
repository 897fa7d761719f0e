// crates/domain/src/model.rs
pub mod record;
pub mod tag_groups;

pub use record::Record;
pub use tag_groups::TagGroups;
