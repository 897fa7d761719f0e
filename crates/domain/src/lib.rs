// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod grouping;
pub mod model;
pub mod options;
pub mod value_objects;

pub use config::GroupingConfig;
pub use grouping::{GroupingOutcome, group_by_tag, group_by_tag_ordered, group_values};
pub use model::{Record, TagGroups};
