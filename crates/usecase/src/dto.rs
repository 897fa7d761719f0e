// crates/usecase/src/dto.rs
use serde::Serialize;
use serde_json::Value;
use tag_grouper_domain::{analytics::GroupSummary, model::TagGroups, value_objects::Tag};

/// Result of one grouping run.
#[derive(Debug, Serialize)]
pub struct GroupRecordsOutput {
    pub groups: TagGroups<Tag, Value>,
    pub summary: Vec<GroupSummary<Tag>>,
    /// Malformed records dropped under the skip policy.
    pub skipped: usize,
}
