// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// Iteration order of tags in the grouped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Order in which each tag first appears in the input.
    #[default]
    FirstSeen,
    /// Sorted by the tag's ordering (see [`Tag`](crate::value_objects::Tag) for dynamic tags).
    Lexicographic,
}

/// What to do with a record that lacks a field or has the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    #[default]
    Fail,
    Skip,
}
