// crates/domain/src/analytics/summary.rs
use serde::Serialize;

use crate::{model::TagGroups, value_objects::EntryCount};

/// Entry count for a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary<T> {
    pub tag: T,
    pub count: EntryCount,
}

/// Summarises groups by entry count.
///
/// Sorted by count (desc), ties broken by tag (asc) so output is stable
/// regardless of the groups' key order.
pub fn summarize<T, D>(groups: &TagGroups<T, D>) -> Vec<GroupSummary<T>>
where
    T: Ord + Clone,
{
    let mut rows: Vec<GroupSummary<T>> = groups
        .iter()
        .map(|(tag, data)| GroupSummary { tag: tag.clone(), count: EntryCount::new(data.len()) })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    rows
}
