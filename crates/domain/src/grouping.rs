// crates/domain/src/grouping.rs
use std::hash::Hash;

use serde_json::Value;
use tag_grouper_shared_kernel::{DomainError, DomainResult};

use crate::{
    config::GroupingConfig,
    model::{Record, TagGroups},
    options::{KeyOrder, MalformedPolicy},
    value_objects::Tag,
};

/// Groups record data by tag in a single pass.
///
/// Each record's data lands in exactly one group, in input order. Tags keep
/// their first-appearance order. Empty input gives empty groups.
pub fn group_by_tag<T, D, I>(records: I) -> TagGroups<T, D>
where
    I: IntoIterator<Item = Record<T, D>>,
    T: Eq + Hash + Clone,
{
    let records = records.into_iter();
    let mut groups = TagGroups::with_capacity(records.size_hint().0);
    for record in records {
        let (tag, data) = record.into_parts();
        groups.push(tag, data);
    }
    groups
}

/// Like [`group_by_tag`], with the tag order chosen by `order`.
pub fn group_by_tag_ordered<T, D, I>(records: I, order: KeyOrder) -> TagGroups<T, D>
where
    I: IntoIterator<Item = Record<T, D>>,
    T: Eq + Hash + Clone + Ord,
{
    let mut groups = group_by_tag(records);
    if order == KeyOrder::Lexicographic {
        groups.sort_tags();
    }
    groups
}

/// Result of grouping dynamic records.
#[derive(Debug)]
pub struct GroupingOutcome {
    pub groups: TagGroups<Tag, Value>,
    /// Records dropped under [`MalformedPolicy::Skip`], with the reason for each.
    pub rejected: Vec<DomainError>,
}

/// Validates and groups dynamic JSON records.
///
/// With [`MalformedPolicy::Fail`] the first malformed record aborts the run
/// and its error is returned.
pub fn group_values<I>(values: I, config: &GroupingConfig) -> DomainResult<GroupingOutcome>
where
    I: IntoIterator<Item = Value>,
{
    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        match Record::try_from_value(index, value) {
            Ok(record) => records.push(record),
            Err(err) if config.on_malformed == MalformedPolicy::Skip => rejected.push(err),
            Err(err) => return Err(err),
        }
    }

    Ok(GroupingOutcome { groups: group_by_tag_ordered(records, config.key_order), rejected })
}
