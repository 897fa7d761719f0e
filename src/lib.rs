// src/lib.rs
//! Group tagged debug records by tag.
//!
//! Records carry a `tag` and a `data` payload. Grouping maps every distinct
//! tag to the data recorded under it, in input order:
//!
//! ```
//! use tag_grouper::{Record, group_by_tag};
//!
//! let groups = group_by_tag(vec![Record::new("a", 1), Record::new("b", 2), Record::new("a", 3)]);
//! assert_eq!(groups.get("a"), Some(&[1, 3][..]));
//! assert_eq!(groups.get("b"), Some(&[2][..]));
//! ```
//!
//! Dynamic records (JSON objects, or the text written by debug
//! instrumentation) go through [`group_dump`] or [`GroupRecords`].

#![allow(clippy::multiple_crate_versions)]

pub use tag_grouper_domain::{
    GroupingConfig, Record, TagGroups,
    analytics::{GroupSummary, summarize},
    group_by_tag, group_by_tag_ordered,
    options::{KeyOrder, MalformedPolicy},
};
pub use tag_grouper_infra::{DumpEntry, DumpTextSource, DumpWriter, InMemorySource, debug_entry, parse_dump};
pub use tag_grouper_ports::source::RecordSource;
pub use tag_grouper_shared_kernel::{
    DomainError, EntryCount, ErrorContext, InfrastructureError, Result, SourceLine, Tag, TagGrouperError,
};
pub use tag_grouper_usecase::{GroupRecords, GroupRecordsOutput};

/// Groups JSON records held in memory.
pub fn group_records(records: Vec<serde_json::Value>, config: &GroupingConfig) -> Result<GroupRecordsOutput> {
    GroupRecords::new(&InMemorySource::new(records)).run(config)
}

/// Parses dump text and groups its entries.
pub fn group_dump(text: &str, config: &GroupingConfig) -> Result<GroupRecordsOutput> {
    GroupRecords::new(&DumpTextSource::new("inline", text)).run(config)
}
