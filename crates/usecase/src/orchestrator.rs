// crates/usecase/src/orchestrator.rs
use tag_grouper_domain::{analytics::summarize, config::GroupingConfig, grouping::group_values};
use tag_grouper_ports::source::RecordSource;
use tag_grouper_shared_kernel::{ApplicationError, ErrorContext, Result};
use tracing::{debug, warn};

use crate::dto::GroupRecordsOutput;

pub struct GroupRecords<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> GroupRecords<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    pub fn run(&self, config: &GroupingConfig) -> Result<GroupRecordsOutput> {
        let label = self.source.describe();
        let values = self.source.records().map_err(|e| ApplicationError::SourceFailed {
            reason: format!("{label}: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(source = %label, records = values.len(), "loaded records");

        let outcome = group_values(values, config).with_context(|| format!("grouping records from {label}"))?;
        for rejected in &outcome.rejected {
            warn!(source = %label, error = %rejected, "skipping malformed record");
        }

        let summary = summarize(&outcome.groups);
        debug!(
            source = %label,
            tags = outcome.groups.len(),
            entries = outcome.groups.total_entries(),
            skipped = outcome.rejected.len(),
            "grouped records"
        );

        Ok(GroupRecordsOutput { groups: outcome.groups, summary, skipped: outcome.rejected.len() })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tag_grouper_shared_kernel::{DomainError, Tag, TagGrouperError};

    use super::*;

    struct StubSource {
        records: Vec<Value>,
    }

    impl RecordSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        fn records(&self) -> Result<Vec<Value>> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn records(&self) -> Result<Vec<Value>> {
            Err(DomainError::InvalidConfiguration { reason: "unavailable".into() }.into())
        }
    }

    #[test]
    fn run_groups_and_summarises() {
        let stub = StubSource {
            records: vec![
                json!({"tag": "a", "data": 1}),
                json!({"tag": "b", "data": 2}),
                json!({"tag": "a", "data": 3}),
            ],
        };
        let output = GroupRecords::new(&stub).run(&GroupingConfig::default()).expect("run succeeds");
        assert_eq!(output.groups.get(&Tag::from("a")), Some(&[json!(1), json!(3)][..]));
        assert_eq!(output.summary[0].tag, Tag::from("a"));
        assert_eq!(output.summary[0].count.value(), 2);
        assert_eq!(output.skipped, 0);
    }

    #[test]
    fn strict_run_surfaces_missing_field_with_context() {
        let stub = StubSource { records: vec![json!({"data": 1})] };
        let err = GroupRecords::new(&stub).run(&GroupingConfig::strict()).unwrap_err();
        let TagGrouperError::Context { context, source } = err else {
            panic!("expected context error");
        };
        assert_eq!(context, "grouping records from stub");
        assert!(matches!(*source, TagGrouperError::Domain(DomainError::MissingField { field: "tag", .. })));
    }

    #[test]
    fn lenient_run_counts_skipped_records() {
        let stub = StubSource { records: vec![json!({"tag": "a"}), json!({"tag": "a", "data": null})] };
        let output = GroupRecords::new(&stub).run(&GroupingConfig::lenient()).expect("run succeeds");
        assert_eq!(output.skipped, 1);
        assert_eq!(output.groups.total_entries(), 1);
    }

    #[test]
    fn source_failures_are_application_errors() {
        let err = GroupRecords::new(&FailingSource).run(&GroupingConfig::default()).unwrap_err();
        assert!(matches!(err, TagGrouperError::Application(ApplicationError::SourceFailed { .. })));
        let message = err.to_string();
        assert!(message.contains("broken"), "{message}");
        assert!(message.contains("unavailable"), "{message}");
    }
}
