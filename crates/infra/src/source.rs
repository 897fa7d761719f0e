// crates/infra/src/source.rs
use serde_json::Value;
use tag_grouper_ports::source::RecordSource;
use tag_grouper_shared_kernel::{ErrorContext, InfraResult, Result};

use crate::dump::{DumpEntry, parse_dump};

/// Records already held in memory, e.g. a literal list pasted from a dump.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Value>,
}

impl InMemorySource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DumpEntry>) -> InfraResult<Self> {
        let records = entries.into_iter().map(DumpEntry::into_value).collect::<InfraResult<Vec<_>>>()?;
        Ok(Self::new(records))
    }
}

impl RecordSource for InMemorySource {
    fn describe(&self) -> String {
        match self.records.len() {
            1 => "in-memory (1 record)".to_string(),
            n => format!("in-memory ({n} records)"),
        }
    }

    fn records(&self) -> Result<Vec<Value>> {
        Ok(self.records.clone())
    }
}

/// Dump text parsed on each call to [`RecordSource::records`].
#[derive(Debug, Clone)]
pub struct DumpTextSource {
    label: String,
    text: String,
}

impl DumpTextSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { label: label.into(), text: text.into() }
    }
}

impl RecordSource for DumpTextSource {
    fn describe(&self) -> String {
        format!("dump '{}'", self.label)
    }

    fn records(&self) -> Result<Vec<Value>> {
        parse_dump(&self.text).with_context(|| format!("parsing dump '{}'", self.label))
    }
}
