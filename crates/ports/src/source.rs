// crates/ports/src/source.rs
use serde_json::Value;
use tag_grouper_shared_kernel::Result;

/// Supplies the raw, not yet validated records of one grouping run.
pub trait RecordSource: Send + Sync {
    /// Short label used in logs and error context.
    fn describe(&self) -> String;

    fn records(&self) -> Result<Vec<Value>>;
}
