// crates/domain/src/analytics.rs
pub mod summary;

pub use summary::{GroupSummary, summarize};
