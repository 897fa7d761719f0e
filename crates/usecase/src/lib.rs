// crates/usecase/src/lib.rs
//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: pulls records from a source, validates and groups them
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::GroupRecordsOutput;
pub use orchestrator::GroupRecords;
