// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dump;
pub mod source;

pub use dump::{DumpEntry, DumpWriter, parse_dump};
pub use source::{DumpTextSource, InMemorySource};
