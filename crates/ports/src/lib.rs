// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where dynamic debug records come from
//!
//! These ports keep the domain and application layers independent of how
//! records are obtained (in-memory literal, dump text, ...).

#![allow(clippy::multiple_crate_versions)]

pub mod source;
