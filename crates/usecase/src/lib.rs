//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`rewrite`]: read, parse, update, serialize and write back a POM
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod rewrite;

pub use rewrite::RewriteVersion;
