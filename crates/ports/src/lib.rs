//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`codec`]: turning XML text into a document tree and back
//! - [`store`]: reading and replacing the target file
//!
//! These ports keep the use case independent of the XML library and of
//! how the file is locked and written.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod store;

pub use codec::DocumentCodec;
pub use store::DocumentStore;
