//! # Domain
//!
//! The generic XML document tree and the one mutation the tool performs on
//! it: replacing the text of the `<version>` child of `<project>`.

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod rewrite;

pub use model::{Body, Document, Element, Node, XmlDeclaration};
pub use rewrite::{PROJECT_ELEMENT, VERSION_ELEMENT, VersionChange, set_project_version};
