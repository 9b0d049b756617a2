// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod store;
pub mod xml;

pub use store::FileDocumentStore;
pub use xml::QuickXmlCodec;
