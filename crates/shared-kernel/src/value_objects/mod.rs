// crates/shared-kernel/src/value_objects/mod.rs
pub mod version;

pub use version::VersionValue;
