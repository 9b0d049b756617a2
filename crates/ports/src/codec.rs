// crates/ports/src/codec.rs
use pom_version_domain::Document;
use pom_version_shared_kernel::Result;

/// Port for converting between XML text and the document tree.
///
/// Implementations must be stable under `parse(serialize(doc)) == doc` for any
/// document they produced from `parse`.
pub trait DocumentCodec {
    fn parse(&self, text: &str) -> Result<Document>;
    fn serialize(&self, document: &Document) -> Result<String>;
}
