//! XML codec built on `quick-xml`.

pub mod reader;
pub mod writer;

use pom_version_domain::Document;
use pom_version_ports::DocumentCodec;
use pom_version_shared_kernel::Result;

pub use reader::parse_document;
pub use writer::serialize_document;

pub const DEFAULT_INDENT: usize = 2;

/// [`DocumentCodec`] backed by `quick-xml`, writing `indent` spaces per level.
#[derive(Debug, Clone, Copy)]
pub struct QuickXmlCodec {
    pub indent: usize,
}

impl QuickXmlCodec {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for QuickXmlCodec {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl DocumentCodec for QuickXmlCodec {
    fn parse(&self, text: &str) -> Result<Document> {
        Ok(parse_document(text)?)
    }

    fn serialize(&self, document: &Document) -> Result<String> {
        Ok(serialize_document(document, self.indent)?)
    }
}
