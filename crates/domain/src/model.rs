pub mod document;
pub mod element;

pub use document::{Document, XmlDeclaration};
pub use element::{Body, Element, Node};
