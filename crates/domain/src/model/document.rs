use super::element::Element;

/// Values of the `<?xml ...?>` declaration, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self { version: "1.0".to_string(), encoding: Some("UTF-8".to_string()), standalone: None }
    }
}

/// A parsed XML document: optional declaration plus exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub declaration: Option<XmlDeclaration>,
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { declaration: None, root }
    }

    pub fn with_declaration(mut self, declaration: XmlDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }
}
