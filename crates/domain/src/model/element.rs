/// Content of an element: either scalar text or an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Children(Vec<Node>),
}

impl Default for Body {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A child of an element. Comments and processing instructions are kept so
/// they survive a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Comment(String),
    /// Raw `<?...?>` content, target included (e.g. `m2e execute onConfiguration`).
    ProcessingInstruction(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Comment(_) | Self::ProcessingInstruction(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Comment(_) | Self::ProcessingInstruction(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An XML element with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub body: Body,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), body: Body::default() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.body = Body::Text(text.into());
        self
    }

    /// Appends a child node, turning a text body into a children body.
    ///
    /// Any text the element held is discarded.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        match &mut self.body {
            Body::Children(children) => children.push(child.into()),
            Body::Text(_) => self.body = Body::Children(vec![child.into()]),
        }
        self
    }

    /// Text content, if the body is scalar.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            Body::Children(_) => None,
        }
    }

    /// Replaces the body with `text`, dropping whatever it held before.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.body = Body::Text(text.into());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes().iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        let nodes: &mut [Node] = match &mut self.body {
            Body::Children(children) => children.as_mut_slice(),
            Body::Text(_) => Default::default(),
        };
        nodes.iter_mut().filter_map(Node::as_element_mut)
    }

    /// First direct child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    fn nodes(&self) -> &[Node] {
        match &self.body {
            Body::Children(children) => children,
            Body::Text(_) => &[],
        }
    }
}
