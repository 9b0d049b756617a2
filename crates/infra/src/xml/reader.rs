use std::borrow::Cow;

use pom_version_domain::{Body, Document, Element, Node, XmlDeclaration};
use pom_version_shared_kernel::{InfraResult, InfrastructureError};
use quick_xml::{
    Reader,
    events::{BytesDecl, BytesStart, Event},
};
use tracing::debug;

/// Element whose end tag has not been seen yet.
struct OpenElement {
    element: Element,
    text: String,
    nodes: Vec<Node>,
}

impl OpenElement {
    fn start(start: &BytesStart<'_>, position: u64) -> InfraResult<Self> {
        let name = utf8(start.name().as_ref(), position)?.to_string();
        let mut element = Element::new(name);
        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(position, e))?;
            let key = utf8(attr.key.as_ref(), position)?.to_string();
            let value = attr.unescape_value().map_err(|e| malformed(position, e))?;
            element.attributes.push((key, value.into_owned()));
        }
        Ok(Self { element, text: String::new(), nodes: Vec::new() })
    }

    /// Builds the element body.
    ///
    /// Whitespace between child nodes is layout and is dropped. Text beside
    /// child elements is mixed content and rejected. Text beside only
    /// comments or processing instructions keeps the text and drops those
    /// nodes, since a text body cannot hold them.
    fn finish(self, position: u64) -> InfraResult<Element> {
        let Self { mut element, text, nodes } = self;
        let has_text = !text.trim().is_empty();
        element.body = if nodes.is_empty() {
            Body::Text(text)
        } else if !has_text {
            Body::Children(nodes)
        } else if nodes.iter().any(Node::is_element) {
            return Err(malformed(
                position,
                format!("mixed text and child elements in <{}> are not supported", element.name),
            ));
        } else {
            debug!(element = %element.name, dropped = nodes.len(), "dropping non-element nodes beside text");
            Body::Text(text)
        };
        Ok(element)
    }
}

/// Parses `text` into a [`Document`] with exactly one root element.
///
/// Comments and processing instructions inside the root are kept; those
/// outside it and the DOCTYPE are dropped.
pub fn parse_document(text: &str) -> InfraResult<Document> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::from_str(text);

    let mut declaration = None;
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| malformed(reader.error_position() as u64, e))?;
        match event {
            Event::Decl(decl) => {
                if root.is_some() || !stack.is_empty() {
                    return Err(malformed(position, "XML declaration after the root element"));
                }
                declaration = Some(read_declaration(&decl, position)?);
            }
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(malformed(position, "more than one root element"));
                }
                stack.push(OpenElement::start(&start, position)?);
            }
            Event::Empty(start) => {
                let element = OpenElement::start(&start, position)?.finish(position)?;
                attach(element, &mut stack, &mut root, position)?;
            }
            Event::End(_) => {
                let open = stack
                    .pop()
                    .ok_or_else(|| malformed(position, "closing tag without an open element"))?;
                let element = open.finish(position)?;
                attach(element, &mut stack, &mut root, position)?;
            }
            Event::Text(content) => {
                let content = content.unescape().map_err(|e| malformed(position, e))?;
                push_text(&mut stack, &content, position)?;
            }
            Event::CData(content) => {
                let raw = content.into_inner();
                let content = utf8(&raw, position)?;
                push_text(&mut stack, content, position)?;
            }
            Event::Comment(content) => {
                if let Some(open) = stack.last_mut() {
                    open.nodes.push(Node::Comment(utf8(&content, position)?.to_string()));
                }
            }
            Event::PI(content) => {
                if let Some(open) = stack.last_mut() {
                    let raw = utf8(&content, position)?.to_string();
                    open.nodes.push(Node::ProcessingInstruction(raw));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(
            reader.buffer_position() as u64,
            format!("unclosed element <{}>", open.element.name),
        ));
    }
    let root = root.ok_or_else(|| malformed(0, "document has no root element"))?;
    Ok(Document { declaration, root })
}

fn attach(
    element: Element,
    stack: &mut [OpenElement],
    root: &mut Option<Element>,
    position: u64,
) -> InfraResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.nodes.push(Node::Element(element)),
        None if root.is_some() => return Err(malformed(position, "more than one root element")),
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [OpenElement], content: &str, position: u64) -> InfraResult<()> {
    match stack.last_mut() {
        Some(open) => open.text.push_str(content),
        None if content.trim().is_empty() => {}
        None => return Err(malformed(position, "text outside the root element")),
    }
    Ok(())
}

fn read_declaration(decl: &BytesDecl<'_>, position: u64) -> InfraResult<XmlDeclaration> {
    let version = decl.version().map_err(|e| malformed(position, e))?;
    let encoding = decl.encoding().transpose().map_err(|e| malformed(position, e))?;
    let standalone = decl.standalone().transpose().map_err(|e| malformed(position, e))?;
    Ok(XmlDeclaration {
        version: owned(version, position)?,
        encoding: encoding.map(|v| owned(v, position)).transpose()?,
        standalone: standalone.map(|v| owned(v, position)).transpose()?,
    })
}

fn owned(bytes: Cow<'_, [u8]>, position: u64) -> InfraResult<String> {
    utf8(&bytes, position).map(str::to_string)
}

fn utf8(bytes: &[u8], position: u64) -> InfraResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| malformed(position, e))
}

fn malformed(position: u64, details: impl ToString) -> InfrastructureError {
    InfrastructureError::Parse { position, details: details.to_string() }
}
