use pom_version_domain::{Body, Document, Element, Node, XmlDeclaration};
use pom_version_shared_kernel::{InfraResult, InfrastructureError};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event},
};

type XmlWriter = Writer<Vec<u8>>;

/// Serializes `document` with `indent` spaces per nesting level.
///
/// A missing declaration is written as `version="1.0" encoding="UTF-8"`.
/// The output ends with a newline.
pub fn serialize_document(document: &Document, indent: usize) -> InfraResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);

    let default_decl = XmlDeclaration::default();
    let decl = document.declaration.as_ref().unwrap_or(&default_decl);
    write(
        &mut writer,
        Event::Decl(BytesDecl::new(&decl.version, decl.encoding.as_deref(), decl.standalone.as_deref())),
    )?;
    write_element(&mut writer, &document.root)?;

    let mut output = String::from_utf8(writer.into_inner())
        .map_err(|e| InfrastructureError::Serialization { details: e.to_string() })?;
    output.push('\n');
    Ok(output)
}

fn write_element(writer: &mut XmlWriter, element: &Element) -> InfraResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    match &element.body {
        Body::Text(text) if text.is_empty() => write(writer, Event::Empty(start)),
        Body::Children(nodes) if nodes.is_empty() => write(writer, Event::Empty(start)),
        Body::Text(text) => {
            write(writer, Event::Start(start))?;
            write(writer, Event::Text(BytesText::new(text)))?;
            write(writer, Event::End(BytesEnd::new(element.name.as_str())))
        }
        Body::Children(nodes) => {
            write(writer, Event::Start(start))?;
            for node in nodes {
                match node {
                    Node::Element(child) => write_element(writer, child)?,
                    Node::Comment(comment) => {
                        write(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?
                    }
                    Node::ProcessingInstruction(content) => {
                        write(writer, Event::PI(BytesPI::new(content.as_str())))?
                    }
                }
            }
            write(writer, Event::End(BytesEnd::new(element.name.as_str())))
        }
    }
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> InfraResult<()> {
    writer
        .write_event(event)
        .map_err(|e| InfrastructureError::Serialization { details: e.to_string() })
}
