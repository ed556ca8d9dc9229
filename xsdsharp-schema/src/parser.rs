//! XSD document parser.
//!
//! This module parses an XML Schema document into the normalized [`Node`]
//! tree and extracts the top-level type definitions.

use crate::document::SchemaDocument;
use crate::error::ParseError;
use crate::node::Node;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses an XSD document from a string.
///
/// # Arguments
/// * `xml` - XSD document content
///
/// # Returns
/// The schema document with its ordered type definitions.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or no `schema` root element
/// is found.
pub fn parse_document(xml: &str) -> Result<SchemaDocument, ParseError> {
    let root = parse_tree(xml)?;
    SchemaDocument::from_root(root)
}

/// Parses the raw XML into the normalized node tree.
///
/// Namespace prefixes are stripped from element names, so `xs:complexType`
/// and `complexType` produce the same tag.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or empty.
pub fn parse_tree(xml: &str) -> Result<Node, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(node_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = node_from_start(e)?;
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())?;
                if !text.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push(text.to_string());
                    }
                }
            }
            Ok(Event::End(_)) => {
                let node = stack.pop().ok_or_else(|| {
                    ParseError::invalid_structure("unbalanced closing element")
                })?;
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| ParseError::invalid_structure("no root element found"))
}

/// Builds a node from a start (or empty) element event.
fn node_from_start(e: &BytesStart<'_>) -> Result<Node, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let name = std::str::from_utf8(&name_bytes)?;
    let mut node = Node::new(local_name(name));

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        node.attributes.push((key.to_string(), value.to_string()));
    }

    Ok(node)
}

/// Attaches a completed node to its parent, or records it as the root.
fn attach(stack: &mut Vec<Node>, root: &mut Option<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            // First completed top-level element wins as the document root.
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

/// Strips the namespace prefix from a qualified name.
fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
