//! Normalized XSD node tree.
//!
//! The parser flattens the raw XML into [`Node`] values whose tags and
//! attribute access are uniform regardless of how many children share a tag.
//! Callers never need to distinguish a single occurrence from a repeated one:
//! [`Node::children`] always yields an ordered sequence.

/// One element of the parsed schema tree.
///
/// Tags are stored with their namespace prefix stripped, so `xs:complexType`
/// is addressed as `complexType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Local element name (namespace prefix stripped).
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Node>,
    /// Text runs directly inside this element.
    pub text: Vec<String>,
}

impl Node {
    /// Creates an empty node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns all children with the given tag, in document order.
    ///
    /// This is the single cardinality-uniform accessor: a tag occurring once
    /// and a tag occurring many times are traversed the same way.
    pub fn children(&self, tag: &str) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// Returns the first child with the given tag, if any.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children(tag).next()
    }

    /// Returns true if at least one child with the given tag exists.
    #[must_use]
    pub fn has_child(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    /// Extracts documentation lines attached to this node.
    ///
    /// Collects the text of every `documentation` element under every
    /// `annotation` child, split into newline-separated runs, in document
    /// order. Empty lines are dropped.
    #[must_use]
    pub fn documentation(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for annotation in self.children("annotation") {
            for doc in annotation.children("documentation") {
                for run in &doc.text {
                    for line in run.lines() {
                        if !line.is_empty() {
                            lines.push(line.to_string());
                        }
                    }
                }
            }
        }

        lines
    }
}
