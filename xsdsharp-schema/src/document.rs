//! Schema document model.
//!
//! A parsed XSD is reduced to its named type definitions: simple types
//! (value sets) and complex types (records). Definitions keep their raw
//! structural content as a [`Node`] subtree for the code generator to walk.

use crate::error::ParseError;
use crate::node::Node;
use std::collections::HashMap;

/// Kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Simple type, typically a restriction over a primitive.
    Simple,
    /// Complex type with internal structure.
    Complex,
}

/// One named type definition from the schema.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// Type name, unique within one schema document.
    pub name: String,
    /// Simple or complex.
    pub kind: TypeKind,
    /// Raw structural content (restriction/extension/sequence/attribute).
    pub node: Node,
}

impl TypeDefinition {
    /// Returns true if the name encodes ownership by an outer type
    /// (`Outer.Inner`), rendered as a nested component rather than a
    /// standalone top-level type.
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.name.contains('.')
    }
}

/// All named types of one schema document.
///
/// Definitions are kept as an explicit ordered sequence (all simple types in
/// document order, then all complex types in document order) alongside a
/// name lookup, so rendering order never depends on map iteration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
}

impl SchemaDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from the parsed `schema` root node.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidStructure` if the root is not a `schema`
    /// element.
    pub fn from_root(root: Node) -> Result<Self, ParseError> {
        if root.tag != "schema" {
            return Err(ParseError::invalid_structure(format!(
                "expected schema root element, found '{}'",
                root.tag
            )));
        }

        let mut simple = Vec::new();
        let mut complex = Vec::new();

        for child in root.children {
            match child.tag.as_str() {
                "simpleType" => simple.push(child),
                "complexType" => complex.push(child),
                _ => {}
            }
        }

        let mut doc = Self::new();
        for node in simple {
            doc.add_node(TypeKind::Simple, node);
        }
        for node in complex {
            doc.add_node(TypeKind::Complex, node);
        }

        Ok(doc)
    }

    fn add_node(&mut self, kind: TypeKind, node: Node) {
        // Unnamed definitions cannot be referenced and contribute nothing.
        let Some(name) = node.attr("name").map(str::to_string) else {
            return;
        };

        self.add_type(TypeDefinition { name, kind, node });
    }

    /// Adds a type definition. A definition with an already-known name
    /// replaces the previous one in place, keeping its position.
    pub fn add_type(&mut self, def: TypeDefinition) {
        match self.index.get(&def.name) {
            Some(&idx) => self.types[idx] = def,
            None => {
                let idx = self.types.len();
                self.index.insert(def.name.clone(), idx);
                self.types.push(def);
            }
        }
    }

    /// Returns the ordered type definitions.
    #[must_use]
    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    /// Looks up a type definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of type definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the document holds no type definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_node(tag: &str, name: &str) -> Node {
        let mut node = Node::new(tag);
        node.attributes.push(("name".to_string(), name.to_string()));
        node
    }

    #[test]
    fn test_from_root_orders_simple_before_complex() {
        let mut root = Node::new("schema");
        root.children.push(named_node("complexType", "Patient"));
        root.children.push(named_node("simpleType", "Status-list"));
        root.children.push(named_node("complexType", "Observation"));

        let doc = SchemaDocument::from_root(root).expect("valid root");
        let names: Vec<&str> = doc.types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Status-list", "Patient", "Observation"]);
        assert_eq!(doc.get("Patient").unwrap().kind, TypeKind::Complex);
        assert_eq!(doc.get("Status-list").unwrap().kind, TypeKind::Simple);
    }

    #[test]
    fn test_from_root_rejects_other_roots() {
        let root = Node::new("definitions");
        assert!(SchemaDocument::from_root(root).is_err());
    }

    #[test]
    fn test_unnamed_definitions_skipped() {
        let mut root = Node::new("schema");
        root.children.push(Node::new("complexType"));
        root.children.push(named_node("complexType", "Patient"));

        let doc = SchemaDocument::from_root(root).expect("valid root");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut doc = SchemaDocument::new();
        doc.add_type(TypeDefinition {
            name: "Patient".to_string(),
            kind: TypeKind::Simple,
            node: Node::new("simpleType"),
        });
        doc.add_type(TypeDefinition {
            name: "Patient".to_string(),
            kind: TypeKind::Complex,
            node: Node::new("complexType"),
        });

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("Patient").unwrap().kind, TypeKind::Complex);
    }

    #[test]
    fn test_is_component() {
        let def = TypeDefinition {
            name: "Patient.Contact".to_string(),
            kind: TypeKind::Complex,
            node: Node::new("complexType"),
        };
        assert!(def.is_component());

        let plain = TypeDefinition {
            name: "Patient".to_string(),
            kind: TypeKind::Complex,
            node: Node::new("complexType"),
        };
        assert!(!plain.is_component());
    }
}
