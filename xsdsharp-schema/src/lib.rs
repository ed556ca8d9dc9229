//! # xsdsharp Schema
//!
//! XML Schema (XSD) document parsing and type definitions.
//!
//! This crate provides:
//! - XSD parsing into a normalized node tree
//! - Uniform child access regardless of tag cardinality
//! - The ordered schema-document model consumed by code generation

pub mod document;
pub mod error;
pub mod node;
pub mod parser;

pub use document::{SchemaDocument, TypeDefinition, TypeKind};
pub use error::ParseError;
pub use node::Node;
pub use parser::parse_document;
