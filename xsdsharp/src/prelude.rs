//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use xsdsharp::prelude::*;
//! ```

// Schema types
pub use xsdsharp_schema::{Node, ParseError, SchemaDocument, TypeDefinition, TypeKind};
pub use xsdsharp_schema::parse_document;

// Codegen types
pub use xsdsharp_codegen::{
    CodegenError, Diagnostic, DiagnosticKind, GeneratedFile, Generator, GeneratorConfig,
};
pub use xsdsharp_codegen::{generate_from_file, generate_from_xml, generate_from_xml_with};
