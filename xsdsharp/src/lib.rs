//! # xsdsharp
//!
//! C# entity-class generation from XML Schema (XSD) documents.
//!
//! xsdsharp reads one schema document describing a family of record types
//! and emits one C# source file with class and enum declarations mirroring
//! the schema's type graph.
//!
//! ## Quick Start
//!
//! ```ignore
//! use xsdsharp::prelude::*;
//!
//! let generated = xsdsharp::codegen::generate_from_xml(&xml)?;
//! std::fs::write("fhir-single.cs", &generated.text)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XSD parsing into a normalized node tree
//! - [`codegen`] - C# class and enum generation

pub mod prelude;

/// Schema document parsing.
pub mod schema {
    pub use xsdsharp_schema::*;
}

/// C# code generation from schema documents.
pub mod codegen {
    pub use xsdsharp_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xsdsharp_codegen::{
    CodegenError, Diagnostic, GeneratedFile, Generator, GeneratorConfig, generate_from_file,
    generate_from_xml, generate_from_xml_with,
};
pub use xsdsharp_schema::{ParseError, SchemaDocument, parse_document};
