//! # xsdsharp Codegen
//!
//! C# code generation from XSD schema documents.
//!
//! This crate provides:
//! - Identifier normalization and primitive type mapping
//! - Enum and class declaration rendering
//! - The type-graph driver with run-scoped inheritance resolution
//! - A diagnostics channel for silently-skipped schema fragments

pub mod cache;
pub mod classes;
pub mod diagnostics;
pub mod docs;
pub mod enums;
pub mod error;
pub mod generator;
pub mod names;

pub use cache::{FieldSnapshot, GenContext};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator, GeneratorConfig};

/// Generates C# code from an XSD schema string.
///
/// # Arguments
/// * `xml` - XSD schema content
///
/// # Returns
/// The generated source text and any diagnostics.
///
/// # Errors
/// Returns `CodegenError` if parsing fails. Schema anomalies do not fail
/// generation; they surface as diagnostics.
pub fn generate_from_xml(xml: &str) -> Result<GeneratedFile, CodegenError> {
    generate_from_xml_with(xml, GeneratorConfig::default())
}

/// Generates C# code from an XSD schema string with an explicit
/// configuration.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_xml_with(
    xml: &str,
    config: GeneratorConfig,
) -> Result<GeneratedFile, CodegenError> {
    let doc = xsdsharp_schema::parse_document(xml)?;
    Ok(Generator::with_config(&doc, config).generate())
}

/// Generates C# code from an XSD schema file.
///
/// # Arguments
/// * `path` - Path to the XSD schema file
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedFile, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
