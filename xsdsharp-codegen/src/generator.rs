//! Type-graph driver and output assembly.

use crate::cache::GenContext;
use crate::classes::render_complex_type;
use crate::diagnostics::Diagnostic;
use crate::enums::render_enumeration;
use xsdsharp_schema::{SchemaDocument, TypeDefinition, TypeKind};

/// Output configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace wrapping all generated declarations.
    pub namespace: String,
    /// One indentation level.
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "Efferent.FHIR.Entities".to_string(),
            indent: "    ".to_string(),
        }
    }
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Complete generated source text.
    pub text: String,
    /// Warnings collected during the run. They never alter the text.
    pub diagnostics: Vec<Diagnostic>,
}

/// Generates C# declarations for one schema document.
pub struct Generator<'a> {
    doc: &'a SchemaDocument,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(doc: &'a SchemaDocument) -> Self {
        Self::with_config(doc, GeneratorConfig::default())
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(doc: &'a SchemaDocument, config: GeneratorConfig) -> Self {
        Self { doc, config }
    }

    /// Renders the complete output file: using directives, the namespace
    /// declaration, and every generated class and enum.
    #[must_use]
    pub fn generate(&self) -> GeneratedFile {
        let mut ctx = GenContext::new();

        let body = render_types(
            self.doc,
            self.doc.types(),
            None,
            "",
            None,
            &self.config,
            &mut ctx,
        );

        let text = format!(
            "using System;\r\nusing System.Collections.Generic;\r\n\r\nnamespace {}\r\n{{\r\n{}\r\n}}",
            self.config.namespace, body
        );

        GeneratedFile {
            text,
            diagnostics: ctx.into_diagnostics(),
        }
    }
}

/// Renders a set of type definitions.
///
/// The complex type named by `main_type` (if any) is rendered into the
/// primary text at `margin`; every other complex type is rendered one indent
/// deeper into an embedded buffer. Simple restriction types are rendered as
/// enums only when an alias context exists. With no main type the embedded
/// buffer is the entire output; with one, embedded declarations follow the
/// main type's text.
#[must_use]
pub fn render_types(
    doc: &SchemaDocument,
    types: &[TypeDefinition],
    main_type: Option<&str>,
    margin: &str,
    alias: Option<&str>,
    config: &GeneratorConfig,
    ctx: &mut GenContext,
) -> String {
    let mut text = String::new();
    let mut embed = String::new();

    for def in types {
        match def.kind {
            TypeKind::Complex => {
                if main_type == Some(def.name.as_str()) {
                    text.push_str(&render_complex_type(doc, def, margin, config, ctx));
                } else {
                    let deeper = format!("{margin}{}", config.indent);
                    embed.push_str(&render_complex_type(doc, def, &deeper, config, ctx));
                }
            }
            TypeKind::Simple => {
                if let Some(alias) = alias {
                    if def.node.has_child("restriction") {
                        text.push_str(&render_enumeration(&def.node, margin, alias, config));
                    }
                }
            }
        }
    }

    if !embed.is_empty() {
        if main_type.is_none() {
            return embed;
        }
        text.push_str(&embed);
    }

    text
}
