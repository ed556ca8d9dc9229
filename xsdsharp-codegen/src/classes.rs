//! Class declaration rendering.
//!
//! The central recursive renderer. Each complex type becomes either a C#
//! class, an enum wrapper (a complex type whose only content is a typed
//! attribute referencing a value-set simple type), or nothing at all when it
//! carries no structural content.

use crate::cache::{FieldSnapshot, GenContext};
use crate::diagnostics::DiagnosticKind;
use crate::docs::build_summary;
use crate::generator::{GeneratorConfig, render_types};
use crate::names::{
    identifier_base, is_nullable, is_repeated, map_primitive, normalize_identifier, property_type,
    to_title_case,
};
use xsdsharp_schema::{Node, SchemaDocument, TypeDefinition};

/// Renders one complex type definition.
///
/// A type with none of `complexContent`/`restriction`, `complexContent`/
/// `extension`, or a direct `sequence` produces empty output (it is abstract
/// or unused) and a diagnostic.
#[must_use]
pub fn render_complex_type(
    doc: &SchemaDocument,
    def: &TypeDefinition,
    margin: &str,
    config: &GeneratorConfig,
    ctx: &mut GenContext,
) -> String {
    let node = &def.node;
    let name = def.name.as_str();

    // Structural content in priority order: explicit-content restriction,
    // explicit-content extension, direct sequence.
    let complex_content = node.child("complexContent");
    let (base, sequence, attribute) =
        if let Some(restriction) = complex_content.and_then(|c| c.child("restriction")) {
            (
                restriction.attr("base"),
                restriction.child("sequence"),
                restriction.child("attribute"),
            )
        } else if let Some(extension) = complex_content.and_then(|c| c.child("extension")) {
            (
                extension.attr("base"),
                extension.child("sequence"),
                extension.child("attribute"),
            )
        } else if let Some(sequence) = node.child("sequence") {
            (None, Some(sequence), node.child("attribute"))
        } else {
            ctx.warn(DiagnosticKind::MissingContent, name);
            return String::new();
        };

    let elements: Vec<&Node> = sequence
        .map(|s| s.children("element").collect())
        .unwrap_or_default();

    if elements.is_empty() {
        return render_enum_wrapper(doc, node, name, attribute, margin, config, ctx);
    }

    render_class(doc, node, name, base, &elements, margin, config, ctx)
}

/// Renders a complex type whose sequence is empty: an enumeration wrapping a
/// single typed attribute.
fn render_enum_wrapper(
    doc: &SchemaDocument,
    node: &Node,
    name: &str,
    attribute: Option<&Node>,
    margin: &str,
    config: &GeneratorConfig,
    ctx: &mut GenContext,
) -> String {
    let Some(attr_type) = attribute.and_then(|a| a.attr("type")) else {
        return String::new();
    };

    let Some(target) = doc.get(attr_type) else {
        ctx.warn(
            DiagnosticKind::UnknownTypeRef,
            format!("{attr_type} (attribute of '{name}')"),
        );
        return String::new();
    };

    let alias = normalize_identifier(name);
    let content = render_types(
        doc,
        std::slice::from_ref(target),
        Some(attr_type),
        margin,
        Some(&alias),
        config,
        ctx,
    );

    if content.is_empty() {
        return String::new();
    }

    let mut text = build_summary(node, margin);
    text.push_str(&content);
    text
}

/// Renders a record-type complex type as a class declaration.
#[allow(clippy::too_many_arguments)]
fn render_class(
    doc: &SchemaDocument,
    node: &Node,
    name: &str,
    base: Option<&str>,
    elements: &[&Node],
    margin: &str,
    config: &GeneratorConfig,
    ctx: &mut GenContext,
) -> String {
    let is_component = name.contains('.');
    let mut text = String::new();
    let mut margin = margin.to_string();

    if is_component {
        // Component types are fragments merged into an enclosing partial
        // declaration named after the outer type.
        text.push_str(&format!(
            "{margin}public partial class {}\r\n{margin}{{\r\n",
            identifier_base(name)
        ));
        margin.push_str(&config.indent);
    }

    let class_name = normalize_identifier(name);
    let base_snapshot = base.and_then(|b| ctx.snapshot(b)).cloned();
    let mut snapshot = match &base_snapshot {
        Some(base_fields) => FieldSnapshot::with_base(base_fields.clone()),
        None => FieldSnapshot::new(),
    };

    text.push_str(&build_summary(node, &margin));

    let partial = if is_component { "" } else { "partial " };
    let inherit = base.map(|b| format!(" : {b}")).unwrap_or_default();
    text.push_str(&format!(
        "{margin}public {partial}class {class_name}{inherit}\r\n{margin}{{\r\n"
    ));

    let field_margin = format!("{margin}{}", config.indent);

    for element in elements {
        let Some(type_name) = element.attr("type") else {
            ctx.warn(
                DiagnosticKind::UntypedElement,
                element.attr("name").unwrap_or("?"),
            );
            continue;
        };

        if map_primitive(&normalize_identifier(type_name)).is_none() && !doc.has_type(type_name) {
            ctx.warn(
                DiagnosticKind::UnknownTypeRef,
                format!("{type_name} (field of '{name}')"),
            );
        }

        let prop_type = property_type(type_name, is_nullable(element));
        let prop_name = to_title_case(element.attr("name").unwrap_or_default());
        snapshot.insert(prop_name.clone(), prop_type.clone());

        // Override suppression: a field already declared by the rendered
        // base would be a duplicate member in C#.
        if let Some(base_fields) = &base_snapshot {
            if base_fields.contains(&prop_name) {
                continue;
            }
        }

        text.push_str(&build_summary(element, &field_margin));
        if is_repeated(element) {
            text.push_str(&format!(
                "{field_margin}public List<{prop_type}> {prop_name} {{ get; set; }}\r\n"
            ));
        } else {
            text.push_str(&format!(
                "{field_margin}public {prop_type} {prop_name} {{ get; set; }}\r\n"
            ));
        }
        text.push_str("\r\n");
    }

    text.push_str(&format!("{margin}}}\r\n"));

    if is_component {
        let outer = &margin[..margin.len() - config.indent.len()];
        text.push_str(&format!("{outer}}}\r\n"));
    } else {
        ctx.commit(class_name, snapshot);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdsharp_schema::parse_document;

    fn render(xml: &str, type_name: &str) -> (String, GenContext) {
        let doc = parse_document(xml).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let mut ctx = GenContext::new();
        let def = doc.get(type_name).expect("type present");
        let text = render_complex_type(&doc, def, "", &config, &mut ctx);
        (text, ctx)
    }

    const PATIENT_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Patient">
        <xs:annotation>
            <xs:documentation>Demographics for a person receiving care.</xs:documentation>
        </xs:annotation>
        <xs:complexContent>
            <xs:extension base="DomainResource">
                <xs:sequence>
                    <xs:element name="active" minOccurs="0" maxOccurs="1" type="boolean"/>
                    <xs:element name="name" minOccurs="0" maxOccurs="unbounded" type="HumanName"/>
                    <xs:element name="birthDate" minOccurs="1" maxOccurs="1" type="date"/>
                    <xs:element name="contained" minOccurs="0" maxOccurs="1"/>
                </xs:sequence>
            </xs:extension>
        </xs:complexContent>
    </xs:complexType>
    <xs:complexType name="HumanName">
        <xs:sequence>
            <xs:element name="text" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    #[test]
    fn test_class_header_and_inheritance() {
        let (text, _) = render(PATIENT_SCHEMA, "Patient");
        assert!(text.contains("public partial class Patient : DomainResource\r\n"));
        assert!(text.contains("/// Demographics for a person receiving care."));
    }

    #[test]
    fn test_field_declarations() {
        let (text, ctx) = render(PATIENT_SCHEMA, "Patient");

        // Optional nullable-capable primitive gets the suffix.
        assert!(text.contains("public bool? Active { get; set; }"));
        // Required one does not.
        assert!(text.contains("public DateTime BirthDate { get; set; }"));
        // Unbounded fields become lists.
        assert!(text.contains("public List<HumanName> Name { get; set; }"));
        // The type-less element is skipped but reported.
        assert!(!text.contains("Contained"));
        assert_eq!(
            ctx.diagnostics()
                .iter()
                .filter(|d| d.kind == DiagnosticKind::UntypedElement)
                .count(),
            1
        );
    }

    #[test]
    fn test_emitted_field_count() {
        let (text, _) = render(PATIENT_SCHEMA, "Patient");
        // Four sequence elements, one without a type.
        assert_eq!(text.matches("{ get; set; }").count(), 3);
    }

    #[test]
    fn test_direct_sequence_without_complex_content() {
        let (text, _) = render(PATIENT_SCHEMA, "HumanName");
        assert!(text.contains("public partial class HumanName\r\n"));
        assert!(text.contains("public string Text { get; set; }"));
    }

    #[test]
    fn test_root_class_commits_snapshot() {
        let doc = parse_document(PATIENT_SCHEMA).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let mut ctx = GenContext::new();
        let def = doc.get("Patient").unwrap();
        let _ = render_complex_type(&doc, def, "", &config, &mut ctx);

        let snapshot = ctx.snapshot("Patient").expect("committed");
        assert!(snapshot.contains("Active"));
        assert!(snapshot.contains("BirthDate"));
    }

    const OVERRIDE_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Bar">
        <xs:sequence>
            <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
    </xs:complexType>
    <xs:complexType name="Foo">
        <xs:complexContent>
            <xs:extension base="Bar">
                <xs:sequence>
                    <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
                    <xs:element name="value" minOccurs="0" maxOccurs="1" type="integer"/>
                </xs:sequence>
            </xs:extension>
        </xs:complexContent>
    </xs:complexType>
</xs:schema>"#;

    #[test]
    fn test_inherited_field_suppressed() {
        let doc = parse_document(OVERRIDE_SCHEMA).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let mut ctx = GenContext::new();

        let bar = doc.get("Bar").unwrap();
        let bar_text = render_complex_type(&doc, bar, "", &config, &mut ctx);
        assert!(bar_text.contains("public string Name { get; set; }"));

        let foo = doc.get("Foo").unwrap();
        let foo_text = render_complex_type(&doc, foo, "", &config, &mut ctx);
        assert!(!foo_text.contains("Name { get; set; }"));
        assert!(foo_text.contains("public int? Value { get; set; }"));

        // The suppressed field is still recomputed into Foo's snapshot.
        assert!(ctx.snapshot("Foo").unwrap().contains("Name"));
    }

    #[test]
    fn test_unrendered_base_means_empty_snapshot() {
        let doc = parse_document(OVERRIDE_SCHEMA).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let mut ctx = GenContext::new();

        // Render Foo without Bar having been cached: nothing is suppressed.
        let foo = doc.get("Foo").unwrap();
        let foo_text = render_complex_type(&doc, foo, "", &config, &mut ctx);
        assert!(foo_text.contains("public string Name { get; set; }"));
    }

    const COMPONENT_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Patient.Contact">
        <xs:sequence>
            <xs:element name="relationship" minOccurs="0" maxOccurs="unbounded" type="CodeableConcept"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    #[test]
    fn test_component_wrapped_in_partial_outer() {
        let (text, ctx) = render(COMPONENT_SCHEMA, "Patient.Contact");

        assert!(text.starts_with("public partial class Patient\r\n{\r\n"));
        assert!(text.contains("    public class ContactComponent\r\n"));
        assert!(text.contains("public List<CodeableConcept> Relationship { get; set; }"));
        // Component snapshots are ephemeral.
        assert!(ctx.snapshot("ContactComponent").is_none());
    }

    const ABSTRACT_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Base" abstract="true"/>
</xs:schema>"#;

    #[test]
    fn test_missing_content_renders_nothing() {
        let (text, ctx) = render(ABSTRACT_SCHEMA, "Base");
        assert!(text.is_empty());
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].kind, DiagnosticKind::MissingContent);
    }

    const WRAPPER_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:simpleType name="AdministrativeGender-list">
        <xs:restriction base="xs:string">
            <xs:enumeration value="male"/>
            <xs:enumeration value="female"/>
        </xs:restriction>
    </xs:simpleType>
    <xs:complexType name="AdministrativeGender">
        <xs:annotation>
            <xs:documentation>The gender of a person used for administrative purposes.</xs:documentation>
        </xs:annotation>
        <xs:complexContent>
            <xs:extension base="Element">
                <xs:attribute name="value" type="AdministrativeGender-list" use="optional"/>
            </xs:extension>
        </xs:complexContent>
    </xs:complexType>
</xs:schema>"#;

    #[test]
    fn test_enum_wrapper_renders_aliased_enum() {
        let (text, _) = render(WRAPPER_SCHEMA, "AdministrativeGender");

        assert!(text.contains("public enum AdministrativeGender\r\n"));
        assert!(text.contains("Male"));
        assert!(text.contains("Female"));
        // The wrapper's own documentation prefixes the enum.
        assert!(
            text.starts_with("/// <summary>\r\n/// The gender of a person used for administrative purposes.")
        );
        assert!(!text.contains("class"));
    }
}
