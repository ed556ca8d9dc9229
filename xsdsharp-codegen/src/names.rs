//! Identifier normalization and schema-to-C# type mapping.

use xsdsharp_schema::Node;

/// Suffix appended to the inner part of a dotted component name.
const COMPONENT_SUFFIX: &str = "Component";

/// Normalizes a raw schema type name into a C# identifier.
///
/// Hyphens become underscores. A dotted component name keeps only the part
/// after the last dot, suffixed with `Component`. `Reference` is renamed to
/// `ResourceReference` to avoid colliding with the built-in C# type.
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    let mut name = raw.replace('-', "_");

    if let Some(pos) = name.rfind('.') {
        name = format!("{}{}", &name[pos + 1..], COMPONENT_SUFFIX);
    }

    if name == "Reference" {
        name = "ResourceReference".to_string();
    }

    name
}

/// Returns the enclosing type name of a dotted component name.
///
/// `Patient.Contact` yields `Patient`; a name without a dot is returned
/// unchanged (after hyphen normalization).
#[must_use]
pub fn identifier_base(raw: &str) -> String {
    let name = raw.replace('-', "_");

    match name.find('.') {
        Some(pos) => name[..pos].to_string(),
        None => name,
    }
}

/// Converts a hyphenated schema value or name into a PascalCase fragment.
///
/// Splits on `-`, upper-cases each segment's first character, and joins
/// without separators: `entered-in-error` becomes `EnteredInError`.
#[must_use]
pub fn to_title_case(text: &str) -> String {
    text.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// A primitive schema type mapped to its C# representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveMapping {
    /// C# type name.
    pub csharp_type: &'static str,
    /// Whether the type takes a `?` suffix when the field is optional.
    pub nullable_capable: bool,
}

/// Maps a primitive schema type name to its C# type.
///
/// Names absent from the table are references to generated class/enum types
/// and pass through unchanged.
#[must_use]
pub fn map_primitive(name: &str) -> Option<PrimitiveMapping> {
    let mapping = |csharp_type, nullable_capable| {
        Some(PrimitiveMapping {
            csharp_type,
            nullable_capable,
        })
    };

    match name {
        "string" | "oid" | "id" | "uuid" | "markdown" | "uri" | "code" => {
            mapping("string", false)
        }
        "date" | "dateTime" => mapping("DateTime", true),
        "time" => mapping("TimeSpan", true),
        "instant" => mapping("DateTimeOffset", true),
        "positiveInt" | "unsignedInt" | "integer" => mapping("int", true),
        "decimal" => mapping("double", true),
        "base64Binary" => mapping("byte[]", false),
        "boolean" => mapping("bool", true),
        "SampledDataDataType" => mapping("string", false),
        _ => None,
    }
}

/// Resolves the C# type for a field's declared schema type.
///
/// Nullable-capable primitives gain a `?` suffix only when the field is
/// optional; unmapped names are treated as generated-type references.
#[must_use]
pub fn property_type(type_name: &str, nullable: bool) -> String {
    let normalized = normalize_identifier(type_name);

    match map_primitive(&normalized) {
        Some(mapping) => {
            let mut native = mapping.csharp_type.to_string();
            if mapping.nullable_capable && nullable {
                native.push('?');
            }
            native
        }
        None => normalized,
    }
}

/// Returns true if the element's `minOccurs` marks it optional.
#[must_use]
pub fn is_nullable(element: &Node) -> bool {
    element.attr("minOccurs").unwrap_or("1") == "0"
}

/// Returns true if the element's occurrence bounds make it a repeated field.
///
/// `maxOccurs="unbounded"` always repeats. Numeric bounds are parsed first
/// and then compared against 1; a bound that does not parse counts as 1.
#[must_use]
pub fn is_repeated(element: &Node) -> bool {
    let min_occurs = element.attr("minOccurs").unwrap_or("1");
    let max_occurs = element.attr("maxOccurs").unwrap_or("1");

    if max_occurs == "unbounded" {
        return true;
    }

    let min: u32 = min_occurs.parse().unwrap_or(1);
    if min > 1 {
        return true;
    }

    let max: u32 = max_occurs.parse().unwrap_or(1);
    max > 1
}
