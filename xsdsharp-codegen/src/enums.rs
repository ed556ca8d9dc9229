//! Enum declaration rendering.

use crate::docs::build_summary;
use crate::generator::GeneratorConfig;
use crate::names::to_title_case;
use xsdsharp_schema::Node;

/// Renders a restriction-based simple type as a C# enum declaration.
///
/// `alias` is the declared enum name, supplied by the caller (the wrapping
/// complex type's normalized name). Returns empty text when the restriction
/// lists no enumerated values.
#[must_use]
pub fn render_enumeration(
    node: &Node,
    margin: &str,
    alias: &str,
    config: &GeneratorConfig,
) -> String {
    let Some(restriction) = node.child("restriction") else {
        return String::new();
    };

    let values: Vec<&Node> = restriction.children("enumeration").collect();
    if values.is_empty() {
        return String::new();
    }

    let mut text = build_summary(node, margin);
    text.push_str(&format!("{margin}public enum {alias}\r\n{margin}{{\r\n"));

    let value_margin = format!("{margin}{}", config.indent);
    let rendered: Vec<String> = values
        .iter()
        .map(|value| {
            let mut block = build_summary(value, &value_margin);
            let ident = sanitize_value(value.attr("value").unwrap_or_default());
            block.push_str(&format!("{value_margin}{ident}"));
            block
        })
        .collect();

    text.push_str(&rendered.join(",\r\n"));
    text.push_str("\r\n");
    text.push_str(&format!("{margin}}}\r\n"));

    text
}

/// Sanitizes a raw enumerated value into a valid C# identifier.
///
/// Relational-operator symbols get their word form, values containing a
/// digit get an `N` prefix, everything else is title-cased.
#[must_use]
pub fn sanitize_value(raw: &str) -> String {
    match raw {
        "=" => "Equal".to_string(),
        ">" => "GreaterThan".to_string(),
        ">=" => "GreaterOrEqual".to_string(),
        "<" => "LessThan".to_string(),
        "<=" => "LessOrEqual".to_string(),
        _ if raw.chars().any(|c| c.is_ascii_digit()) => format!("N{raw}"),
        _ => to_title_case(raw),
    }
}
