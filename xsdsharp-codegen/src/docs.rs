//! XML documentation comment rendering.

use xsdsharp_schema::Node;

/// Builds a C# `<summary>` block from a node's documentation annotations.
///
/// One `///` line per source documentation line, indented at `margin`.
/// Returns empty text when the node carries no documentation.
#[must_use]
pub fn build_summary(node: &Node, margin: &str) -> String {
    let lines = node.documentation();

    if lines.is_empty() {
        return String::new();
    }

    let mut summary = format!("{margin}/// <summary>\r\n");
    for line in &lines {
        summary.push_str(&format!("{margin}/// {line}\r\n"));
    }
    summary.push_str(&format!("{margin}/// </summary>\r\n"));

    summary
}
