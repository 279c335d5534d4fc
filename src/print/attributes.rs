use crate::colors::{ColorRole, Palette};
use crate::html::{NodeKind, TreeNode};

/// ` name="value" ...` in attribute order, or nothing for elements without attributes.
///
/// Values are quoted as they are: a `"` inside a value is not escaped.
pub(crate) fn print_attributes<N: TreeNode>(node: &N, palette: &Palette) -> String {
    if NodeKind::of(node) != NodeKind::Element {
        return String::new();
    }
    let attributes: Vec<String> = node
        .attribute_names()
        .into_iter()
        .map(|name| print_attribute(node, name, palette))
        .collect();
    if attributes.is_empty() {
        String::new()
    } else {
        format!(" {}", attributes.join(" "))
    }
}

fn print_attribute<N: TreeNode>(node: &N, name: &str, palette: &Palette) -> String {
    let value = node.get_attribute(name).unwrap_or_default();
    format!(
        "{}={}",
        palette.paint(ColorRole::AttributeName, name),
        palette.paint(ColorRole::AttributeValue, &format!("\"{}\"", value))
    )
}
