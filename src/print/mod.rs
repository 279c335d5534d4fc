mod attributes;

use crate::colors::{active_palette, ColorRole, Palette};
use crate::handle::Printable;
use crate::html::{NodeKind, TreeNode};
use attributes::print_attributes;
use tracing::{span, Level};

const INDENT: &str = "  ";

/// Elements that cannot have children and are printed as `<tag />`
const VOID_TAGS: [&str; 2] = ["input", "br"];

/// Print `target` as indented markup using the active palette.
///
/// Returns `None` when `target` is a handle that does not resolve to a node.
pub fn print_html<'a, N: TreeNode + 'a>(target: impl Into<Printable<'a, N>>) -> Option<String> {
    print_html_indented(target, 0)
}

/// [`print_html`], starting `indentation` levels deep
pub fn print_html_indented<'a, N: TreeNode + 'a>(
    target: impl Into<Printable<'a, N>>,
    indentation: usize,
) -> Option<String> {
    print_html_with(target, indentation, &active_palette())
}

/// [`print_html_indented`] with an explicit palette instead of the active one
pub fn print_html_with<'a, N: TreeNode + 'a>(
    target: impl Into<Printable<'a, N>>,
    indentation: usize,
    palette: &Palette,
) -> Option<String> {
    let target: Printable<'a, N> = target.into();
    let node = target.resolve()?;
    let span = span!(Level::DEBUG, "Printing node", name = node.node_name());
    let _enter = span.enter();
    let lines = print_node(node, indentation, palette);
    Some(
        lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// The lines of `node` and everything below it. Text and comments print nothing on
/// their own; text is gathered into a single line by the parent element.
fn print_node<N: TreeNode>(node: &N, level: usize, palette: &Palette) -> Vec<String> {
    if NodeKind::of(node) != NodeKind::Element {
        return vec![];
    }

    let indentation = INDENT.repeat(level);
    let name = node.node_name().to_lowercase();
    let tag_name = palette.paint(ColorRole::TagName, &name);
    let attributes = print_attributes(node, palette);

    let children = node.child_nodes();
    if children.is_empty() {
        return if VOID_TAGS.contains(&name.as_str()) {
            vec![format!("{}<{}{} />", indentation, tag_name, attributes)]
        } else {
            vec![format!(
                "{}<{}{}></{}>",
                indentation, tag_name, attributes, tag_name
            )]
        };
    }

    let mut lines = vec![format!("{}<{}{}>", indentation, tag_name, attributes)];
    children
        .iter()
        .for_each(|child| lines.extend(print_node(child, level + 1, palette)));

    let text: Vec<&str> = children
        .iter()
        .filter(|child| NodeKind::of(*child) == NodeKind::Text)
        .map(|child| child.node_value().unwrap_or_default())
        .collect();
    if !text.is_empty() {
        lines.push(format!("{}{}{}", indentation, INDENT, text.join(" ")));
    }

    lines.push(format!("{}</{}>", indentation, tag_name));
    lines
}
