use crate::handle::Printable;
use crate::html::{NodeKind, TreeNode};

/// The text of `target` and all of its descendants, in document order.
///
/// Comments inside an element do not contribute. Returns `None` when `target`
/// is a handle that does not resolve to a node.
pub fn text_content<'a, N: TreeNode + 'a>(target: impl Into<Printable<'a, N>>) -> Option<String> {
    let target: Printable<'a, N> = target.into();
    let node = target.resolve()?;
    match NodeKind::of(node) {
        NodeKind::Text | NodeKind::Comment => {
            Some(node.node_value().unwrap_or_default().to_string())
        }
        NodeKind::Element => {
            let mut text = String::new();
            collect_text(node, &mut text);
            Some(text)
        }
    }
}

fn collect_text<N: TreeNode>(node: &N, text: &mut String) {
    for child in node.child_nodes() {
        match NodeKind::of(child) {
            NodeKind::Text => text.push_str(child.node_value().unwrap_or_default()),
            NodeKind::Comment => {}
            NodeKind::Element => collect_text(child, text),
        }
    }
}
