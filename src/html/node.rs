use super::dom::{DOMNode, DOMNodeType};

pub const TEXT_NODE_NAME: &str = "#text";
pub const COMMENT_NODE_NAME: &str = "#comment";

/// Read-only view of a node in an HTML-like tree.
///
/// Text and comment nodes report the reserved names [`TEXT_NODE_NAME`] and
/// [`COMMENT_NODE_NAME`]; every other name is taken to be an element's tag.
/// Implementors must describe a finite, acyclic tree: printing recurses once per
/// level and a cycle exhausts the stack.
pub trait TreeNode {
    fn node_name(&self) -> &str;

    fn child_nodes(&self) -> &[Self]
    where
        Self: Sized;

    /// Attribute names in document order. Empty for anything but elements
    fn attribute_names(&self) -> Vec<&str>;

    fn get_attribute(&self, name: &str) -> Option<&str>;

    /// Character data of text and comment nodes
    fn node_value(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
}

impl NodeKind {
    pub fn of<N: TreeNode + ?Sized>(node: &N) -> Self {
        match node.node_name() {
            TEXT_NODE_NAME => NodeKind::Text,
            COMMENT_NODE_NAME => NodeKind::Comment,
            _ => NodeKind::Element,
        }
    }
}

impl TreeNode for DOMNode {
    fn node_name(&self) -> &str {
        match &self.node_type {
            DOMNodeType::Element(elt) => elt.tag_name.as_str(),
            DOMNodeType::Text(_) => TEXT_NODE_NAME,
            DOMNodeType::Comment(_) => COMMENT_NODE_NAME,
        }
    }

    fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    fn attribute_names(&self) -> Vec<&str> {
        self.as_element()
            .map(|elt| elt.attributes.names().collect())
            .unwrap_or_default()
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|elt| elt.get_attribute(name))
    }

    fn node_value(&self) -> Option<&str> {
        match &self.node_type {
            DOMNodeType::Text(data) | DOMNodeType::Comment(data) => Some(data.as_str()),
            DOMNodeType::Element(_) => None,
        }
    }
}

#[cfg(test)]
#[test]
fn test_classify() {
    use super::dom::DOMAttributes;

    assert_eq!(NodeKind::of(&DOMNode::text("hi")), NodeKind::Text);
    assert_eq!(NodeKind::of(&DOMNode::comment("note")), NodeKind::Comment);
    assert_eq!(
        NodeKind::of(&DOMNode::element("div", DOMAttributes::empty(), vec![])),
        NodeKind::Element
    );
    // Unknown markers are still elements
    assert_eq!(NodeKind::of(&DOMNode::tag("#document", vec![])), NodeKind::Element);
}

#[cfg(test)]
#[test]
fn test_dom_node_contract() {
    let node = DOMNode::element(
        "input",
        crate::attributes!("type" => "text", "value" => "x"),
        vec![],
    );
    assert_eq!(node.node_name(), "input");
    assert_eq!(node.attribute_names(), vec!["type", "value"]);
    assert_eq!(node.get_attribute("value"), Some("x"));
    assert_eq!(node.node_value(), None);

    let text = DOMNode::text("Hello");
    assert!(text.attribute_names().is_empty());
    assert_eq!(text.get_attribute("type"), None);
    assert_eq!(text.node_value(), Some("Hello"));
}
