use crate::html::TreeNode;

/// A wrapper around a tree node, such as a query result from a test harness.
///
/// Unwrapping may legitimately find nothing; printing then yields `None`.
pub trait ElementHandle {
    type Node: TreeNode;

    fn native_node(&self) -> Option<&Self::Node>;
}

/// An unresolved lookup is `None`
impl<'n, N: TreeNode> ElementHandle for Option<&'n N> {
    type Node = N;

    fn native_node(&self) -> Option<&N> {
        *self
    }
}

/// Anything that can be printed: a node, or a handle wrapping one
pub enum Printable<'a, N: TreeNode> {
    Node(&'a N),
    Handle(&'a dyn ElementHandle<Node = N>),
}

impl<'a, N: TreeNode> Printable<'a, N> {
    pub fn handle<H: ElementHandle<Node = N>>(handle: &'a H) -> Self {
        Printable::Handle(handle)
    }

    /// The node to print, if there is one
    pub fn resolve(&self) -> Option<&'a N> {
        match *self {
            Printable::Node(node) => Some(node),
            Printable::Handle(handle) => handle.native_node(),
        }
    }
}

impl<'a, N: TreeNode> From<&'a N> for Printable<'a, N> {
    fn from(node: &'a N) -> Self {
        Printable::Node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::DOMNode;

    struct Fixture {
        root: DOMNode,
    }

    impl ElementHandle for Fixture {
        type Node = DOMNode;

        fn native_node(&self) -> Option<&DOMNode> {
            Some(&self.root)
        }
    }

    #[test]
    fn test_resolve_node() {
        let node = DOMNode::tag("p", vec![]);
        assert_eq!(Printable::from(&node).resolve(), Some(&node));
    }

    #[test]
    fn test_resolve_handle() {
        let fixture = Fixture {
            root: DOMNode::tag("main", vec![]),
        };
        assert_eq!(Printable::handle(&fixture).resolve(), Some(&fixture.root));
    }

    #[test]
    fn test_resolve_missing() {
        let missing: Option<&DOMNode> = None;
        assert_eq!(Printable::handle(&missing).resolve(), None);
    }
}
