//! Owned node tree and the read-only [`TreeNode`] view printing works against

mod dom;
mod node;

pub use dom::{DOMAttributes, DOMElement, DOMNode, DOMNodeType};
pub use node::{NodeKind, TreeNode, COMMENT_NODE_NAME, TEXT_NODE_NAME};
