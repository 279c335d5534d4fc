//! Readable dumps of HTML-like node trees, for test failure output.
//!
//! ```text
//! <table>
//!   <tr data-ngtx="data-row">
//!     <td>
//!       Hans
//!     </td>
//!   </tr>
//! </table>
//! ```
//!
//! Printing works on anything implementing [`TreeNode`], or on an
//! [`ElementHandle`] wrapping one. Output is uncolored until
//! [`try_init_colors`] has installed a terminal palette.

/// Color decoration and the process-wide palette
pub mod colors;
/// Environment-driven color settings
pub mod config;
mod handle;
/// Owned node tree
pub mod html;
/// Translation of a node tree into indented lines
mod print;
mod text;

pub use colors::{active_palette, reset_colors, try_init_colors, try_init_colors_with, Palette};
pub use handle::{ElementHandle, Printable};
pub use html::TreeNode;
pub use print::{print_html, print_html_indented, print_html_with};
pub use text::text_content;

/// Print `target` to stderr and return what was printed.
///
/// Nothing is printed when `target` is a handle that does not resolve.
pub fn debug_html<'a, N: TreeNode + 'a>(target: impl Into<Printable<'a, N>>) -> Option<String> {
    let html = print_html(target)?;
    eprintln!("{}", html);
    Some(html)
}

#[cfg(test)]
#[test]
fn test_debug_html() {
    use crate::html::DOMNode;

    let node = DOMNode::tag("span", vec![]);
    assert_eq!(debug_html(&node), Some("<span></span>".to_string()));

    let missing: Option<&DOMNode> = None;
    assert_eq!(debug_html(Printable::handle(&missing)), None);
}
