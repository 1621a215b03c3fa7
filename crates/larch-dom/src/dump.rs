//! Depth-indicated textual dump of a document tree.
//!
//! The root is printed bare; every descendant is printed as
//! `<indent>-<name>` where the indent is one space per level of depth:
//!
//! ```text
//! html
//!  -body
//!   -h1
//!    -Title
//! ```

use std::fmt::Write;

use super::Node;

/// Render the tree rooted at `root` as a dump, one line per node.
///
/// Lines are separated by `\n`; there is no trailing newline.
#[must_use]
pub fn dump_tree(root: &Node) -> String {
    let mut out = String::new();
    dump_node(root, 0, &mut out);
    out
}

fn dump_node(node: &Node, depth: usize, out: &mut String) {
    if depth > 0 {
        out.push('\n');
        let _ = write!(out, "{}-", " ".repeat(depth));
    }
    out.push_str(node.name());
    for child in node.children() {
        dump_node(child, depth + 1, out);
    }
}
