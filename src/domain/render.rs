//! Terminal rendering of a code tree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::code::Signal;
use crate::domain::tree::{CodeTree, TreeNode};

const ROOT_LABEL: &str = "(root)";
const PLACEHOLDER_LABEL: &str = "·";

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for CodeTree {
    #[instrument(level = "debug", skip(self))]
    fn to_term_tree(&self) -> Tree<String> {
        build(self.root(), String::new())
    }
}

// Dot child is listed before dash child.
fn build(node: &TreeNode, code: String) -> Tree<String> {
    let label = if code.is_empty() {
        ROOT_LABEL.to_string()
    } else {
        let symbol = node
            .symbol()
            .map(String::from)
            .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
        format!("{} {}", code, symbol)
    };

    let leaves: Vec<_> = [Signal::Dot, Signal::Dash]
        .into_iter()
        .filter_map(|signal| {
            node.child(signal)
                .map(|child| build(child, format!("{}{}", code, signal.as_char())))
        })
        .collect();

    Tree::new(label).with_leaves(leaves)
}
