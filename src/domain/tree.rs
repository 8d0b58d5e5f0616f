//! Binary code tree: dot descends left, dash descends right.
//!
//! The tree is a write-once lookup table. Nodes are owned exclusively by their
//! parent, and callers only ever see shared references into the structure, so
//! nothing outside the tree can corrupt it once built.

use tracing::{instrument, trace};

use crate::domain::code::{CodePath, Signal};
use crate::domain::error::{DomainError, DomainResult};

/// One position in the tree.
///
/// `symbol` is `None` at the root and at placeholder nodes created while
/// inserting a path whose prefix had not been inserted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    symbol: Option<char>,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(symbol: Option<char>) -> Self {
        Self {
            symbol,
            left: None,
            right: None,
        }
    }

    /// Attach `node` below `self` in the direction of `signal`, replacing any
    /// existing subtree there.
    pub fn with_child(mut self, signal: Signal, node: TreeNode) -> Self {
        *self.slot_mut(signal) = Some(Box::new(node));
        self
    }

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn child(&self, signal: Signal) -> Option<&TreeNode> {
        match signal {
            Signal::Dot => self.left(),
            Signal::Dash => self.right(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, signal: Signal) -> &mut Option<Box<TreeNode>> {
        match signal {
            Signal::Dot => &mut self.left,
            Signal::Dash => &mut self.right,
        }
    }
}

/// Binary tree keyed by Morse code paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTree {
    root: TreeNode,
}

impl CodeTree {
    /// Create a tree holding only the symbol-less root (the empty code).
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(None),
        }
    }

    /// Build a tree around a caller-assembled root. The tree takes ownership,
    /// so the caller keeps no handle into it.
    pub fn from_root(root: TreeNode) -> Self {
        Self { root }
    }

    /// Read-only view of the root.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Store `symbol` at the node reached by `path`.
    ///
    /// Missing intermediate nodes are created as empty placeholders, so
    /// insertion order does not matter. Re-inserting a path overwrites its
    /// symbol.
    #[instrument(level = "trace", skip(self, path), fields(code = %path))]
    pub fn insert(&mut self, path: &CodePath, symbol: char) {
        let mut cursor = &mut self.root;
        for &signal in path.signals() {
            cursor = &mut **cursor.slot_mut(signal).get_or_insert_with(Box::default);
        }
        if let Some(previous) = cursor.symbol.replace(symbol) {
            trace!("overwrote {:?} with {:?}", previous, symbol);
        }
    }

    /// Parse `code` and insert it. Fails with `InvalidCode` on a malformed path.
    pub fn insert_code(&mut self, code: &str, symbol: char) -> DomainResult<()> {
        let path = CodePath::parse(code)?;
        self.insert(&path, symbol);
        Ok(())
    }

    /// Return the symbol at the node reached by `path`.
    ///
    /// Fails with `LookupMiss` when the walk runs out of nodes before the path
    /// is exhausted, or when the terminal node carries no symbol.
    #[instrument(level = "trace", skip(self, path), fields(code = %path))]
    pub fn fetch(&self, path: &CodePath) -> DomainResult<char> {
        let miss = || DomainError::LookupMiss {
            code: path.to_string(),
        };
        let mut cursor = &self.root;
        for &signal in path.signals() {
            cursor = cursor.child(signal).ok_or_else(miss)?;
        }
        cursor.symbol.ok_or_else(miss)
    }

    /// Look up a raw code token. Malformed tokens count as misses.
    pub fn fetch_code(&self, code: &str) -> DomainResult<char> {
        let path = CodePath::parse(code).map_err(|_| DomainError::LookupMiss {
            code: code.to_string(),
        })?;
        self.fetch(&path)
    }

    /// Always fails: the tree does not support removal.
    pub fn delete(&mut self, _symbol: char) -> DomainResult<()> {
        Err(DomainError::UnsupportedOperation {
            operation: "delete",
        })
    }

    /// Always fails: the tree does not support in-place updates.
    pub fn update(&mut self) -> DomainResult<()> {
        Err(DomainError::UnsupportedOperation {
            operation: "update",
        })
    }

    /// In-order (left, node, right) iteration over every node, root included.
    pub fn iter_in_order(&self) -> InOrder<'_> {
        InOrder::new(&self.root)
    }

    /// Symbols of all nodes in in-order sequence, `None` for the root and
    /// placeholders.
    pub fn ordered_symbols(&self) -> Vec<Option<char>> {
        self.iter_in_order().map(|(_, node)| node.symbol).collect()
    }

    /// Space-joined in-order listing used to check the tree's shape.
    ///
    /// Symbol-less nodes render as empty strings, which is why the root shows
    /// up as a double space between the dot and dash subtrees.
    pub fn fingerprint(&self) -> String {
        self.ordered_symbols()
            .into_iter()
            .map(|symbol| symbol.map(String::from).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// All (path, symbol) pairs in in-order sequence.
    pub fn entries(&self) -> Vec<(CodePath, char)> {
        self.iter_in_order()
            .filter(|(signals, _)| !signals.is_empty())
            .filter_map(|(signals, node)| {
                node.symbol
                    .map(|symbol| (CodePath::from_signals(signals), symbol))
            })
            .collect()
    }

    /// Length of the longest path below the root.
    pub fn depth(&self) -> usize {
        self.iter_in_order()
            .map(|(signals, _)| signals.len())
            .max()
            .unwrap_or(0)
    }

    /// Number of symbols reachable by a code.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Explicit-stack in-order iterator yielding each node with its path.
pub struct InOrder<'a> {
    stack: Vec<(Vec<Signal>, &'a TreeNode)>,
}

impl<'a> InOrder<'a> {
    fn new(root: &'a TreeNode) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(Vec::new(), root);
        iter
    }

    fn push_left_spine(&mut self, mut path: Vec<Signal>, mut node: &'a TreeNode) {
        loop {
            self.stack.push((path.clone(), node));
            match node.left() {
                Some(left) => {
                    path.push(Signal::Dot);
                    node = left;
                }
                None => break,
            }
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (Vec<Signal>, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        if let Some(right) = node.right() {
            let mut right_path = path.clone();
            right_path.push(Signal::Dash);
            self.push_left_spine(right_path, right);
        }
        Some((path, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> CodeTree {
        let mut tree = CodeTree::new();
        tree.insert_code(".", 'e').unwrap();
        tree.insert_code("-", 't').unwrap();
        tree.insert_code(".-", 'a').unwrap();
        tree
    }

    #[test]
    fn given_new_tree_when_listing_then_only_root_placeholder() {
        let tree = CodeTree::new();
        assert_eq!(tree.ordered_symbols(), vec![None]);
        assert_eq!(tree.fingerprint(), "");
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn given_single_and_multi_step_paths_when_fetching_then_both_resolve() {
        let tree = small_tree();
        assert_eq!(tree.fetch_code("."), Ok('e'));
        assert_eq!(tree.fetch_code(".-"), Ok('a'));
    }

    #[test]
    fn given_missing_child_at_first_and_later_step_when_fetching_then_same_miss() {
        let tree = small_tree();
        assert_eq!(
            tree.fetch_code(".."),
            Err(DomainError::LookupMiss { code: "..".into() })
        );
        assert_eq!(
            tree.fetch_code(".-.-"),
            Err(DomainError::LookupMiss {
                code: ".-.-".into()
            })
        );
    }

    #[test]
    fn given_longer_code_first_when_inserting_then_creates_placeholders() {
        let mut tree = CodeTree::new();
        tree.insert_code("..-", 'u').unwrap();

        assert_eq!(tree.fetch_code("..-"), Ok('u'));
        // "." and ".." exist now but carry no symbol
        assert!(matches!(
            tree.fetch_code(".."),
            Err(DomainError::LookupMiss { .. })
        ));
        assert_eq!(tree.ordered_symbols(), vec![None, Some('u'), None, None]);
    }

    #[test]
    fn given_same_path_twice_when_inserting_then_last_write_wins() {
        let mut tree = small_tree();
        tree.insert_code(".-", 'x').unwrap();
        assert_eq!(tree.fetch_code(".-"), Ok('x'));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn given_tree_when_iterating_in_order_then_paths_match_positions() {
        let tree = small_tree();
        let paths: Vec<String> = tree
            .iter_in_order()
            .map(|(signals, _)| signals.iter().map(|s| s.as_char()).collect())
            .collect();
        assert_eq!(paths, vec![".", ".-", "", "-"]);
    }

    #[test]
    fn given_assembled_root_when_from_root_then_lookups_follow_structure() {
        let dash = TreeNode::new(Some('t')).with_child(Signal::Dash, TreeNode::new(Some('m')));
        let root = TreeNode::new(None).with_child(Signal::Dash, dash);
        let tree = CodeTree::from_root(root);
        assert_eq!(tree.fetch_code("--"), Ok('m'));
        assert_eq!(tree.depth(), 2);
        assert!(tree.root().left().is_none());
    }

    #[test]
    fn given_cloned_tree_when_original_mutated_then_clone_unchanged() {
        let mut tree = small_tree();
        let snapshot = tree.clone();
        tree.insert_code("..", 'i').unwrap();
        assert!(snapshot.fetch_code("..").is_err());
        assert_eq!(tree.fetch_code(".."), Ok('i'));
    }
}
