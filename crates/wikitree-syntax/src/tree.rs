//! Arena-backed document tree.
//!
//! Nodes are stored in a single `Vec` and refer to each other by [`NodeId`].
//! A node's parent link is just an index, so there is no ownership cycle
//! between parents and children. The root is always the first node.

use std::ops::Index;

use crate::syntax_kind::NodeKind;

/// Index of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Payload of a text leaf. `None` for every other kind.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A parsed document tree.
///
/// Only the tree builder can add nodes; once parsing is done the tree is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                text: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Appends a structural node under `parent` and returns it.
    pub(crate) fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        self.push(parent, kind, None)
    }

    /// Appends a text leaf under `parent` and returns it.
    pub(crate) fn push_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.push(parent, NodeKind::Text, Some(text))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, text: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            text,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Walks from `id` up to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// All nodes in document order, paired with their depth.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![(self.root(), 0)],
        }
    }

    /// Concatenated payloads of all text leaves, in document order.
    pub fn text_content(&self) -> String {
        self.preorder()
            .filter_map(|(id, _)| self[id].text())
            .collect()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree[id].parent;
        Some(id)
    }
}

/// Depth-first traversal driven by an explicit stack, so arbitrarily deep
/// nesting can't overflow the call stack.
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Preorder<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree[id]
                .children
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> (Tree, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.root();
        let bold = tree.push_node(root, NodeKind::Bold);
        let word = tree.push_text(bold, "word".into());
        tree.push_text(root, "tail".into());
        (tree, bold, word)
    }

    #[test]
    fn new_tree_has_only_root() {
        let tree = Tree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree[tree.root()].kind(), NodeKind::Root);
        assert_eq!(tree[tree.root()].parent(), None);
    }

    #[test]
    fn push_links_parent_and_child() {
        let (tree, bold, word) = sample();
        assert_eq!(tree[word].parent(), Some(bold));
        assert_eq!(tree[bold].children(), &[word]);
        assert_eq!(tree[word].text(), Some("word"));
        assert_eq!(tree[bold].text(), None);
        assert_eq!(tree.get(NodeId(99)), None);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let (tree, bold, word) = sample();
        let chain: Vec<NodeId> = tree.ancestors(word).collect();
        assert_eq!(chain, vec![word, bold, tree.root()]);
        assert_eq!(tree.depth(word), 2);
        assert_eq!(tree.depth(tree.root()), 0);
    }

    #[test]
    fn preorder_is_document_order() {
        let (tree, _, _) = sample();
        let visited: Vec<(NodeKind, usize)> = tree
            .preorder()
            .map(|(id, depth)| (tree[id].kind(), depth))
            .collect();
        assert_eq!(
            visited,
            vec![
                (NodeKind::Root, 0),
                (NodeKind::Bold, 1),
                (NodeKind::Text, 2),
                (NodeKind::Text, 1),
            ]
        );
        assert_eq!(tree.text_content(), "wordtail");
    }
}
