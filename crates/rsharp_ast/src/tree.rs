//! Parent navigation over an immutable syntax tree.

use crate::syntax_node::SyntaxNode;
use crate::types::NodeId;
use rustc_hash::FxHashMap;

/// A rooted syntax tree with parent links.
///
/// Nodes only point at their children, so the parent of every node is
/// recorded once, up front, by an iterative walk. The walk uses an explicit
/// work stack and so handles trees of any depth.
pub struct SyntaxTree<'a> {
    root: SyntaxNode<'a>,
    parents: FxHashMap<NodeId, SyntaxNode<'a>>,
}

impl<'a> SyntaxTree<'a> {
    pub fn new(root: SyntaxNode<'a>) -> Self {
        let mut parents = FxHashMap::default();
        let mut work = vec![root];
        while let Some(node) = work.pop() {
            for child in node.children() {
                parents.insert(child.id(), node);
                work.push(child);
            }
        }
        Self { root, parents }
    }

    #[inline]
    pub fn root(&self) -> SyntaxNode<'a> {
        self.root
    }

    /// The parent of `node`, or `None` for the root or a node outside this tree.
    #[inline]
    pub fn parent(&self, node: SyntaxNode<'_>) -> Option<SyntaxNode<'a>> {
        self.parents.get(&node.id()).copied()
    }

    /// Iterate from the parent of `node` up to the root.
    pub fn ancestors(&self, node: SyntaxNode<'_>) -> impl Iterator<Item = SyntaxNode<'a>> + '_ {
        std::iter::successors(self.parent(node), move |n| self.parent(*n))
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.parents.len() + 1
    }
}

impl std::fmt::Debug for SyntaxTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.root.kind())
            .field("nodes", &self.node_count())
            .finish()
    }
}
