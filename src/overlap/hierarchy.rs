//! Arena-backed overlap hierarchy.

use crate::error::{CertumError, Result};
use std::collections::HashSet;

/// Handle to a node of an [`OverlapHierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One curve and, for merged curves, the two nodes it was merged from.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapNode<C> {
    curve: C,
    origins: Option<(NodeId, NodeId)>,
}

impl<C> OverlapNode<C> {
    #[inline]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// The two merged nodes, `None` for a leaf.
    #[inline]
    pub fn origins(&self) -> Option<(NodeId, NodeId)> {
        self.origins
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.origins.is_none()
    }
}

/// Append-only provenance forest for curves merged during a sweep.
///
/// Leaves are input curves. Every merge appends an inner node with exactly
/// two origins, so each tree is a full binary tree. Nodes are never
/// modified once added and all of them are dropped with the hierarchy.
#[derive(Debug, Clone)]
pub struct OverlapHierarchy<C> {
    nodes: Vec<OverlapNode<C>>,
}

impl<C> Default for OverlapHierarchy<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OverlapHierarchy<C> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes, leaves and inner nodes together.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds an input curve.
    pub fn add_leaf(&mut self, curve: C) -> NodeId {
        self.push(curve, None)
    }

    /// Records that `first` and `second` coincide along `curve`.
    ///
    /// Fails if either handle is unknown or if the operands already share a
    /// leaf, which would list that leaf twice below the new node.
    pub fn merge(&mut self, curve: C, first: NodeId, second: NodeId) -> Result<NodeId> {
        let (a, b) = (self.view(first)?, self.view(second)?);
        if let Some(shared) = a.first_common_leaf(&b) {
            return Err(CertumError::SharedLeaf {
                index: shared.index(),
            });
        }
        let depth = a.overlap_depth().max(b.overlap_depth()) + 1;
        let id = self.push(curve, Some((first, second)));
        tracing::trace!(
            node = id.index(),
            first = first.index(),
            second = second.index(),
            depth,
            "merged overlapping curves"
        );
        Ok(id)
    }

    fn push(&mut self, curve: C, origins: Option<(NodeId, NodeId)>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(OverlapNode { curve, origins });
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&OverlapNode<C>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn curve(&self, id: NodeId) -> Option<&C> {
        self.node(id).map(OverlapNode::curve)
    }

    #[inline]
    pub fn origins(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.node(id).and_then(OverlapNode::origins)
    }

    /// Read-only view of the tree rooted at `id`.
    pub fn view(&self, id: NodeId) -> Result<NodeRef<'_, C>> {
        match self.node(id) {
            Some(_) => Ok(NodeRef {
                hierarchy: self,
                id,
            }),
            None => Err(CertumError::UnknownNode { index: id.index() }),
        }
    }

    /// Handles of every node, in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Origins of a node already known to be in the arena.
    #[inline]
    fn origins_of(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.nodes[id.0].origins
    }
}

/// A node together with its hierarchy.
///
/// Traversals are recomputed on every call.
#[derive(Debug)]
pub struct NodeRef<'a, C> {
    hierarchy: &'a OverlapHierarchy<C>,
    id: NodeId,
}

impl<C> Clone for NodeRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for NodeRef<'_, C> {}

impl<'a, C> NodeRef<'a, C> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn curve(&self) -> &'a C {
        &self.hierarchy.nodes[self.id.0].curve
    }

    #[inline]
    pub fn is_leaf_node(&self) -> bool {
        self.hierarchy.origins_of(self.id).is_none()
    }

    /// Views of the two origins, `None` for a leaf.
    pub fn origins(&self) -> Option<(NodeRef<'a, C>, NodeRef<'a, C>)> {
        self.hierarchy
            .origins_of(self.id)
            .map(|(a, b)| (self.with_id(a), self.with_id(b)))
    }

    fn with_id(&self, id: NodeId) -> NodeRef<'a, C> {
        NodeRef {
            hierarchy: self.hierarchy,
            id,
        }
    }

    /// Every node of the subtree, depth first, first origin first.
    fn subtree(&self) -> impl Iterator<Item = NodeId> + 'a {
        let hierarchy = self.hierarchy;
        let mut stack = vec![self.id];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            if let Some((first, second)) = hierarchy.origins_of(id) {
                stack.push(second);
                stack.push(first);
            }
            Some(id)
        })
    }

    /// Leaves of the subtree, depth first, first origin first. A leaf yields
    /// itself.
    pub fn all_leaves(&self) -> impl Iterator<Item = NodeId> + 'a {
        let hierarchy = self.hierarchy;
        self.subtree()
            .filter(move |&id| hierarchy.origins_of(id).is_none())
    }

    fn leaf_set(&self) -> HashSet<NodeId> {
        self.all_leaves().collect()
    }

    /// `true` if `node` is this node or any node below it.
    pub fn is_inner_node(&self, node: NodeId) -> bool {
        self.subtree().any(|id| id == node)
    }

    /// `true` if `node` is a leaf below (or equal to) this node.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.all_leaves().any(|id| id == node)
    }

    /// `true` if both subtrees have the same leaves, in any order.
    pub fn has_same_leaves(&self, other: &NodeRef<'_, C>) -> bool {
        self.leaf_set() == other.leaf_set()
    }

    /// `true` if the subtrees share at least one leaf.
    pub fn has_common_leaf(&self, other: &NodeRef<'_, C>) -> bool {
        self.first_common_leaf(other).is_some()
    }

    fn first_common_leaf(&self, other: &NodeRef<'_, C>) -> Option<NodeId> {
        let theirs = other.leaf_set();
        self.all_leaves().find(|id| theirs.contains(id))
    }

    /// Maximal subtrees of this node sharing no leaf with `other`.
    ///
    /// An origin that is a node of `other` is skipped whole, an origin
    /// sharing only some leaves with `other` is split further, and any
    /// other origin is emitted as is. The emitted leaves are exactly this
    /// node's leaves minus those of `other`.
    pub fn distinct_nodes(&self, other: &NodeRef<'_, C>) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_distinct(other, &other.leaf_set(), &mut out);
        out
    }

    fn collect_distinct(
        &self,
        other: &NodeRef<'_, C>,
        other_leaves: &HashSet<NodeId>,
        out: &mut Vec<NodeId>,
    ) {
        let Some((first, second)) = self.origins() else {
            if !other_leaves.contains(&self.id) {
                out.push(self.id);
            }
            return;
        };
        for origin in [first, second] {
            if other.is_inner_node(origin.id) {
                continue;
            }
            if origin.all_leaves().any(|id| other_leaves.contains(&id)) {
                origin.collect_distinct(other, other_leaves, out);
            } else {
                out.push(origin.id);
            }
        }
    }

    /// 1 for a leaf, otherwise one more than the deeper origin.
    pub fn overlap_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.id, 1)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some((first, second)) = self.hierarchy.origins_of(id) {
                stack.push((first, depth + 1));
                stack.push((second, depth + 1));
            }
        }
        deepest
    }
}
