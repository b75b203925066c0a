//! Path reconstruction from parent links.

use crate::node::{NodeId, ScoredNode};

/// Reconstruct the path from the root to `terminal`.
///
/// Follows parent links until a node without a parent is reached, then
/// reverses, so the result starts at the initial node and ends at
/// `terminal`. A terminal node without a parent yields a single-element
/// path. Does not mutate any node.
///
/// # Panics
///
/// Panics if `terminal` or a parent link points outside `nodes`.
#[must_use]
pub fn reconstruct_path<N>(nodes: &[ScoredNode<N>], terminal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::with_capacity(nodes[terminal].depth as usize + 1);
    let mut current = Some(terminal);

    while let Some(id) = current {
        path.push(id);
        current = nodes[id].parent;
        // Arenas only append, so a parent always precedes its child.
        debug_assert!(!matches!(current, Some(parent) if parent >= id));
    }

    path.reverse();
    path
}

/// Same as [`reconstruct_path`], resolving ids to node records.
///
/// # Panics
///
/// Panics if `terminal` or a parent link points outside `nodes`.
#[must_use]
pub fn path_nodes<N>(nodes: &[ScoredNode<N>], terminal: NodeId) -> Vec<&ScoredNode<N>> {
    reconstruct_path(nodes, terminal)
        .into_iter()
        .map(|id| &nodes[id])
        .collect()
}
