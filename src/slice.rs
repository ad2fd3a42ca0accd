//! Slice-left and slice-right on a bare trie; the tail-aware range slice
//! lives on [`crate::Vector`] since it needs to reach across the root/tail
//! boundary.
//!
//! Both directions reconstruct every touched branch through
//! [`crate::node::build_branch`] rather than hand-truncating a size table:
//! that's what actually decides dense-vs-relaxed after a slice (a dense
//! branch whose surviving last child became relaxed during recursion must
//! itself turn relaxed), and at `B = 32` recomputing a branch's cumulative
//! counts from its (already known) children is O(1), so there is no
//! correctness/perf tradeoff in always going through it.

use std::sync::Arc;

use crate::node::{build_branch, Node, BITS};
use crate::search::locate;

/// Truncate the trie rooted at `node` (own shift `shift`) to hold exactly
/// its first `new_count` elements. `new_count` must be in
/// `1..=count_of(node, shift)`.
pub(crate) fn slice_right<T: Clone>(node: &Node<T>, shift: u32, new_count: usize) -> Node<T> {
    match node {
        Node::Leaf(leaf) => Node::leaf(leaf.values[..new_count].to_vec()),
        Node::Branch(branch) => {
            let loc = locate(branch, new_count - 1, shift);
            let child_shift = shift.saturating_sub(BITS);
            let mut children: Vec<Arc<Node<T>>> = branch.children[..loc.slot].to_vec();
            let last = slice_right(&branch.children[loc.slot], child_shift, loc.residual + 1);
            children.push(Arc::new(last));
            build_branch(children, shift)
        }
    }
}

/// Drop the first `to_drop` elements from the trie rooted at `node` (own
/// shift `shift`). `to_drop` must be in `0..count_of(node, shift)`; callers
/// handle `to_drop == count_of(...)` (the whole trie vanishes) themselves.
pub(crate) fn slice_left<T: Clone>(node: &Node<T>, shift: u32, to_drop: usize) -> Node<T> {
    if to_drop == 0 {
        return node.clone();
    }
    match node {
        Node::Leaf(leaf) => Node::leaf(leaf.values[to_drop..].to_vec()),
        Node::Branch(branch) => {
            let loc = locate(branch, to_drop, shift);
            let child_shift = shift.saturating_sub(BITS);
            let mut children: Vec<Arc<Node<T>>> = Vec::with_capacity(branch.children.len() - loc.slot);
            if loc.residual == 0 {
                children.extend(branch.children[loc.slot..].iter().cloned());
            } else {
                let first = slice_left(&branch.children[loc.slot], child_shift, loc.residual);
                children.push(Arc::new(first));
                children.extend(branch.children[loc.slot + 1..].iter().cloned());
            }
            build_branch(children, shift)
        }
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
