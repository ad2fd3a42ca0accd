//! Split a trie at an index: recurse to the split point, handing each
//! ancestor back a left piece and a right piece (either may be absent
//! when the split falls exactly on a boundary), then reassemble two
//! branches at each level with freshly computed size tables.

use std::sync::Arc;

use crate::node::{build_branch, Node, BITS};
use crate::search::locate;

/// Split the trie rooted at `node` (shift `shift`) so that the left piece
/// holds indices `0..index` and the right piece holds `index..`.
/// `index` must be in `0..=count_of(node, shift)`.
pub(crate) fn split<T: Clone>(node: &Node<T>, shift: u32, index: usize) -> (Option<Node<T>>, Option<Node<T>>) {
    match node {
        Node::Leaf(leaf) => {
            let left = if index == 0 {
                None
            } else {
                Some(Node::leaf(leaf.values[..index].to_vec()))
            };
            let right = if index == leaf.values.len() {
                None
            } else {
                Some(Node::leaf(leaf.values[index..].to_vec()))
            };
            (left, right)
        }
        Node::Branch(branch) => {
            if index == 0 {
                return (None, Some(node.clone()));
            }
            let total = crate::node::count_of(node, shift);
            if index == total {
                return (Some(node.clone()), None);
            }
            let loc = locate(branch, index, shift);
            let child_shift = shift.saturating_sub(BITS);
            let (child_left, child_right) = split(&branch.children[loc.slot], child_shift, loc.residual);

            let mut left_children: Vec<Arc<Node<T>>> = branch.children[..loc.slot].to_vec();
            if let Some(cl) = child_left {
                left_children.push(Arc::new(cl));
            }
            let mut right_children: Vec<Arc<Node<T>>> = Vec::new();
            if let Some(cr) = child_right {
                right_children.push(Arc::new(cr));
            }
            right_children.extend(branch.children[loc.slot + 1..].iter().cloned());

            let left = if left_children.is_empty() {
                None
            } else {
                Some(build_branch(left_children, shift))
            };
            let right = if right_children.is_empty() {
                None
            } else {
                Some(build_branch(right_children, shift))
            };
            (left, right)
        }
    }
}

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;
