//! Point removal and tail promotion: a single recursive pass that drops
//! one element, collapsing an emptied child, plus extracting the
//! rightmost leaf of a trie to serve as a sequence's tail when the tail
//! has run dry.

use std::sync::Arc;

use crate::node::{build_branch, collapse_height, Node, BITS};
use crate::search::locate;

/// Remove the element at `index` from the trie rooted at `node` (own
/// shift `shift`). Returns `None` if the subtree becomes empty.
pub(crate) fn remove<T: Clone>(node: &Node<T>, index: usize, shift: u32) -> Option<Node<T>> {
    match node {
        Node::Leaf(leaf) => {
            if leaf.values.len() == 1 {
                None
            } else {
                let mut values = leaf.values.clone();
                values.remove(index);
                Some(Node::leaf(values))
            }
        }
        Node::Branch(branch) => {
            let loc = locate(branch, index, shift);
            let child_shift = shift.saturating_sub(BITS);
            match remove(&branch.children[loc.slot], loc.residual, child_shift) {
                Some(new_child) => {
                    let mut children = branch.children.clone();
                    children[loc.slot] = Arc::new(new_child);
                    Some(build_branch(children, shift))
                }
                None => {
                    let mut children = branch.children.clone();
                    children.remove(loc.slot);
                    if children.is_empty() {
                        None
                    } else {
                        Some(build_branch(children, shift))
                    }
                }
            }
        }
    }
}

/// Remove from a whole trie, collapsing height afterward. Returns the new
/// `(root, shift)`; `root` is `None` when the trie becomes entirely empty.
pub(crate) fn remove_root<T: Clone>(root: &Node<T>, index: usize, shift: u32) -> (Option<Arc<Node<T>>>, u32) {
    match remove(root, index, shift) {
        Some(node) => {
            let (collapsed, new_shift) = collapse_height(node, shift);
            (Some(Arc::new(collapsed)), new_shift)
        }
        None => (None, 0),
    }
}

/// Extract the rightmost leaf's values from the trie rooted at `node`,
/// returning the promoted values and the remaining trie (`None` if the
/// whole subtree was that one leaf).
fn promote<T: Clone>(node: &Node<T>, shift: u32) -> (Vec<T>, Option<Node<T>>) {
    match node {
        Node::Leaf(leaf) => (leaf.values.clone(), None),
        Node::Branch(branch) => {
            let last = branch.children.len() - 1;
            let child_shift = shift.saturating_sub(BITS);
            let (promoted, remainder) = promote(&branch.children[last], child_shift);
            match remainder {
                Some(rem) => {
                    let mut children = branch.children.clone();
                    children[last] = Arc::new(rem);
                    (promoted, Some(build_branch(children, shift)))
                }
                None if last == 0 => (promoted, None),
                None => {
                    let children = branch.children[..last].to_vec();
                    (promoted, Some(build_branch(children, shift)))
                }
            }
        }
    }
}

/// Promote the trie's rightmost leaf to serve as a sequence's new tail.
/// Returns `(promoted values, remaining (root, shift))`; the remaining
/// root is `None` (with `shift == 0`) when the whole trie was that leaf.
pub(crate) fn promote_tail<T: Clone>(root: &Node<T>, shift: u32) -> (Vec<T>, Option<Arc<Node<T>>>, u32) {
    let (promoted, remainder) = promote(root, shift);
    match remainder {
        Some(rem) => {
            let (collapsed, new_shift) = collapse_height(rem, shift);
            (promoted, Some(Arc::new(collapsed)), new_shift)
        }
        None => (promoted, None, 0),
    }
}

#[cfg(test)]
#[path = "remove_test.rs"]
mod remove_test;
