//! Single-pass insertion with leaf-split propagation. Chosen over a
//! split-then-concat alternative since it avoids that approach's extra
//! tree traversal and is faster in practice.

use std::sync::Arc;

use crate::node::{build_branch, Node, B, BITS};
use crate::search::locate;

/// Outcome of inserting one value somewhere below a node: either the node
/// absorbed it without growing past `B` slots, or it had to split into two
/// nodes of the same shift, which the caller must fold into its own
/// children (possibly splitting itself in turn).
pub(crate) enum Insertion<T> {
    Single(Node<T>),
    Split(Node<T>, Node<T>),
}

fn insert_leaf<T: Clone>(values: &[T], index: usize, value: T) -> Insertion<T> {
    if values.len() < B {
        let mut values = values.to_vec();
        values.insert(index, value);
        return Insertion::Single(Node::leaf(values));
    }
    let mut values = values.to_vec();
    values.insert(index, value);
    let right = values.split_off((B + 1) / 2);
    Insertion::Split(Node::leaf(values), Node::leaf(right))
}

/// Insert `value` at `index` within the trie rooted at `node` (own shift
/// `shift`). `index` must be in `0..=count_of(node, shift)`.
pub(crate) fn insert<T: Clone>(node: &Node<T>, index: usize, shift: u32, value: T) -> Insertion<T> {
    match node {
        Node::Leaf(leaf) => insert_leaf(&leaf.values, index, value),
        Node::Branch(branch) => {
            let loc = locate(branch, index, shift);
            let child_shift = shift.saturating_sub(BITS);
            match insert(&branch.children[loc.slot], loc.residual, child_shift, value) {
                Insertion::Single(new_child) => {
                    let mut children = branch.children.clone();
                    children[loc.slot] = Arc::new(new_child);
                    Insertion::Single(build_branch(children, shift))
                }
                Insertion::Split(new_child, overflow) => {
                    let mut children = branch.children.clone();
                    children[loc.slot] = Arc::new(new_child);
                    children.insert(loc.slot + 1, Arc::new(overflow));
                    if children.len() <= B {
                        Insertion::Single(build_branch(children, shift))
                    } else {
                        let right_children = children.split_off((B + 1) / 2);
                        let left = build_branch(children, shift);
                        let right = build_branch(right_children, shift);
                        Insertion::Split(left, right)
                    }
                }
            }
        }
    }
}

/// Insert into a whole trie (possibly absent), growing height on a final
/// root-level overflow.
pub(crate) fn insert_root<T: Clone>(
    root: Option<Arc<Node<T>>>,
    shift: u32,
    index: usize,
    value: T,
) -> (Arc<Node<T>>, u32) {
    match root {
        None => (Arc::new(Node::leaf(vec![value])), 0),
        Some(root) => match insert(root.as_ref(), index, shift, value) {
            Insertion::Single(n) => (Arc::new(n), shift),
            Insertion::Split(l, r) => {
                let new_shift = shift + BITS;
                let children = vec![Arc::new(l), Arc::new(r)];
                (Arc::new(build_branch(children, new_shift)), new_shift)
            }
        },
    }
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
