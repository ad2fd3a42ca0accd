//! Point lookup and update: a single root-to-leaf walk, either
//! path-copying (persistent) or mutating in place under a builder's owner
//! token.

use std::sync::Arc;

use crate::node::{self, Node, Owner, BITS};
use crate::search::locate;

pub(crate) fn get<'a, T>(node: &'a Node<T>, index: usize, shift: u32) -> &'a T {
    match node {
        Node::Leaf(leaf) => &leaf.values[index],
        Node::Branch(branch) => {
            let loc = locate(branch, index, shift);
            get(&branch.children[loc.slot], loc.residual, shift.saturating_sub(BITS))
        }
    }
}

pub(crate) fn set<T: Clone>(node: &Node<T>, index: usize, shift: u32, value: T) -> Node<T> {
    match node {
        Node::Leaf(leaf) => {
            let mut values = leaf.values.clone();
            values[index] = value;
            Node::leaf(values)
        }
        Node::Branch(branch) => {
            let loc = locate(branch, index, shift);
            let new_child = set(&branch.children[loc.slot], loc.residual, shift.saturating_sub(BITS), value);
            let mut children = branch.children.clone();
            children[loc.slot] = Arc::new(new_child);
            Node::Branch(crate::node::Branch {
                owner: None,
                children,
                sizes: branch.sizes.clone(),
            })
        }
    }
}

pub(crate) fn set_owned<T: Clone>(arc: &mut Arc<Node<T>>, index: usize, shift: u32, value: T, owner: &Owner) {
    let node = node::make_mut(arc, owner);
    match node {
        Node::Leaf(leaf) => leaf.values[index] = value,
        Node::Branch(branch) => {
            let loc = locate(branch, index, shift);
            set_owned(
                &mut branch.children[loc.slot],
                loc.residual,
                shift.saturating_sub(BITS),
                value,
                owner,
            );
        }
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;
