use std::sync::Arc;

use crate::append::append_leaf;
use crate::node::{count_of, B};

use super::*;

fn trie_of(n: i32) -> (Arc<Node<i32>>, u32) {
    let mut root: Option<Arc<Node<i32>>> = None;
    let mut shift = 0u32;
    let mut i = 0;
    while i < n {
        let take = std::cmp::min(B as i32, n - i);
        let leaf: Vec<i32> = (i..i + take).collect();
        let (r, s) = append_leaf(root, shift, leaf);
        root = Some(r);
        shift = s;
        i += take;
    }
    (root.unwrap(), shift)
}

fn flatten<T: Clone>(node: &Node<T>) -> Vec<T> {
    match node {
        Node::Leaf(leaf) => leaf.values.clone(),
        Node::Branch(branch) => branch.children.iter().flat_map(|c| flatten(c)).collect(),
    }
}

#[test]
fn split_reassembles_to_original() {
    let (root, shift) = trie_of(500);
    for i in [0usize, 1, 31, 32, 33, 250, 499, 500] {
        let (left, right) = split(&root, shift, i);
        let mut combined = left.as_ref().map(flatten).unwrap_or_default();
        combined.extend(right.as_ref().map(flatten).unwrap_or_default());
        assert_eq!(combined, (0..500).collect::<Vec<_>>(), "split at {i}");
    }
}

#[test]
fn split_at_zero_yields_no_left() {
    let (root, shift) = trie_of(64);
    let (left, right) = split(&root, shift, 0);
    assert!(left.is_none());
    assert_eq!(count_of(right.as_ref().unwrap(), shift), 64);
}

#[test]
fn split_at_end_yields_no_right() {
    let (root, shift) = trie_of(64);
    let total = count_of(&root, shift);
    let (left, right) = split(&root, shift, total);
    assert!(right.is_none());
    assert_eq!(count_of(left.as_ref().unwrap(), shift), 64);
}
