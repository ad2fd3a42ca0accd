use std::sync::Arc;

use crate::append::append_leaf;
use crate::node::{Branch, B};

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

#[test]
fn valid_trie_passes() {
    let (root, shift) = trie_of(500);
    assert_eq!(check_node(&root, shift), Ok(500));
}

#[test]
fn valid_sequence_passes() {
    let (root, shift) = trie_of(100);
    assert!(check_sequence(Some(&root), shift, 3, B, 103).is_ok());
}

#[test]
fn rejects_count_mismatch() {
    let (root, shift) = trie_of(100);
    let err = check_sequence(Some(&root), shift, 3, B, 999).unwrap_err();
    assert!(err.contains("count mismatch"));
}

#[test]
fn rejects_tail_over_capacity() {
    let err = check_sequence::<i32>(None, 0, 5, 3, 5).unwrap_err();
    assert!(err.contains("exceeding its capacity"));
}

#[test]
fn rejects_oversized_leaf() {
    let mut values = vec![0i32; B];
    values.push(1);
    let leaf = Node::leaf(values);
    assert!(check_node(&leaf, 0).is_err());
}

#[test]
fn rejects_dense_branch_with_short_non_last_child() {
    // Hand-construct a dense branch that violates the invariant, to
    // confirm the checker catches what `build_branch` would otherwise have
    // avoided by turning relaxed.
    let children: Vec<Arc<Node<i32>>> = vec![
        Arc::new(Node::leaf(vec![0; B - 1])),
        Arc::new(Node::leaf(vec![0; B])),
    ];
    let forged = Node::Branch(Branch { owner: None, children, sizes: None });
    assert!(check_node(&forged, BITS).is_err());
}

#[test]
fn rejects_size_table_length_mismatch() {
    let children: Vec<Arc<Node<i32>>> = vec![Arc::new(Node::leaf(vec![1, 2])), Arc::new(Node::leaf(vec![3]))];
    let forged = Node::Branch(Branch { owner: None, children, sizes: Some(vec![2]) });
    let err = check_node(&forged, BITS).unwrap_err();
    assert!(err.contains("size table length"));
}
