//! Structural integrity check: walks a trie verifying its size-table and
//! dense-node invariants and returns the first violation found, as a
//! diagnostic string. Exposed publicly as `Vector::check_integrity` /
//! `Builder::check_integrity`, not as a standalone public API of this
//! module.

use crate::node::{Node, B, BITS};

/// Recursively verify `node` (own shift `shift`), returning its element
/// count on success or a diagnostic naming the first invariant violated.
pub(crate) fn check_node<T>(node: &Node<T>, shift: u32) -> Result<usize, String> {
    match node {
        Node::Leaf(leaf) => {
            if shift != 0 {
                return Err(format!("leaf encountered at non-zero shift {shift}"));
            }
            if leaf.values.len() > B {
                return Err(format!("leaf holds {} values, exceeding B={B}", leaf.values.len()));
            }
            Ok(leaf.values.len())
        }
        Node::Branch(branch) => {
            if branch.children.is_empty() {
                return Err("branch has zero children".to_string());
            }
            if branch.children.len() > B {
                return Err(format!("branch holds {} children, exceeding B={B}", branch.children.len()));
            }
            let child_shift = shift.saturating_sub(BITS);
            let mut counts = Vec::with_capacity(branch.children.len());
            for child in &branch.children {
                counts.push(check_node(child, child_shift)?);
            }
            match &branch.sizes {
                Some(sizes) => {
                    if sizes.len() != branch.children.len() {
                        return Err(format!(
                            "size table length {} does not match child count {}",
                            sizes.len(),
                            branch.children.len()
                        ));
                    }
                    let mut acc = 0usize;
                    for (i, &c) in counts.iter().enumerate() {
                        acc += c;
                        if sizes[i] != acc {
                            return Err(format!("size table entry {i} is {}, expected cumulative count {acc}", sizes[i]));
                        }
                    }
                    Ok(acc)
                }
                None => {
                    let full = 1usize << shift;
                    for (i, &c) in counts.iter().enumerate() {
                        if i + 1 < counts.len() && c != full {
                            return Err(format!("dense branch child {i} holds {c} elements, expected exactly {full}"));
                        }
                        if branch.children[i].is_relaxed() {
                            return Err(format!("dense branch child {i} is itself relaxed under a dense parent"));
                        }
                    }
                    Ok(counts.iter().sum())
                }
            }
        }
    }
}

/// Verify a whole sequence's `(root, shift, tail_len, count)` quadruple.
/// `tail_max` is `B` for [`crate::Vector`]'s frozen tail leaf or a
/// builder's configured fat-tail capacity, since both share this check.
pub(crate) fn check_sequence<T>(
    root: Option<&Node<T>>,
    shift: u32,
    tail_len: usize,
    tail_max: usize,
    count: usize,
) -> Result<(), String> {
    let trie_count = match root {
        Some(r) => check_node(r, shift)?,
        None => {
            if shift != 0 {
                return Err("absent root must carry shift 0".to_string());
            }
            0
        }
    };
    if tail_len > tail_max {
        return Err(format!("tail holds {tail_len} values, exceeding its capacity {tail_max}"));
    }
    if trie_count + tail_len != count {
        return Err(format!(
            "count mismatch: trie has {trie_count} elements, tail has {tail_len}, recorded count is {count}"
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "integrity_test.rs"]
mod integrity_test;
