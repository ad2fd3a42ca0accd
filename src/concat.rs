//! Concatenation and rebalancing: meet two tries at matching heights,
//! concatenate their center children, and run the search-and-redistribute
//! plan over the candidate pool at each meeting level.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::node::{build_branch, Node, B, BITS, EXTRAS, INVARIANT};

/// Concatenate two bare (tail-free) tries, each given by its own root and
/// shift. Either side may be `None` (an empty trie); `left`'s tail must
/// already be folded into `left_root`/`left_shift` by the caller —
/// [`crate::vector::Vector::concat`] is what folds the left tail in before
/// calling this.
pub(crate) fn concat_roots<T: Clone>(
    left_root: Option<Arc<Node<T>>>,
    left_shift: u32,
    right_root: Option<Arc<Node<T>>>,
    right_shift: u32,
) -> (Option<Arc<Node<T>>>, u32) {
    match (left_root, right_root) {
        (None, None) => (None, 0),
        (Some(l), None) => (Some(l), left_shift),
        (None, Some(r)) => (Some(r), right_shift),
        (Some(l), Some(r)) => {
            let (node, shift) = concat_shifted(l.as_ref(), left_shift, r.as_ref(), right_shift);
            (Some(Arc::new(node)), shift)
        }
    }
}

fn concat_shifted<T: Clone>(left: &Node<T>, left_shift: u32, right: &Node<T>, right_shift: u32) -> (Node<T>, u32) {
    if left_shift == 0 && right_shift == 0 {
        return concat_leaves(left, right);
    }
    match left_shift.cmp(&right_shift) {
        Ordering::Greater => {
            let lb = left.as_branch();
            let last = lb.children.len() - 1;
            let (middle, middle_shift) =
                concat_shifted(lb.children[last].as_ref(), left_shift - BITS, right, right_shift);
            rebalance(Some(&lb.children[..last]), &middle, middle_shift, None, left_shift)
        }
        Ordering::Less => {
            let rb = right.as_branch();
            let (middle, middle_shift) =
                concat_shifted(left, left_shift, rb.children[0].as_ref(), right_shift - BITS);
            rebalance(None, &middle, middle_shift, Some(&rb.children[1..]), right_shift)
        }
        Ordering::Equal => {
            let lb = left.as_branch();
            let rb = right.as_branch();
            let last = lb.children.len() - 1;
            let (middle, middle_shift) = concat_shifted(
                lb.children[last].as_ref(),
                left_shift - BITS,
                rb.children[0].as_ref(),
                right_shift - BITS,
            );
            rebalance(
                Some(&lb.children[..last]),
                &middle,
                middle_shift,
                Some(&rb.children[1..]),
                left_shift,
            )
        }
    }
}

fn concat_leaves<T: Clone>(left: &Node<T>, right: &Node<T>) -> (Node<T>, u32) {
    let l = left.as_leaf();
    let r = right.as_leaf();
    if l.values.len() + r.values.len() <= B {
        let mut merged = l.values.clone();
        merged.extend_from_slice(&r.values);
        (Node::leaf(merged), 0)
    } else {
        let children = vec![
            Arc::new(Node::leaf(l.values.clone())),
            Arc::new(Node::leaf(r.values.clone())),
        ];
        (build_branch(children, BITS), BITS)
    }
}

/// Collect the candidate child list at `level_shift`, run the
/// redistribution plan, execute it, and assemble the result (one branch,
/// or two wrapped in a fresh parent if the plan overflowed `B` slots).
fn rebalance<T: Clone>(
    left_rest: Option<&[Arc<Node<T>>]>,
    center: &Node<T>,
    center_shift: u32,
    right_rest: Option<&[Arc<Node<T>>]>,
    level_shift: u32,
) -> (Node<T>, u32) {
    let mut candidates: Vec<Arc<Node<T>>> = left_rest.map(<[_]>::to_vec).unwrap_or_default();
    if center_shift == level_shift {
        candidates.extend(center.as_branch().children.iter().cloned());
    } else {
        candidates.push(Arc::new(center.clone()));
    }
    if let Some(rest) = right_rest {
        candidates.extend(rest.iter().cloned());
    }

    let child_shift = level_shift - BITS;
    let plan = build_plan(&candidates);
    let results = execute_plan(candidates, child_shift, &plan);

    if results.len() <= B {
        (build_branch(results, level_shift), level_shift)
    } else {
        let (left_chunk, right_chunk) = results.split_at(B);
        let left_branch = Arc::new(build_branch(left_chunk.to_vec(), level_shift));
        let right_branch = Arc::new(build_branch(right_chunk.to_vec(), level_shift));
        (build_branch(vec![left_branch, right_branch], level_shift + BITS), level_shift + BITS)
    }
}

/// Search-and-redistribute plan construction: greedily slide *slots*
/// (direct children of each candidate — values for a leaf candidate,
/// children for a branch candidate) leftward to eliminate underfilled
/// candidates, producing a densely packed target slot count for each
/// output node within a small slack.
///
/// `plan[i]` is a count of slots, not of elements: at any level above the
/// leaves a candidate's element count is `~32^height`, already far past
/// `B`, so only the slot count (`0..=B`) matches the "underfilled"/"grow
/// up to B" language this plan is built from.
fn build_plan<T>(candidates: &[Arc<Node<T>>]) -> Vec<usize> {
    let mut plan: Vec<usize> = candidates.iter().map(|c| c.slot_len()).collect();
    let total: usize = plan.iter().sum();
    let optimal = (total + B - 1) / B;

    while optimal + EXTRAS < plan.len() {
        let mut i = 0usize;
        while i < plan.len() && plan[i] > B - INVARIANT {
            i += 1;
        }
        if i >= plan.len() {
            // no further underfilled slot to redistribute from.
            break;
        }
        loop {
            if i + 1 >= plan.len() {
                break;
            }
            let combined = plan[i] + plan[i + 1];
            if combined <= B {
                plan[i] = combined;
                plan.remove(i + 1);
                break;
            } else {
                plan[i] = B;
                let overflow = combined - B;
                i += 1;
                plan[i] = overflow;
            }
        }
    }
    plan
}

/// Plan execution: walk `candidates` with a cursor, producing one new
/// node per plan entry. Candidates are consumed through
/// a deque so that a partially-used node can be pushed back as a fresh
/// "remainder" without any separate offset bookkeeping.
fn execute_plan<T: Clone>(candidates: Vec<Arc<Node<T>>>, child_shift: u32, plan: &[usize]) -> Vec<Arc<Node<T>>> {
    let mut queue: VecDeque<Arc<Node<T>>> = candidates.into();
    let mut results = Vec::with_capacity(plan.len());
    for &target in plan {
        results.push(take_one(&mut queue, child_shift, target));
    }
    debug_assert!(queue.is_empty(), "rebalance plan left unconsumed source nodes");
    results
}

/// Produce one output node of exactly `target` slots from the front of
/// `queue` — `target` values for a leaf-level queue (`shift == 0`),
/// `target` direct children for a branch-level queue. When the front node
/// already has exactly `target` slots and nothing has been taken from it
/// yet, it is reused by `Arc` clone rather than copied, preserving
/// structural sharing on already-balanced inputs.
fn take_one<T: Clone>(queue: &mut VecDeque<Arc<Node<T>>>, shift: u32, target: usize) -> Arc<Node<T>> {
    let front_slots = queue.front().expect("rebalance plan starved of source nodes").slot_len();
    if front_slots == target {
        return queue.pop_front().unwrap();
    }

    if shift == 0 {
        let mut values = Vec::with_capacity(target);
        while values.len() < target {
            let front = queue.pop_front().expect("rebalance plan starved of leaf values");
            let leaf = front.as_leaf();
            let need = target - values.len();
            if leaf.values.len() <= need {
                values.extend_from_slice(&leaf.values);
            } else {
                values.extend_from_slice(&leaf.values[..need]);
                queue.push_front(Arc::new(Node::leaf(leaf.values[need..].to_vec())));
            }
        }
        Arc::new(Node::leaf(values))
    } else {
        // Branch level: `target` counts whole grandchildren, moved as-is
        // between candidates — no element-level slicing is needed one
        // level down from the meeting point, only regrouping of already
        // fully-formed child pointers.
        let mut children: Vec<Arc<Node<T>>> = Vec::with_capacity(target);
        while children.len() < target {
            let front = queue.pop_front().expect("rebalance plan starved of branch nodes");
            let front_branch = front.as_branch();
            let need = target - children.len();
            if front_branch.children.len() <= need {
                children.extend(front_branch.children.iter().cloned());
            } else {
                children.extend(front_branch.children[..need].iter().cloned());
                let remainder = front_branch.children[need..].to_vec();
                queue.push_front(Arc::new(build_branch(remainder, shift)));
            }
        }
        Arc::new(build_branch(children, shift))
    }
}

#[cfg(test)]
#[path = "concat_test.rs"]
mod concat_test;
