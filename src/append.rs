//! Append and append-leaf-to-trie: growing a trie on its right spine,
//! amortized via the caller's tail buffer.
//!
//! `append_leaf` is deliberately generalized to accept a leaf of *any*
//! length (not only a full `B`-element leaf): the amortized push path
//! always calls it with a full leaf, but [`crate::concat`] reuses the same
//! routine to fold a partial tail into a trie before running the
//! concatenation proper.

use std::sync::Arc;

use crate::node::{self, Branch, Node, Owner, B, BITS};

/// Install `leaf_values` as the new rightmost leaf of the trie rooted at
/// `root`/`shift`, growing height if the right spine is full.
pub(crate) fn append_leaf<T: Clone>(
    root: Option<Arc<Node<T>>>,
    shift: u32,
    leaf_values: Vec<T>,
) -> (Arc<Node<T>>, u32) {
    if leaf_values.is_empty() {
        return match root {
            Some(root) => (root, shift),
            None => (Arc::new(Node::leaf(Vec::new())), 0),
        };
    }

    let root = match root {
        None => return (Arc::new(Node::leaf(leaf_values)), 0),
        Some(root) => root,
    };

    if shift == 0 {
        let base = root.as_leaf();
        if base.values.len() + leaf_values.len() <= B {
            let mut merged = base.values.clone();
            merged.extend(leaf_values);
            return (Arc::new(Node::leaf(merged)), 0);
        }
        let children = vec![root, Arc::new(Node::leaf(leaf_values))];
        return (Arc::new(node::build_branch(children, BITS)), BITS);
    }

    match push_down(root.as_ref(), shift, &leaf_values) {
        Some(new_root) => (Arc::new(new_root), shift),
        None => {
            let path = new_path(shift, Arc::new(Node::leaf(leaf_values)));
            let children = vec![root, path];
            let new_shift = shift + BITS;
            (Arc::new(node::build_branch(children, new_shift)), new_shift)
        }
    }
}

/// Fold a (possibly partial, possibly empty) tail leaf into a trie, used by
/// concat to bring the left operand's tail into its trie before the two
/// tries are concatenated.
pub(crate) fn fold_tail<T: Clone>(
    root: Option<Arc<Node<T>>>,
    shift: u32,
    tail_values: Vec<T>,
) -> (Option<Arc<Node<T>>>, u32) {
    if tail_values.is_empty() {
        return (root, shift);
    }
    let (new_root, new_shift) = append_leaf(root, shift, tail_values);
    (Some(new_root), new_shift)
}

/// Right-spine push-down. Returns `Some` with the updated subtree on
/// success, `None` when every slot on the spine is full and the caller
/// must grow height instead.
pub(crate) fn push_down<T: Clone>(node: &Node<T>, shift: u32, leaf_values: &[T]) -> Option<Node<T>> {
    let branch = node.as_branch();
    let last = branch.children.len() - 1;

    if shift == BITS {
        let last_leaf = branch.children[last].as_leaf();
        if last_leaf.values.len() + leaf_values.len() <= B {
            let mut merged = last_leaf.values.clone();
            merged.extend_from_slice(leaf_values);
            let mut children = branch.children.clone();
            children[last] = Arc::new(Node::leaf(merged));
            Some(node::build_branch(children, shift))
        } else if branch.children.len() < B {
            let mut children = branch.children.clone();
            children.push(Arc::new(Node::leaf(leaf_values.to_vec())));
            Some(node::build_branch(children, shift))
        } else {
            None
        }
    } else {
        match push_down(branch.children[last].as_ref(), shift - BITS, leaf_values) {
            Some(new_last) => {
                let mut children = branch.children.clone();
                children[last] = Arc::new(new_last);
                Some(node::build_branch(children, shift))
            }
            None => {
                if branch.children.len() < B {
                    let mut children = branch.children.clone();
                    let path = new_path(shift - BITS, Arc::new(Node::leaf(leaf_values.to_vec())));
                    children.push(path);
                    Some(node::build_branch(children, shift))
                } else {
                    None
                }
            }
        }
    }
}

/// Wrap `leaf` in nested single-child branches until it sits at `shift`.
pub(crate) fn new_path<T>(shift: u32, leaf: Arc<Node<T>>) -> Arc<Node<T>> {
    if shift == 0 {
        leaf
    } else {
        let inner = new_path(shift - BITS, leaf);
        Arc::new(Node::Branch(Branch {
            owner: None,
            children: vec![inner],
            sizes: None,
        }))
    }
}

/// Owner-tagged counterpart of [`append_leaf`] used by [`crate::Builder`]:
/// mutates the right spine in place wherever the owner token allows it.
pub(crate) fn append_leaf_owned<T: Clone>(
    root: &mut Option<Arc<Node<T>>>,
    shift: &mut u32,
    leaf_values: Vec<T>,
    owner: &Owner,
) {
    if leaf_values.is_empty() {
        return;
    }

    let current = match root.take() {
        None => {
            *root = Some(new_owned_leaf(leaf_values, owner));
            *shift = 0;
            return;
        }
        Some(r) => r,
    };

    if *shift == 0 {
        let merged_inline = {
            let base = current.as_leaf();
            if base.values.len() + leaf_values.len() <= B {
                let mut merged = base.values.clone();
                merged.extend(leaf_values.clone());
                Some(merged)
            } else {
                None
            }
        };
        if let Some(merged) = merged_inline {
            *root = Some(new_owned_leaf(merged, owner));
            *shift = 0;
            return;
        }
        let children = vec![current, new_owned_leaf(leaf_values, owner)];
        let mut branch = node::build_branch(children, BITS);
        branch.set_owner(owner.clone());
        *root = Some(Arc::new(branch));
        *shift = BITS;
        return;
    }

    let mut arc = current;
    if push_down_owned(&mut arc, *shift, &leaf_values, owner) {
        *root = Some(arc);
    } else {
        let path = new_path_owned(*shift, leaf_values, owner);
        let children = vec![arc, path];
        let new_shift = *shift + BITS;
        let mut branch = node::build_branch(children, new_shift);
        branch.set_owner(owner.clone());
        *root = Some(Arc::new(branch));
        *shift = new_shift;
    }
}

fn push_down_owned<T: Clone>(arc: &mut Arc<Node<T>>, shift: u32, leaf_values: &[T], owner: &Owner) -> bool {
    let node = node::make_mut(arc, owner);
    let branch = node.as_branch_mut();
    let last = branch.children.len() - 1;

    if shift == BITS {
        let fits = {
            let last_leaf = branch.children[last].as_leaf();
            last_leaf.values.len() + leaf_values.len() <= B
        };
        if fits {
            let mut merged = branch.children[last].as_leaf().values.clone();
            merged.extend_from_slice(leaf_values);
            branch.children[last] = new_owned_leaf(merged, owner);
            resync_sizes(branch, shift);
            true
        } else if branch.children.len() < B {
            branch.children.push(new_owned_leaf(leaf_values.to_vec(), owner));
            resync_sizes(branch, shift);
            true
        } else {
            false
        }
    } else if push_down_owned(&mut branch.children[last], shift - BITS, leaf_values, owner) {
        resync_sizes(branch, shift);
        true
    } else if branch.children.len() < B {
        branch
            .children
            .push(new_path_owned(shift - BITS, leaf_values.to_vec(), owner));
        resync_sizes(branch, shift);
        true
    } else {
        false
    }
}

fn new_owned_leaf<T>(values: Vec<T>, owner: &Owner) -> Arc<Node<T>> {
    Arc::new(Node::Leaf(crate::node::Leaf::owned(values, owner.clone())))
}

fn new_path_owned<T>(shift: u32, leaf_values: Vec<T>, owner: &Owner) -> Arc<Node<T>> {
    let leaf = new_owned_leaf(leaf_values, owner);
    build_owned_path(shift, leaf, owner)
}

fn build_owned_path<T>(shift: u32, leaf: Arc<Node<T>>, owner: &Owner) -> Arc<Node<T>> {
    if shift == 0 {
        leaf
    } else {
        let inner = build_owned_path(shift - BITS, leaf, owner);
        Arc::new(Node::Branch(Branch {
            owner: Some(owner.clone()),
            children: vec![inner],
            sizes: None,
        }))
    }
}

fn resync_sizes<T>(branch: &mut Branch<T>, shift: u32) {
    let children = std::mem::take(&mut branch.children);
    let rebuilt = node::build_branch(children, shift);
    if let Node::Branch(b) = rebuilt {
        branch.children = b.children;
        branch.sizes = b.sizes;
    }
}

#[cfg(test)]
#[path = "append_test.rs"]
mod append_test;
