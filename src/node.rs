//! The owned node structure behind [`Tree`][crate::Tree] and the recursive
//! algorithms that keep it height-balanced.
//!
//! Every mutating function here takes a subtree root by value and hands back
//! the (possibly different) root of the same subtree. Callers reassign their
//! child link to whatever comes back, which is how a rotation deep in the
//! tree becomes visible to its parent without any parent pointers.

use std::cmp::Ordering;

use log::trace;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

/// The cached height of a subtree. An empty subtree has a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The balance factor of a subtree. An empty subtree has a balance factor of 0.
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_deref().map_or(0, Node::balance_factor)
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The difference in height between the left and right subtrees. Positive means the left
    /// side is taller.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    pub(crate) fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Equal => Some(&self.key),
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    pub(crate) fn first(&self) -> &K {
        match self.left.as_deref() {
            Some(left) => left.first(),
            None => &self.key,
        }
    }

    pub(crate) fn last(&self) -> &K {
        match self.right.as_deref() {
            Some(right) => right.last(),
            None => &self.key,
        }
    }
}

/// Inserts `key` into the subtree and returns the new, balanced, subtree root.
///
/// Keys equal to a node's key go to its right subtree so duplicates are kept.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let Some(mut node) = link else {
        return Node::new_boxed(key);
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    balance(node)
}

/// Removes one node holding `key` from the subtree. Returns the new subtree root along with the
/// key that was removed, or the untouched subtree and `None` if no node held `key`.
pub(crate) fn remove<K>(link: Link<K>, key: &K) -> (Link<K>, Option<K>)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, Some(node.key)),
            (left, None) => return (left, Some(node.key)),
            (left, Some(right)) => {
                // Two children. The in-order successor takes this node's place in the ordering,
                // so its key moves up here and its node leaves the right subtree.
                let (right, successor) = take_first(right);
                node.left = left;
                node.right = right;
                Some(std::mem::replace(&mut node.key, successor))
            }
        },
    };

    if removed.is_none() {
        // Nothing below us changed so there is nothing to rebalance.
        return (Some(node), None);
    }

    (Some(balance(node)), removed)
}

/// Detaches the leftmost node of the subtree. Returns the remaining, balanced, subtree and the
/// detached key.
fn take_first<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (left, first) = take_first(left);
            node.left = left;
            (Some(balance(node)), first)
        }
    }
}

/// Restores the AVL invariant at `node`, assuming both of its subtrees already satisfy it and
/// their heights differ by at most 2. Returns the new subtree root.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
pub(crate) fn balance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.fix_height();
    let fb = node.balance_factor();

    let node = if fb > 1 {
        if balance_factor(&node.left) >= 0 {
            trace!("left-left imbalance (bf={fb}), rotating right");
            rotate_right(node)
        } else {
            trace!("left-right imbalance (bf={fb}), rotating left then right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if fb < -1 {
        if balance_factor(&node.right) <= 0 {
            trace!("right-right imbalance (bf={fb}), rotating left");
            rotate_left(node)
        } else {
            trace!("right-left imbalance (bf={fb}), rotating right then left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    };

    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }

    node
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      old_root            new_root
///      /     \             /     \
///  new_root   z  rotate -> x   old_root
///   /   \                       /   \
///  x     y                     y     z
/// ```
fn rotate_right<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    // `old_root` sits below `new_root` now so its height has to be settled first.
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Rotate `old_root` to the left. The mirror image of [`rotate_right`].
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}
