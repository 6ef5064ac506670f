//! Whole-tree checks used to verify a [`Tree`][crate::Tree]. Insertion and removal never call
//! into this module; they keep the tree balanced one node at a time.

use std::fmt;

use thiserror::Error;

use crate::node::Node;

/// The height and balance factor of one node, as seen by [`BalanceReport`].
#[derive(Debug, PartialEq, Eq)]
pub struct NodeBalance<'a, K> {
    /// The node's key.
    pub key: &'a K,
    /// The node's cached height.
    pub height: usize,
    /// Height of the left subtree minus height of the right subtree.
    pub balance_factor: isize,
}

impl<K> NodeBalance<'_, K> {
    /// Returns `true` if the node's subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balance_factor.abs() <= 1
    }
}

impl<K> fmt::Display for NodeBalance<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {}: h={}, bf={}",
            self.key, self.height, self.balance_factor
        )?;
        if !self.is_balanced() {
            f.write_str(" (unbalanced)")?;
        }
        Ok(())
    }
}

/// Balance information for every node of a tree, in pre-order. Created by
/// [`Tree::balance_report`][crate::Tree::balance_report].
#[derive(Debug)]
pub struct BalanceReport<'a, K> {
    nodes: Vec<NodeBalance<'a, K>>,
}

impl<'a, K> BalanceReport<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<K>> = root.into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(NodeBalance {
                key: &node.key,
                height: node.height,
                balance_factor: node.balance_factor(),
            });
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        Self { nodes }
    }

    /// Returns `true` if every node in the tree is balanced. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.nodes.iter().all(NodeBalance::is_balanced)
    }

    /// Every node's balance information, in pre-order.
    pub fn nodes(&self) -> &[NodeBalance<'a, K>] {
        &self.nodes
    }

    /// Just the nodes that are out of balance.
    pub fn unbalanced(&self) -> impl Iterator<Item = &NodeBalance<'a, K>> {
        self.nodes.iter().filter(|n| !n.is_balanced())
    }
}

impl<K> fmt::Display for BalanceReport<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        if self.is_balanced() {
            write!(f, "balanced")
        } else {
            write!(f, "unbalanced")
        }
    }
}

/// A broken structural invariant found by [`Tree::validate`][crate::Tree::validate].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation<K> {
    /// A node's subtrees differ in height by more than one.
    #[error("node {key:?} is unbalanced: balance factor {balance_factor}")]
    Unbalanced {
        /// The unbalanced node's key.
        key: K,
        /// Height of its left subtree minus height of its right subtree.
        balance_factor: isize,
    },
    /// A node's cached height disagrees with the heights of its children.
    #[error("node {key:?} caches height {cached} but its subtree is {actual} high")]
    StaleHeight {
        /// The node's key.
        key: K,
        /// The height stored in the node.
        cached: usize,
        /// The height computed from its children.
        actual: usize,
    },
    /// A key sits on the wrong side of one of its ancestors.
    #[error("key {key:?} is out of order under node {ancestor:?}")]
    OutOfOrder {
        /// The misplaced key.
        key: K,
        /// The ancestor it should have been ordered against.
        ancestor: K,
    },
}

/// Checks heights, balance factors and ordering for the subtree under `root`.
pub(crate) fn validate<K>(root: Option<&Node<K>>) -> Result<(), InvariantViolation<K>>
where
    K: Ord + Clone,
{
    root.map_or(Ok(()), |n| check(n, None, None).map(|_| ()))
}

/// Recursively checks `node` whose keys must all lie within `[lower, upper]`. Equal keys may end
/// up on either side of each other after rotations, so both bounds are inclusive.
///
/// Returns the recomputed height of the subtree.
fn check<K>(
    node: &Node<K>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<usize, InvariantViolation<K>>
where
    K: Ord + Clone,
{
    let out_of_order = |ancestor: &K| InvariantViolation::OutOfOrder {
        key: node.key.clone(),
        ancestor: ancestor.clone(),
    };
    if let Some(lower) = lower.filter(|lower| node.key < **lower) {
        return Err(out_of_order(lower));
    }
    if let Some(upper) = upper.filter(|upper| node.key > **upper) {
        return Err(out_of_order(upper));
    }

    let left = match node.left.as_deref() {
        Some(left) => check(left, lower, Some(&node.key))?,
        None => 0,
    };
    let right = match node.right.as_deref() {
        Some(right) => check(right, Some(&node.key), upper)?,
        None => 0,
    };

    let actual = left.max(right) + 1;
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            key: node.key.clone(),
            cached: node.height,
            actual,
        });
    }

    let balance_factor = left as isize - right as isize;
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            key: node.key.clone(),
            balance_factor,
        });
    }

    Ok(actual)
}
