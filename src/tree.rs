//! A self-balancing Binary Search Tree (specifically, an AVL tree) of keys.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Removing a key reports whether it was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use log::debug;

use crate::diagnostics::{self, BalanceReport, InvariantViolation};
use crate::node::{self, Link};
use crate::traversal::{DepthFirst, LevelOrder, Order};

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting, finding, and removing keys, and for walking them in several orders.
///
/// Equal keys are allowed. Each insert stores a new node; an equal key is routed into the right
/// subtree of the node it ties with.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a tree with a single
    /// key has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(|n| n.first())
    }

    /// The largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().map(|n| n.last())
    }

    /// Visits each node before its left subtree and then its right subtree.
    pub fn pre_order(&self) -> DepthFirst<'_, K> {
        DepthFirst::new(self.root.as_deref(), Order::Pre)
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the keys in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> DepthFirst<'_, K> {
        DepthFirst::new(self.root.as_deref(), Order::In)
    }

    /// Visits both subtrees, left then right, before the node itself.
    pub fn post_order(&self) -> DepthFirst<'_, K> {
        DepthFirst::new(self.root.as_deref(), Order::Post)
    }

    /// Visits the tree one level at a time, from the root down and left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Returns `true` if every node's subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balance_report().is_balanced()
    }

    /// Walks the whole tree and reports the height and balance factor of every node, in
    /// pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    /// let report = tree.balance_report();
    ///
    /// assert!(report.is_balanced());
    /// assert_eq!(report.nodes()[0].to_string(), "node 20: h=2, bf=0");
    /// ```
    pub fn balance_report(&self) -> BalanceReport<'_, K> {
        BalanceReport::new(self.root.as_deref())
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts the given key into the tree. Inserting a key equal to one already present stores
    /// another copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = Some(node::insert(self.root.take(), key));
        self.len += 1;
    }

    /// Returns `true` if the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Potentially finds the stored key equal to `key`. If no node has the corresponding key,
    /// `None` is returned.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.root.as_deref().and_then(|n| n.find(key))
    }

    /// Removes a key equal to `key` from the tree and returns `true`. If the tree does not contain
    /// such a key, nothing happens and `false` is returned.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key equal to `key` from the tree and returns it. If the tree does not contain
    /// such a key, nothing happens.
    ///
    /// When several equal keys are stored, the one removed is whichever the search reaches first.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&70), Some(70));
    /// assert_eq!(tree.take(&70), None);
    /// ```
    pub fn take(&mut self, key: &K) -> Option<K> {
        let (root, removed) = node::remove(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        } else {
            debug!("key not present, tree left unchanged ({} keys)", self.len);
        }
        removed
    }

    /// Checks every structural invariant of the tree: cached heights, balance factors and key
    /// ordering. Returns the first violation found.
    pub fn validate(&self) -> Result<(), InvariantViolation<K>>
    where
        K: Clone,
    {
        diagnostics::validate(self.root.as_deref())
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = DepthFirst<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
