//! This crate exposes an AVL tree: a Binary Search Tree (BST) that keeps
//! itself balanced on every insert and remove.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are defined recursively
//! using the notion of a `Node`. A `Node` stores a key and may have
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the number of
//! `Node`s on the longest path from the root `Node` down to a leaf `Node`.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! Inserting keys in sorted order into a plain BST builds a linked list with
//! `height == N`. An AVL tree prevents that by caching the height of every
//! `Node` and requiring that, for every `Node`, the heights of its two
//! subtrees differ by at most one. Whenever an insert or remove breaks that
//! rule at some `Node` on the way back up to the root, one or two rotations
//! restore it. That keeps the height below roughly `1.44 * lg(N + 2)`, so
//! every operation is `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! // Inserting in ascending order still gives a balanced tree.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [20, 10, 30]);
//! assert!(tree.is_balanced());
//!
//! tree.remove(&20);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [10, 30]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod diagnostics;
mod node;
pub mod traversal;
mod tree;

pub use diagnostics::{BalanceReport, InvariantViolation, NodeBalance};
pub use traversal::{DepthFirst, LevelOrder, Order};
pub use tree::Tree;
