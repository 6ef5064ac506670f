//! Read-only walks over a [`Tree`][crate::Tree].
//!
//! None of these recurse. Depth-first walks keep their pending work on an explicit stack and the
//! level-order walk keeps a FIFO queue, so a walk only borrows the tree and never touches heights
//! or structure.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Where a node's own key lands relative to its subtrees in a depth-first walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    In,
    /// Left subtree, right subtree, node.
    Post,
}

/// Pending work on the depth-first stack.
enum Visit<'a, K> {
    /// Expand this subtree into its parts.
    Subtree(&'a Node<K>),
    /// Yield this key.
    Key(&'a K),
}

/// A depth-first iterator over the keys of a tree. Created by
/// [`Tree::pre_order`][crate::Tree::pre_order], [`Tree::in_order`][crate::Tree::in_order] and
/// [`Tree::post_order`][crate::Tree::post_order].
pub struct DepthFirst<'a, K> {
    order: Order,
    stack: Vec<Visit<'a, K>>,
}

impl<'a, K> DepthFirst<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Visit::Subtree).into_iter().collect(),
        }
    }

    /// Which order this walk visits keys in.
    pub fn order(&self) -> Order {
        self.order
    }

    fn push_subtree(&mut self, node: Option<&'a Node<K>>) {
        if let Some(node) = node {
            self.stack.push(Visit::Subtree(node));
        }
    }
}

impl<'a, K> Iterator for DepthFirst<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = match self.stack.pop()? {
                Visit::Key(key) => return Some(key),
                Visit::Subtree(node) => node,
            };

            // Pushed in reverse since the stack pops the last entry first.
            let left = node.left.as_deref();
            let right = node.right.as_deref();
            match self.order {
                Order::Pre => {
                    self.push_subtree(right);
                    self.push_subtree(left);
                    return Some(&node.key);
                }
                Order::In => {
                    self.push_subtree(right);
                    self.stack.push(Visit::Key(&node.key));
                    self.push_subtree(left);
                }
                Order::Post => {
                    self.stack.push(Visit::Key(&node.key));
                    self.push_subtree(right);
                    self.push_subtree(left);
                }
            }
        }
    }
}

impl<K> FusedIterator for DepthFirst<'_, K> {}

/// A breadth-first iterator over the keys of a tree. Created by
/// [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}
