use std::ptr;
use std::iter::FusedIterator;

use thiserror::Error;

use crate::arena::{Arena, Ptr};

use super::InnerNode;

/// The error returned when [`advance`] is called on an iterator that has
/// already yielded every element
///
/// This is a protocol violation by the caller, not a data condition: check
/// [`has_more`] before advancing.
///
/// [`advance`]: IterInorder::advance
/// [`has_more`]: IterInorder::has_more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("advanced past the last element of the tree")]
pub struct EmptyIteration;

/// An external in-order traversal of an [`OrderedTree`]
///
/// All of the traversal state lives in the iterator itself (a cursor plus an
/// explicit stack of deferred nodes), so it can be advanced one element at a
/// time, at any pace, without recursion. Elements are yielded in ascending
/// order, equal elements in their insertion order.
///
/// The traversal is one-shot: once every element has been yielded the
/// iterator stays exhausted. Clone the iterator to keep a resumption point.
///
/// # Examples
///
/// Driving the traversal by hand:
///
/// ```
/// use ordtree::OrderedTree;
///
/// let tree: OrderedTree<i32> = [5, 3, 8].iter().copied().collect();
///
/// let mut iter = tree.iter_inorder();
/// let mut values = Vec::new();
/// while iter.has_more() {
///     values.push(*iter.advance()?);
/// }
/// assert_eq!(&values, &[3, 5, 8]);
/// # Ok::<(), ordtree::EmptyIteration>(())
/// ```
///
/// Or as a regular `Iterator`:
///
/// ```
/// use ordtree::OrderedTree;
///
/// let tree: OrderedTree<i32> = [5, 3, 8].iter().copied().collect();
/// assert!(tree.iter_inorder().copied().eq([3, 5, 8]));
/// ```
///
/// [`OrderedTree`]: crate::OrderedTree
pub struct IterInorder<'a, T> {
    nodes: &'a Arena<InnerNode<T>>,
    /// The node the next call to `next`/`advance` will yield. Its left subtree
    /// has already been fully yielded. Vacant exactly when the traversal is
    /// exhausted.
    current: Option<Ptr>,
    /// Nodes whose visit (and right subtree) is still owed, deepest last
    pending: Vec<Ptr>,
}

impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(nodes: &'a Arena<InnerNode<T>>, root: Option<Ptr>) -> Self {
        let mut iter = Self {
            nodes,
            current: None,
            pending: Vec::new(),
        };

        // The first element is the leftmost node, at the bottom of the spine
        iter.push_left_spine(root);
        iter.current = iter.pending.pop();

        iter
    }

    /// Pushes `from` and the chain of left children below it onto the pending
    /// stack, leaving the smallest value of that subtree on top
    fn push_left_spine(&mut self, from: Option<Ptr>) {
        let mut current = from;
        while let Some(ptr) = current {
            self.pending.push(ptr);
            current = self.nodes[ptr].left;
        }
    }

    /// Returns true if at least one element has not been yielded yet
    ///
    /// This is a pure query: the position of the iterator never changes, no
    /// matter how often it is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(!tree.iter_inorder().has_more());
    ///
    /// tree.insert(1);
    /// let mut iter = tree.iter_inorder();
    /// assert!(iter.has_more());
    ///
    /// iter.advance().unwrap();
    /// assert!(!iter.has_more());
    /// ```
    pub fn has_more(&self) -> bool {
        self.current.is_some() || !self.pending.is_empty()
    }

    /// Yields the next element in ascending order, or fails with
    /// [`EmptyIteration`] if every element has already been yielded
    ///
    /// This is the checked form of [`Iterator::next`] for callers driving the
    /// traversal by hand: check [`has_more`], then `advance`. Advancing past
    /// the end is always reported, never silently ignored.
    ///
    /// [`has_more`]: Self::has_more
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{EmptyIteration, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iter = tree.iter_inorder();
    /// assert_eq!(iter.advance(), Ok(&1));
    /// assert_eq!(iter.advance(), Ok(&2));
    /// assert_eq!(iter.advance(), Err(EmptyIteration));
    /// ```
    pub fn advance(&mut self) -> Result<&'a T, EmptyIteration> {
        self.next().ok_or(EmptyIteration)
    }

    /// Returns the element the iterator is positioned on, i.e. the one the
    /// next call to [`advance`] would yield, without moving the iterator.
    /// Returns `None` if the iterator is exhausted.
    ///
    /// [`advance`]: Self::advance
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iter = tree.iter_inorder();
    /// assert_eq!(iter.peek(), Some(&1));
    /// // peek did not consume the element
    /// assert_eq!(iter.advance(), Ok(&1));
    /// assert_eq!(iter.peek(), Some(&2));
    /// ```
    pub fn peek(&self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.current.map(move |ptr| &nodes[ptr].value)
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = match self.current.take() {
            Some(ptr) => ptr,
            // The cursor is only ever vacant once the stack has drained too,
            // but popping keeps `next` and `has_more` in agreement
            None => self.pending.pop()?,
        };

        let node = &self.nodes[ptr];
        self.push_left_spine(node.right);
        self.current = self.pending.pop();

        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}

impl<'a, T> Clone for IterInorder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            pending: self.pending.clone(),
        }
    }
}

impl<'a, T> PartialEq for IterInorder<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        // All exhausted iterators are equal, no matter which tree they came
        // from. This is what makes an exhausted iterator usable as an "end"
        // marker to compare against.
        if !self.has_more() && !other.has_more() {
            return true;
        }

        // Otherwise equal means the same remaining traversal: same tree, same
        // cursor, same deferred nodes
        ptr::eq(self.nodes, other.nodes)
            && self.current == other.current
            && self.pending == other.pending
    }
}

impl<'a, T> Eq for IterInorder<'a, T> {}
