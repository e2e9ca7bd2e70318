use std::ptr;
use std::fmt;

use crate::arena::{Arena, Ptr};

use super::{InnerNode, IterInorder};

/// A single node of the binary search tree
///
/// A node handle borrows the tree it came from and exposes the link structure
/// (parent and children) for callers that want to walk the tree themselves.
/// For elements in a guaranteed order, use [`OrderedTree::iter_inorder`]
/// instead.
///
/// Two handles compare equal when they refer to the same node of the same
/// tree. Value equality is not enough here: duplicates are allowed, so
/// distinct nodes can hold equal values.
///
/// [`OrderedTree::iter_inorder`]: crate::OrderedTree::iter_inorder
pub struct Node<'a, T> {
    nodes: &'a Arena<InnerNode<T>>,
    ptr: Ptr,
}

impl<'a, T: fmt::Debug> fmt::Debug for Node<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The parent link is left out: following it would render this node
        // all over again
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> PartialEq for Node<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        // Same node of the same tree (similar to `Arc::ptr_eq`)
        ptr::eq(self.nodes, other.nodes) && self.ptr == other.ptr
    }
}

impl<'a, T> Eq for Node<'a, T> {}

impl<'a, T> Node<'a, T> {
    pub(super) fn new(nodes: &'a Arena<InnerNode<T>>, ptr: Ptr) -> Self {
        Self {nodes, ptr}
    }

    fn inner(&self) -> &'a InnerNode<T> {
        &self.nodes[self.ptr]
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.inner().value
    }

    /// Returns the parent of this node, or `None` if this node is the root of
    /// its tree
    pub fn parent(&self) -> Option<Self> {
        self.inner().parent.map(|ptr| Self::new(self.nodes, ptr))
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.inner().left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.inner().right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        self.inner().left.map(|ptr| Self::new(self.nodes, ptr))
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        self.inner().right.map(|ptr| Self::new(self.nodes, ptr))
    }

    /// Performs an in-order traversal of the subtree rooted at this node
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
    ///
    /// // Iterate over just the subtree holding the values greater than the root
    /// let subtree = tree.root().unwrap().right().unwrap();
    /// let values: Vec<i32> = subtree.iter_inorder().copied().collect();
    /// assert_eq!(&values, &[7, 8, 9]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<'a, T> {
        IterInorder::new(self.nodes, Some(self.ptr))
    }
}
