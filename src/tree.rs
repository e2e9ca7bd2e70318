mod node;
mod inorder;

pub use node::*;
pub use inorder::*;

use std::fmt;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::arena::{Arena, Ptr};

/// A single node of the tree, stored in the arena
///
/// Nodes link to each other by arena index, never by reference. The parent
/// link is a back-reference only: ownership always runs parent to child.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InnerNode<T> {
    value: T,
    parent: Option<Ptr>,
    left: Option<Ptr>,
    right: Option<Ptr>,
}

impl<T> InnerNode<T> {
    fn new(value: T, parent: Option<Ptr>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

/// An ordered container backed by a binary search tree (BST)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than or equal to `v`
///
/// Duplicate values are allowed. Inserting a value equal to one already in the
/// tree adds another element rather than replacing it, and the new element
/// always descends into the right subtree. A full in-order traversal therefore
/// yields equal elements in the order they were inserted.
///
/// The tree performs no rebalancing: its shape is determined entirely by the
/// order of insertion, and values that arrive pre-sorted degenerate into a
/// chain. All nodes live in a single arena, so clearing or dropping the tree
/// never recurses through the links, no matter how deep the chain gets.
#[derive(Clone)]
pub struct OrderedTree<T> {
    nodes: Arena<InnerNode<T>>,
    root: Option<Ptr>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
    where T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_inorder()).finish()
    }
}

impl<T: Ord + PartialEq> PartialEq for OrderedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        // Can't compare the trees structurally because the same elements
        // inserted in a different order produce a different shape. In-order
        // traversal is shape-independent: it yields the elements in ascending
        // order for any tree that satisfies the BST properties.
        self.iter_inorder().zip(other.iter_inorder()).all(|(v1, v2)| v1.eq(v2))
    }
}

impl<T: Ord + Eq> Eq for OrderedTree<T> {}

impl<T: Ord> OrderedTree<T> {
    /// Creates an empty `OrderedTree`
    ///
    /// The tree is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use ordtree::OrderedTree;
    /// let mut tree: OrderedTree<&str> = OrderedTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with the specified capacity.
    ///
    /// The tree will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the tree will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use ordtree::OrderedTree;
    /// let mut tree: OrderedTree<&str> = OrderedTree::with_capacity(10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree (i.e. the number of nodes in the binary search
    /// tree)
    ///
    /// Equal values count once per insertion.
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of elements the tree can hold without reallocating.
    ///
    /// This number is a lower bound; the tree might be able to hold more, but is guaranteed to be
    /// able to hold at least this many.
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use ordtree::OrderedTree;
    /// let mut tree: OrderedTree<&str> = OrderedTree::with_capacity(100);
    /// assert!(tree.capacity() >= 100);
    /// ```
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        // The root is vacant exactly when no nodes are stored
        debug_assert!(self.root.is_none() == self.nodes.is_empty());
        self.root.is_none()
    }

    /// Returns `true` if the tree contains the specified value.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// # assert!(!tree.contains(&1));
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Returns a handle to a node whose value is equal to the given value, or `None` if no such
    /// value exists in the tree
    ///
    /// If equal values were inserted more than once, the handle refers to whichever of their nodes
    /// the search path reaches first; no guarantee is made about which insertion that is. Use the
    /// handle's links to inspect the neighborhood of the match.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.find("abc").map(|node| node.value().as_str()), Some("abc"));
    /// assert!(tree.find("def").is_none());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<Node<'_, T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(ptr) = current {
            let node = &self.nodes[ptr];
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(Node::new(&self.nodes, ptr)),
            }
        }

        None
    }

    /// Inserts a value into the tree
    ///
    /// Duplicates are kept: if the tree already contains an equal value, another element is added
    /// and nothing is replaced. Each element inserted is one node in the tree.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// # assert!(tree.is_empty());
    /// tree.insert(37);
    /// assert!(!tree.is_empty());
    ///
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&37));
    /// ```
    pub fn insert(&mut self, value: T) {
        // The node the new value will hang off of, and which side it goes on
        let mut link = None;

        let mut current = self.root;
        while let Some(ptr) = current {
            let node = &self.nodes[ptr];
            let goes_left = value < node.value; // ties go right
            link = Some((ptr, goes_left));
            current = if goes_left { node.left } else { node.right };
        }

        let ptr = self.nodes.push(InnerNode::new(value, link.map(|(parent, _)| parent)));
        match link {
            Some((parent, true)) => self.nodes[parent].left = Some(ptr),
            Some((parent, false)) => self.nodes[parent].right = Some(ptr),
            None => self.root = Some(ptr),
        }
    }

    /// Clears the tree, removing all elements
    ///
    /// The nodes are released in a single pass over the arena that backs the tree. The links
    /// between them are never followed, so clearing a degenerate (chain-shaped) tree cannot
    /// overflow the call stack regardless of its depth. Clearing an empty tree is a no-op.
    ///
    /// Note that this method has no effect on the allocated capacity of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert("abc");
    /// # let capacity = tree.capacity();
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// # assert_eq!(tree.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Performs an in-order traversal of the tree: for every node, the left subtree is visited
    /// first, then the node itself, then the right subtree. For a binary search tree this yields
    /// the elements in ascending order, with equal elements in their insertion order.
    ///
    /// The returned iterator borrows the tree, so the tree cannot be modified while any iterator
    /// is still in use:
    ///
    /// ```compile_fail
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// let iter = tree.iter_inorder();
    /// tree.insert(2); // error[E0502]: cannot borrow `tree` as mutable
    /// assert!(iter.has_more());
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
    ///
    /// let values: Vec<i32> = tree.iter_inorder().copied().collect();
    /// assert_eq!(&values, &[1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(&self.nodes, self.root)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// The root is always the first value that was inserted. It only changes when the tree is
    /// cleared, since no rebalancing ever takes place.
    ///
    /// This is a low-level API meant to be used for implementing traversals. For elements in a
    /// guaranteed order, use [`iter_inorder`] instead.
    ///
    /// [`iter_inorder`]: Self::iter_inorder
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 2);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.value()), Some(3));
    /// assert!(root.parent().is_none());
    /// ```
    pub fn root(&self) -> Option<Node<'_, T>> {
        let ptr = self.root?;
        Some(Node::new(&self.nodes, ptr))
    }

    /// Reserves capacity for at least `additional` more elements to be inserted in the tree.
    ///
    /// The collection may reserve more space to avoid frequent reallocations. After calling
    /// reserve, capacity will be greater than or equal to `self.len() + additional`. Does nothing
    /// if capacity is already sufficient.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Shrinks the capacity of the tree as much as possible.
    ///
    /// It will drop down as close as possible to the length but may still be greater.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit()
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
