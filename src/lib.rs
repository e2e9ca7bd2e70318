//! An ordered container with an external, resumable in-order iterator.
//!
//! [`OrderedTree`] stores values in a binary search tree (duplicates allowed,
//! no rebalancing) and [`IterInorder`] yields them in ascending order. The
//! iterator keeps its whole traversal state in an explicit stack instead of
//! the call stack, so it can be handed around, paused, and resumed one
//! element at a time.

pub mod tree;

mod arena;

pub use tree::{EmptyIteration, IterInorder, Node, OrderedTree};

#[macro_export(local_inner_macros)]
macro_rules! ordtree {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(ordtree!(@single $rest)),*]));

    ($($value:expr,)+) => { ordtree!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = ordtree!(@count $($value),*);
            let mut _tree = $crate::OrderedTree::with_capacity(_cap);
            $(
                _tree.insert($value);
            )*
            _tree
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordtree_macro() {
        let tree = ordtree! {
            3,
            1,
            2, // trailing comma
        };

        let values: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&values, &[1, 2, 3]);

        // Duplicates are all kept
        let tree = ordtree![2, 2, 2];

        let values: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&values, &[2, 2, 2]);

        // No trailing comma
        let tree = ordtree![99];

        let values: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&values, &[99]);

        // Zero items
        let tree = ordtree!();

        let values: Vec<i32> = tree.iter_inorder().copied().collect();
        assert_eq!(&values, &[]);
    }

    #[test]
    fn ordtree_macro_capacity() {
        // The macro pre-allocates one slot per listed value
        let tree = ordtree![5, 3, 8, 1];
        assert!(tree.capacity() >= 4);
        assert_eq!(tree.len(), 4);
    }
}
