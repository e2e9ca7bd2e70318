use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

#[cfg(test)]
use std::mem;

#[cfg(test)]
use static_assertions::const_assert_eq;

/// The index of a value in an `Arena`
///
/// Stored as `index + 1` in a `NonZeroUsize` so that `Option<Ptr>` is
/// pointer-sized. Links make up most of a tree node, so they should cost no
/// more than a bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroUsize);

// `Option<Ptr>` is what nodes actually store, so the `None` case has to fit
// into the niche provided by `NonZeroUsize`.
#[cfg(test)]
const_assert_eq!(mem::size_of::<Ptr>(), mem::size_of::<usize>());
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<Ptr>>(), mem::size_of::<usize>());

impl Ptr {
    #[inline(always)]
    fn new(index: usize) -> Self {
        // usize::MAX is not representable: `index + 1` must be non-zero
        match NonZeroUsize::new(index.wrapping_add(1)) {
            Some(raw) => Ptr(raw),
            None => panic!("cannot have more than usize::MAX - 1 values in an arena"),
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

/// An append-only allocation primitive for tree nodes.
///
/// Values are kept contiguously in memory and are only ever released all at
/// once by `clear` (or by dropping the arena). Indexes returned from `push`
/// stay valid until the next `clear`, regardless of how much the arena grows
/// in between.
///
/// Because nothing is ever removed individually, releasing the values is a
/// single pass over the backing storage. The links between values are never
/// followed while dropping, so the call stack stays flat no matter how deeply
/// the values chain into each other.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    items: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {items: Vec::default()}
    }
}

impl<T> Arena<T> {
    /// Creates an empty arena
    ///
    /// The arena is initially created with a capacity of 0, so it will not
    /// allocate until it is first pushed into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with the specified capacity.
    ///
    /// The arena will be able to hold at least `capacity` values without
    /// reallocating. If `capacity` is 0, the arena will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {items: Vec::with_capacity(capacity)}
    }

    /// Returns the number of values in the arena
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of values the arena can hold without reallocating.
    ///
    /// This number is a lower bound; the arena might be able to hold more, but
    /// is guaranteed to be able to hold at least this many.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Pushes a value into the arena and returns its index.
    ///
    /// Indexes returned from this method remain usable until `clear` is
    /// called, even if the arena reallocates as it grows.
    pub fn push(&mut self, value: T) -> Ptr {
        let ptr = Ptr::new(self.items.len());
        self.items.push(value);
        ptr
    }

    /// Clears the arena, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the
    /// arena.
    ///
    /// This invalidates all previous indexes returned from `push`.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reserves capacity for at least `additional` more values to be pushed
    /// into the arena.
    ///
    /// The collection may reserve more space to avoid frequent reallocations.
    /// After calling reserve, capacity will be greater than or equal to
    /// `self.len() + additional`. Does nothing if capacity is already
    /// sufficient.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional)
    }

    /// Shrinks the capacity of the arena as much as possible.
    ///
    /// It will drop down as close as possible to the length but may still be
    /// greater.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit()
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, ptr: Ptr) -> &T {
        &self.items[ptr.index()]
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    #[inline(always)]
    fn index_mut(&mut self, ptr: Ptr) -> &mut T {
        &mut self.items[ptr.index()]
    }
}
