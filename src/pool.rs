//! Fixed-capacity storage for list elements.
//!
//! [`NodePool`] allocates all of its nodes once, up front, and keeps the idle
//! ones on an [`SList`] threaded through the nodes themselves. Nodes handed
//! out by [`NodePool::acquire`] are unlinked and can go straight into any
//! other list.

use alloc::{boxed::Box, vec::Vec};
use core::{fmt, ptr::NonNull};

use crate::linked_list::intrusive::{list::SList, single::SingleNode, traits::Link};

/// A fixed pool of [`SingleNode`]s that never grows.
pub struct NodePool<T> {
    base: NonNull<SingleNode<T>>,
    capacity: usize,
    available: usize,
    free: SList<SingleNode<T>>,
}

impl<T: Default> NodePool<T> {
    /// Creates a pool of `capacity` nodes holding `T::default()`.
    pub fn new(capacity: usize) -> Self {
        Self::with_init(capacity, |_| T::default())
    }
}

impl<T> NodePool<T> {
    /// Creates a pool of `capacity` nodes, the `i`-th one holding `init(i)`.
    pub fn with_init<F>(capacity: usize, mut init: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let slots: Box<[SingleNode<T>]> = (0..capacity)
            .map(|i| SingleNode::new(init(i)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let base = NonNull::from(Box::leak(slots)).cast::<SingleNode<T>>();

        let mut free = SList::new();
        for i in 0..capacity {
            // The slots are freshly built, unlinked, and live until `drop`.
            unsafe { free.push_back(base.add(i)) };
        }

        Self {
            base,
            capacity,
            available: capacity,
            free,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes that can still be acquired.
    pub fn available(&self) -> usize {
        self.available
    }

    /// Whether `node` points into this pool's storage.
    pub fn owns(&self, node: NonNull<SingleNode<T>>) -> bool {
        let start = self.base.as_ptr() as usize;
        let end = start + self.capacity * size_of::<SingleNode<T>>();
        let addr = node.as_ptr() as usize;
        (start..end).contains(&addr) && (addr - start) % size_of::<SingleNode<T>>() == 0
    }

    /// Takes an idle node out of the pool, or `None` if all are in use.
    ///
    /// The node is unlinked and stays valid as long as the pool is alive.
    pub fn acquire(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let node = self.free.pop_front()?;
        self.available -= 1;
        Some(node)
    }

    /// Returns a node to the pool.
    ///
    /// # Safety
    ///
    /// `node` must have been acquired from this pool, must not have been
    /// released since, and must not be linked into any list.
    pub unsafe fn release(&mut self, node: NonNull<SingleNode<T>>) {
        debug_assert!(self.owns(node), "node does not belong to this pool");
        debug_assert!(self.available < self.capacity, "pool released more nodes than it holds");
        unsafe {
            debug_assert!(!node.as_ref().is_linked(), "released node is still linked");
            self.free.push_front(node);
        }
        self.available += 1;
    }
}

impl<T> Drop for NodePool<T> {
    fn drop(&mut self) {
        self.free.clear();
        let slots = NonNull::slice_from_raw_parts(self.base, self.capacity);
        // `base` came from `Box::leak` of a slice of exactly `capacity` nodes.
        drop(unsafe { Box::from_raw(slots.as_ptr()) });
    }
}

impl<T> fmt::Debug for NodePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePool")
            .field("capacity", &self.capacity)
            .field("available", &self.available)
            .finish()
    }
}

unsafe impl<T: Send> Send for NodePool<T> {}
unsafe impl<T: Sync> Sync for NodePool<T> {}
