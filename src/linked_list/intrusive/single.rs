use core::ptr::NonNull;

use slist_collection_derive::Node;

/// A ready-made list element carrying a payload.
#[derive(Debug, Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: SingleLink::new(),
            data,
        }
    }

    /// Consumes the node and returns its payload.
    pub fn into_data(self) -> T {
        debug_assert!(!self.link.is_linked(), "node is still linked");
        self.data
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// The link field embedded in a list element.
///
/// It points at the *containing element*, type-erased, never at another
/// link field.
#[derive(Debug, Default)]
pub struct SingleLink {
    next: Option<NonNull<()>>,
}

impl SingleLink {
    /// An unlinked link.
    pub const fn new() -> Self {
        Self { next: None }
    }

    #[inline]
    pub fn get(&self) -> Option<NonNull<()>> {
        self.next
    }

    #[inline]
    pub fn set(&mut self, next: Option<NonNull<()>>) {
        self.next = next;
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
