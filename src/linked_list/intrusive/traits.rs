use core::ptr::NonNull;

/// A trait for an element that carries its own "next" link.
///
/// `None` is the unlinked state. An element usable in an
/// [`SList`](super::list::SList) implements `Link<Target = Self>`.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);

    /// Whether the element currently belongs to a list.
    #[inline]
    fn is_linked(&self) -> bool {
        self.next().is_some()
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
