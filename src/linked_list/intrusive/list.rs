use core::{fmt, ptr::NonNull};

use super::{
    iter::{Drain, SListIter},
    position::Position,
    traits::Link,
};

/// A circular, intrusive singly linked list.
///
/// The handle is a single pointer to the last element; the last element links
/// back to the first. The list never allocates and never drops elements:
/// it only rewrites their links and its own tail pointer.
pub struct SList<T: Link<Target = T>> {
    last: Option<NonNull<T>>,
}

#[inline]
fn next_of<T: Link<Target = T>>(node: NonNull<T>) -> NonNull<T> {
    // `None` here means the ring was broken from the outside.
    unsafe { node.as_ref().next() }.expect("linked node has no successor")
}

#[inline]
fn set_next_of<T: Link<Target = T>>(node: NonNull<T>, next: Option<NonNull<T>>) {
    unsafe { (*node.as_ptr()).set_next(next) };
}

impl<T> SList<T>
where
    T: Link<Target = T>,
{
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SList { last: None }
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Counts the elements by walking the ring. O(N).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn last_ptr(&self) -> Option<NonNull<T>> {
        self.last
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn front(&self) -> NonNull<T> {
        self.peek_front().expect("front() called on an empty list")
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn back(&self) -> NonNull<T> {
        self.last.expect("back() called on an empty list")
    }

    pub fn peek_front(&self) -> Option<NonNull<T>> {
        self.last.map(next_of)
    }

    pub fn peek_back(&self) -> Option<NonNull<T>> {
        self.last
    }

    /// Links `node` in as the new first element.
    ///
    /// # Safety
    ///
    /// `node` must point to a live element that is not linked into any list
    /// and that stays alive, unmoved, until it is unlinked again.
    pub unsafe fn push_front(&mut self, node: NonNull<T>) {
        unsafe {
            debug_assert!(!node.as_ref().is_linked(), "node is already linked");
        }

        match self.last {
            Some(last) => {
                set_next_of(node, Some(next_of(last)));
                set_next_of(last, Some(node));
            }
            None => {
                set_next_of(node, Some(node));
                self.last = Some(node);
            }
        }
        self.check();
    }

    /// Links `node` in as the new last element.
    ///
    /// # Safety
    ///
    /// Same contract as [`push_front`](Self::push_front).
    pub unsafe fn push_back(&mut self, node: NonNull<T>) {
        unsafe { self.push_front(node) };
        self.last = Some(node);
        self.check();
    }

    /// Unlinks and returns the first element, or `None` if the list is empty.
    ///
    /// The returned element's link is reset to the unlinked state.
    pub fn pop_front(&mut self) -> Option<NonNull<T>> {
        let last = self.last?;
        let first = next_of(last);

        if first == last {
            self.last = None;
        } else {
            set_next_of(last, Some(next_of(first)));
        }

        set_next_of(first, None);
        self.check();
        Some(first)
    }

    /// Unlinks every element, leaving each of them unlinked. O(N).
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Moves every element of `other` to the back of `self` in O(1).
    pub fn append(&mut self, other: &mut Self) {
        let Some(other_last) = other.last.take() else {
            return;
        };

        if let Some(last) = self.last {
            let first = next_of(last);
            set_next_of(last, Some(next_of(other_last)));
            set_next_of(other_last, Some(first));
        }
        self.last = Some(other_last);
        self.check();
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> SListIter<'_, T> {
        SListIter::new(self)
    }

    /// Returns an iterator that unlinks elements from the front as it goes.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Whether `node` is an element of this list. O(N).
    pub fn contains(&self, node: NonNull<T>) -> bool {
        self.iter().any(|current| current == node)
    }

    /// The position of the first element. Equal to [`end`](Self::end) when the
    /// list is empty.
    pub fn begin(&self) -> Position<T> {
        if self.last.is_some() {
            Position::front()
        } else {
            Position::end()
        }
    }

    /// The one-past-the-last position.
    pub fn end(&self) -> Position<T> {
        Position::end()
    }

    /// The position following `pos`. Advancing the end position stays at the
    /// end.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position of this list: produced by it, and its
    /// stored predecessor still linked into it.
    pub unsafe fn advance(&self, pos: Position<T>) -> Position<T> {
        match unsafe { self.resolve(pos) } {
            None => Position::end(),
            Some(prev) => {
                let next = next_of(prev);
                if Some(next) == self.last {
                    Position::end()
                } else {
                    Position::after(next)
                }
            }
        }
    }

    /// The element denoted by `pos`.
    ///
    /// # Safety
    ///
    /// Same contract as [`advance`](Self::advance).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    pub unsafe fn get(&self, pos: Position<T>) -> NonNull<T> {
        let prev = unsafe { self.resolve(pos) }.expect("dereferenced the end position");
        next_of(prev)
    }

    /// Finds the position of `node`. O(N).
    pub fn position_of(&self, node: NonNull<T>) -> Option<Position<T>> {
        let mut pos = self.begin();
        while !pos.is_end() {
            // Every position here comes from walking the current ring.
            unsafe {
                if self.get(pos) == node {
                    return Some(pos);
                }
                pos = self.advance(pos);
            }
        }
        None
    }

    /// Unlinks `node` if it is an element of this list. O(N) search, O(1)
    /// unlink.
    pub fn remove(&mut self, node: NonNull<T>) -> Option<NonNull<T>> {
        let pos = self.position_of(node)?;
        // The position was just produced by this list.
        unsafe { self.erase(pos) };
        Some(node)
    }

    /// Links `node` in at `pos` and returns the position of `node`.
    ///
    /// Inserting at the front makes `node` the new first element; inserting
    /// at the end makes it the new last element.
    ///
    /// # Safety
    ///
    /// Same contract as [`push_front`](Self::push_front), and `pos` must be a
    /// valid position of this list.
    pub unsafe fn insert(&mut self, pos: Position<T>, node: NonNull<T>) -> Position<T> {
        unsafe {
            debug_assert!(!node.as_ref().is_linked(), "node is already linked");
        }

        match (unsafe { self.resolve(pos) }, self.last) {
            (Some(prev), _) => {
                set_next_of(node, Some(next_of(prev)));
                set_next_of(prev, Some(node));
                self.check();
                self.position_after(prev)
            }
            (None, Some(last)) => {
                unsafe { self.push_back(node) };
                Position::after(last)
            }
            (None, None) => {
                unsafe { self.push_back(node) };
                Position::front()
            }
        }
    }

    /// Unlinks the element at `pos` and returns the position of the element
    /// that followed it. Erasing the end position does nothing.
    ///
    /// The removed element's link is reset to the unlinked state.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position of this list.
    pub unsafe fn erase(&mut self, pos: Position<T>) -> Position<T> {
        let Some(prev) = (unsafe { self.resolve(pos) }) else {
            return Position::end();
        };

        let node = next_of(prev);
        let next = next_of(node);
        if next == node {
            self.pop_front();
            return Position::end();
        }

        set_next_of(prev, Some(next));
        set_next_of(node, None);
        if self.last == Some(node) {
            self.last = Some(prev);
            self.check();
            Position::end()
        } else {
            self.check();
            self.position_after(prev)
        }
    }

    /// The predecessor of the element at `pos`, or `None` at the end.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position of this list.
    unsafe fn resolve(&self, pos: Position<T>) -> Option<NonNull<T>> {
        if let Some(prev) = pos.stored_predecessor() {
            unsafe {
                debug_assert!(prev.as_ref().is_linked(), "position refers to an unlinked element");
            }
            #[cfg(feature = "strict_assertions")]
            assert!(self.contains(prev), "position belongs to another list");
        }
        pos.predecessor(self.last)
    }

    fn position_after(&self, prev: NonNull<T>) -> Position<T> {
        if Some(prev) == self.last {
            Position::front()
        } else {
            Position::after(prev)
        }
    }

    #[inline]
    fn check(&self) {
        #[cfg(feature = "strict_assertions")]
        self.assert_invariants();
    }
}

impl<T> Default for SList<T>
where
    T: Link<Target = T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SList<T>
where
    T: Link<Target = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SList<T>
where
    T: Link<Target = T>,
{
    type Item = NonNull<T>;
    type IntoIter = SListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Link<Target = T> + Send> Send for SList<T> {}
unsafe impl<T: Link<Target = T> + Sync> Sync for SList<T> {}
