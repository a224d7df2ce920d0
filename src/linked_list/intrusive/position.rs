use core::{fmt, ptr::NonNull};

/// A position in an [`SList`](super::list::SList).
///
/// Links only go forward, so a position is kept as the element *before* the
/// one it denotes. The front has no stable predecessor (it is whatever
/// `last` is at the time of use), and one-past-the-end has none at all, so
/// both get their own tag instead of sharing a null predecessor.
pub struct Position<T> {
    kind: Kind<T>,
}

enum Kind<T> {
    /// The first element; the predecessor is the list's `last`.
    Front,
    /// The element at `prev.next`. `prev` is never the list's `last`.
    After(NonNull<T>),
    /// One past the last element.
    End,
}

impl<T> Position<T> {
    pub(crate) const fn front() -> Self {
        Self { kind: Kind::Front }
    }

    pub(crate) const fn after(prev: NonNull<T>) -> Self {
        Self {
            kind: Kind::After(prev),
        }
    }

    pub(crate) const fn end() -> Self {
        Self { kind: Kind::End }
    }

    /// Resolves the predecessor of the denoted element, given the list's
    /// current `last`. `None` means end of sequence.
    #[inline]
    pub(crate) fn predecessor(&self, last: Option<NonNull<T>>) -> Option<NonNull<T>> {
        match self.kind {
            Kind::Front => last,
            Kind::After(prev) => Some(prev),
            Kind::End => None,
        }
    }

    /// The predecessor held by the position itself, if any. `Front` reads
    /// its predecessor from the list instead.
    #[inline]
    pub(crate) fn stored_predecessor(&self) -> Option<NonNull<T>> {
        match self.kind {
            Kind::After(prev) => Some(prev),
            Kind::Front | Kind::End => None,
        }
    }

    /// Whether this position denotes the first element.
    pub fn is_front(&self) -> bool {
        matches!(self.kind, Kind::Front)
    }

    /// Whether this is the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        matches!(self.kind, Kind::End)
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Clone for Kind<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Kind<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (Kind::Front, Kind::Front) | (Kind::End, Kind::End) => true,
            (Kind::After(a), Kind::After(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Front => f.write_str("Front"),
            Kind::After(prev) => f.debug_tuple("After").field(&prev).finish(),
            Kind::End => f.write_str("End"),
        }
    }
}
