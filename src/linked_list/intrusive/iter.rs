use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::SList, traits::Link};

/// An iterator over the elements of an [`SList`], front to back.
pub struct SListIter<'a, T: Link<Target = T>> {
    current: Option<NonNull<T>>,
    last: Option<NonNull<T>>,
    _list: PhantomData<&'a SList<T>>,
}

impl<'a, T> SListIter<'a, T>
where
    T: Link<Target = T>,
{
    pub(crate) fn new(list: &'a SList<T>) -> Self {
        let last = list.last_ptr();
        Self {
            current: last.and_then(|last| unsafe { last.as_ref().next() }),
            last,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for SListIter<'a, T>
where
    T: Link<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = if Some(*current) == self.last {
                None
            } else {
                unsafe { current.as_ref().next() }
            };
        })
    }
}

impl<'a, T> FusedIterator for SListIter<'a, T> where T: Link<Target = T> {}

/// Unlinks elements from the front of the list as it is iterated.
///
/// Elements not yet yielded when the iterator is dropped are unlinked as well.
pub struct Drain<'a, T: Link<Target = T>> {
    list: &'a mut SList<T>,
}

impl<'a, T> Drain<'a, T>
where
    T: Link<Target = T>,
{
    pub(crate) fn new(list: &'a mut SList<T>) -> Self {
        Self { list }
    }
}

impl<'a, T> Iterator for Drain<'a, T>
where
    T: Link<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<'a, T> Drop for Drain<'a, T>
where
    T: Link<Target = T>,
{
    fn drop(&mut self) {
        self.list.clear();
    }
}
