use core::ptr::NonNull;

use hashbrown::HashSet;

use super::{list::SList, traits::Link};

impl<T> SList<T>
where
    T: Link<Target = T>,
{
    /// Walks the whole ring and panics if the list is inconsistent.
    ///
    /// Checks that every element is linked and that the walk from `last` comes
    /// back to `last` without revisiting any other element. A self-loop
    /// anywhere but on a sole element shows up as a revisit. Returns the number
    /// of elements.
    ///
    /// Enabled after every mutation with the `strict_assertions` feature.
    pub fn assert_invariants(&self) -> usize {
        let Some(last) = self.last_ptr() else {
            return 0;
        };

        let mut visited: HashSet<NonNull<T>> = HashSet::new();
        let mut current = last;
        loop {
            let next = unsafe { current.as_ref().next() };
            let next = next.unwrap_or_else(|| panic!("element {current:p} in the ring is unlinked"));
            assert!(
                visited.insert(next),
                "element {next:p} is reachable twice before reaching the last element"
            );
            if next == last {
                break;
            }
            current = next;
        }
        visited.len()
    }
}
