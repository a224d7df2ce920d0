//! Caller-side locking for sharing lists between threads.
//!
//! [`SList`] is plain, unsynchronized memory. To share one, wrap it in a lock
//! the way these aliases do; every operation then runs under the guard.

use crate::{
    linked_list::intrusive::{list::SList, traits::Link},
    pool::NodePool,
};

/// A list guarded by a spin lock.
pub type SpinList<T> = spin::Mutex<SList<T>>;

/// A node pool guarded by a spin lock.
pub type SpinPool<T> = spin::Mutex<NodePool<T>>;

/// Creates an empty [`SpinList`]. Usable in `static` initializers.
pub const fn spin_list<T: Link<Target = T>>() -> SpinList<T> {
    spin::Mutex::new(SList::new())
}
