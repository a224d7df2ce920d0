#![no_std]
//! Minimal-footprint intrusive collections.
//!
//! The centerpiece is [`SList`](linked_list::intrusive::list::SList), a
//! circular singly linked list that stores a single pointer to its last
//! element and borrows the link field from the elements themselves.

extern crate alloc;

pub mod linked_list;
pub mod pool;
pub mod sync;

#[cfg(feature = "align-trap")]
pub mod align;

pub use slist_collection_derive::Node;
