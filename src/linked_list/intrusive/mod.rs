//! # Intrusive Singly Linked List
//!
//! This module provides a circular, tail-pointer-only intrusive list.
//!
//! ## Core Components
//!
//! - [`traits`]: the element contract, `Link` and `NodeWithData`.
//! - [`single::SingleLink`]: the link field to embed in an element.
//! - [`single::SingleNode`]: a ready-made element carrying a `data` payload.
//! - [`list::SList`]: the list handle, one pointer wide.
//! - [`position::Position`]: predecessor-based positions for `insert`/`erase`.
//!
//! ## Layout
//!
//! The handle only remembers the last element. The last element links back to
//! the first one, so both ends are reachable in O(1):
//!
//! ```text
//!            last
//!             │
//!   ┌───┐   ┌─▼─┐
//!   │ A ├──►│ B ├──┐
//!   └─▲─┘   └───┘  │
//!     └────────────┘
//! ```
//!
//! ## Safety
//!
//! The list never allocates, frees, moves or drops elements. The user of this
//! module is responsible for upholding several invariants:
//!
//! - Elements must outlive their membership in the list.
//! - An element must not be in two lists at the same time.
//! - An element's link must not be touched while it is linked.
//! - Positions are only meaningful for the list that produced them, and only
//!   while the element they store as predecessor stays linked.

pub mod traits;
pub mod single;
pub mod list;
pub mod position;
pub mod iter;
pub mod verify;

#[cfg(test)]
mod tests;
