//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the link is stored directly in the element
//! being linked. This means the element must have a field that is a
//! `SingleLink`. This is in contrast to a non-intrusive linked list, where the
//! list allocates a node around every value.
//!
//! # Examples
//!
//! ```
//! use slist_collections::linked_list::intrusive::{
//!     list::SList,
//!     single::SingleNode,
//!     traits::{Link, NodeWithData},
//! };
//! use core::ptr::NonNull;
//!
//! let mut list = SList::<SingleNode<i32>>::new();
//! let mut node1 = SingleNode::new(1);
//! let mut node2 = SingleNode::new(2);
//! let mut node3 = SingleNode::new(3);
//!
//! unsafe {
//!     list.push_back(NonNull::from(&mut node1));
//!     list.push_back(NonNull::from(&mut node2));
//!     list.push_front(NonNull::from(&mut node3));
//! }
//!
//! assert_eq!(list.len(), 3);
//!
//! let values: Vec<i32> = list
//!     .iter()
//!     .map(|node| unsafe { *node.as_ref().data() })
//!     .collect();
//! assert_eq!(values, vec![3, 1, 2]);
//!
//! list.clear();
//! assert!(!node1.is_linked());
//! ```
pub mod intrusive;
