//! # soas-containers: Swappable Containers Behind One Contract
//!
//! This crate provides five data structures that share a single object-safe
//! container trait, so code that loads, stores and queries records can be
//! written once and backed by whichever structure suits the workload.
//!
//! ## Key Features
//!
//! - **Indexed Containers**: `DynamicArray` with doubling growth, `SinglyLinkedList` with O(1) rear insertion
//! - **Restricted Containers**: `ArrayStack` (LIFO), `LinkedQueue` (FIFO) and `BinaryHeapPQ` (comparator ordered)
//! - **Runtime Selection**: `ContainerKind` and `ContainerConfig` build `Box<dyn DataContainer<T>>` values
//! - **Typed Errors**: every refused operation reports a `ContainerError`, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use soas_containers::{
//!     BinaryHeapPQ, ContainerKind, DataContainer, DynamicArray, Heap, SinglyLinkedList,
//! };
//!
//! // Indexed access with automatic growth
//! let mut arena = DynamicArray::new();
//! arena.add("court");
//! arena.add_at(0, "lobby").unwrap();
//! assert_eq!(arena.get(1).unwrap(), &"court");
//!
//! // The list appends at the rear and removes from the front
//! let mut roster: SinglyLinkedList<u32> = (1..=3).collect();
//! assert_eq!(roster.remove().unwrap(), 1);
//!
//! // Smallest first by natural ordering, swappable comparator
//! let mut scores = BinaryHeapPQ::new();
//! Heap::insert(&mut scores, 98);
//! Heap::insert(&mut scores, 71);
//! assert_eq!(Heap::peek(&scores).unwrap(), &71);
//! scores.reorder(|a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(Heap::peek(&scores).unwrap(), &98);
//!
//! // Structure picked at runtime
//! let mut backlog: Box<dyn DataContainer<u32>> = ContainerKind::ArrayStack.create().unwrap();
//! backlog.add(7).unwrap();
//! assert!(!backlog.supports_indexed_access());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use config::{Config, ContainerConfig};
pub use containers::{
    ensure_same_kind, ArrayStack, BinaryHeapPQ, Comparator, ContainerKind, DataContainer,
    DynamicArray, Heap, LinkedQueue, Queue, SinglyLinkedList, Stack,
};
pub use error::{ContainerError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version at debug level; installs no logger
pub fn init() {
    log::debug!("Initializing soas-containers v{}", VERSION);
}
