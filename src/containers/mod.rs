//! Swappable container types behind one contract
//!
//! Every structure here implements [`DataContainer`], so loaders and managers
//! can be written once and backed by whichever structure fits the access
//! pattern.
//!
//! ## Indexed Containers
//!
//! - **`DynamicArray<T>`** - contiguous buffer, doubling growth, O(1) get/set
//! - **`SinglyLinkedList<T>`** - head/tail tracked chain, O(1) front/rear insert
//!
//! ## Restricted Containers
//!
//! - **`ArrayStack<T>`** - LIFO over `DynamicArray`, only the top is visible
//! - **`LinkedQueue<T>`** - FIFO over `SinglyLinkedList`, only the front is visible
//! - **`BinaryHeapPQ<T>`** - comparator ordered binary heap, only the root is visible
//!
//! ## Natural Insertion and Removal Points
//!
//! | Structure | `add(value)` | `remove()` |
//! |-----------|--------------|------------|
//! | `DynamicArray` | end | last element |
//! | `SinglyLinkedList` | tail | head |
//! | `ArrayStack` | top | top |
//! | `LinkedQueue` | rear | front |
//! | `BinaryHeapPQ` | sifted into place | root |
//!
//! The array and the list disagree on `remove()`; callers depend on both.

mod array_stack;
mod binary_heap;
mod data_container;
mod dynamic_array;
mod kind;
pub mod linked_list;
mod linked_queue;

pub use array_stack::{ArrayStack, Stack};
pub use binary_heap::{BinaryHeapPQ, Comparator, Heap};
pub use data_container::DataContainer;
pub use dynamic_array::{DynamicArray, DEFAULT_CAPACITY};
pub use kind::{ensure_same_kind, ContainerKind};
pub use linked_list::SinglyLinkedList;
pub use linked_queue::{LinkedQueue, Queue};
