//! BinaryHeapPQ: priority queue over a [`DynamicArray`] laid out as a
//! complete binary tree
//!
//! The node at index `i` has children at `2i + 1` and `2i + 2`. Ordering comes
//! from an injected comparator: `comparator(a, b) == Less` means `a` has the
//! higher priority and belongs closer to the root. After every mutation the
//! heap-order invariant holds: no child outranks its parent.
//!
//! Only the root is a meaningful position, so through [`DataContainer`] the
//! heap exposes index `0` and nothing else. `find_by` tests the root only and
//! `set` is always rejected.

use super::{ContainerKind, DataContainer, DynamicArray};
use crate::error::{check_bounds, ContainerError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::slice;

const NAME: &str = "BinaryHeapPQ";

/// Priority function used to order heap elements
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// The narrow priority-queue contract
pub trait Heap<T> {
    /// Add an item at the position the heap order dictates
    fn insert(&mut self, item: T);

    /// Highest-priority item without removing it
    fn peek(&self) -> Result<&T>;

    /// Remove and return the highest-priority item
    fn extract(&mut self) -> Result<T>;
}

/// Binary heap priority queue with a replaceable comparator
///
/// Insert and extract are O(log n). Replacing the comparator with
/// [`reorder`](Self::reorder) rebuilds the heap bottom-up in O(n), as does a
/// bulk load through [`build_heap_from`](Self::build_heap_from).
///
/// # Examples
///
/// ```rust
/// use soas_containers::BinaryHeapPQ;
///
/// let mut requests = BinaryHeapPQ::new();
/// for seat in [5, 3, 8, 1] {
///     requests.insert(seat);
/// }
/// assert_eq!(requests.peek()?, &1);
///
/// requests.reorder(|a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(requests.extract()?, 8);
/// assert_eq!(requests.extract()?, 5);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
pub struct BinaryHeapPQ<T> {
    items: DynamicArray<T>,
    comparator: Comparator<T>,
}

impl<T: Ord + 'static> BinaryHeapPQ<T> {
    /// Create an empty heap ordered by `T`'s natural ordering (smallest first)
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord + 'static> Default for BinaryHeapPQ<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryHeapPQ<T> {
    /// Create an empty heap ordered by `comparator`
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            items: DynamicArray::new(),
            comparator: Box::new(comparator),
        }
    }

    /// Create an empty heap with a specific initial capacity
    pub fn with_capacity_and_comparator<F>(capacity: usize, comparator: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Ok(Self {
            items: DynamicArray::with_capacity(capacity)?,
            comparator: Box::new(comparator),
        })
    }

    /// Take ownership of `array` and heapify it in O(n)
    pub fn from_array<F>(array: DynamicArray<T>, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let mut heap = Self {
            items: array,
            comparator: Box::new(comparator),
        };
        heap.build_heap();
        heap
    }

    /// Number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `item`, then sift it up to its place
    pub fn insert(&mut self, item: T) {
        self.items.add(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Root element
    pub fn peek(&self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(ContainerError::empty("peek an empty priority queue"));
        }
        self.items.get(0)
    }

    /// Remove the root: swap it with the last slot, drop it off the end,
    /// then sift the new root down
    pub fn extract(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ContainerError::empty("extract from an empty priority queue"));
        }
        let last = self.items.len() - 1;
        self.items.as_mut_slice().swap(0, last);
        let removed = self.items.remove()?;
        self.sift_down(0);
        Ok(removed)
    }

    /// Replace the comparator and rebuild the heap under the new ordering
    pub fn reorder<F>(&mut self, comparator: F)
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.comparator = Box::new(comparator);
        log::debug!("reordering priority queue of {} elements", self.items.len());
        self.build_heap();
    }

    /// Restore heap order over the current contents in O(n)
    ///
    /// Runs sift-down from the last non-leaf node back to the root.
    pub fn build_heap(&mut self) {
        let len = self.items.len();
        if len < 2 {
            return;
        }
        for index in (0..=(len - 2) / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Bulk-load every element of `source`, then rebuild once
    ///
    /// Elements already in the heap are kept; `source` is drained.
    pub fn build_heap_from(&mut self, mut source: DynamicArray<T>) {
        log::debug!(
            "bulk loading {} elements into priority queue of {}",
            source.len(),
            self.items.len()
        );
        self.items.append(&mut source);
        self.build_heap();
    }

    /// Check the heap-order invariant over the whole backing array
    pub fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|child| self.compare((child - 1) / 2, child) != Ordering::Greater)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Backing storage in array order
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Iterate in backing-array order, not priority order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Extract everything, highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.extract() {
            sorted.push(item);
        }
        sorted
    }

    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        let slots = self.items.as_slice();
        (self.comparator)(&slots[a], &slots[b])
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.compare(parent, child) != Ordering::Greater {
                break;
            }
            self.items.as_mut_slice().swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // left wins only when strictly ahead of right
            let best = if right >= len || self.compare(left, right) == Ordering::Less {
                left
            } else {
                right
            };
            if self.compare(parent, best) != Ordering::Greater {
                break;
            }
            self.items.as_mut_slice().swap(parent, best);
            parent = best;
        }
    }
}

impl<T> Heap<T> for BinaryHeapPQ<T> {
    fn insert(&mut self, item: T) {
        BinaryHeapPQ::insert(self, item)
    }

    fn peek(&self) -> Result<&T> {
        BinaryHeapPQ::peek(self)
    }

    fn extract(&mut self) -> Result<T> {
        BinaryHeapPQ::extract(self)
    }
}

impl<T: PartialEq> DataContainer<T> for BinaryHeapPQ<T> {
    fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.items.len())?;
        if index != 0 {
            return Err(ContainerError::unsupported(
                NAME,
                format!("get at index {} (only the root, 0, is accessible)", index),
            ));
        }
        self.peek()
    }

    fn set(&mut self, index: usize, _value: T) -> Result<()> {
        check_bounds(index, self.items.len())?;
        Err(ContainerError::unsupported(
            NAME,
            "set would break heap order",
        ))
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.insert(value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index != self.items.len() {
            return Err(ContainerError::unsupported(
                NAME,
                format!("insert at index {} (only the end, {}, accepts values)", index, self.items.len()),
            ));
        }
        self.insert(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<T> {
        self.extract()
    }

    /// Only the root can be removed; an empty heap gives
    /// [`ContainerError::EmptyContainer`].
    fn remove_value(&mut self, value: &T) -> Result<T> {
        if self.peek()? != value {
            return Err(ContainerError::unsupported(
                NAME,
                "remove a value that is not the priority element",
            ));
        }
        self.extract()
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.items.len())?;
        if index != 0 {
            return Err(ContainerError::unsupported(
                NAME,
                format!("remove at index {} (only the root, 0, is accessible)", index),
            ));
        }
        self.extract()
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>> {
        Ok(self.items.get(0).ok().filter(|root| predicate(*root)).map(|_| 0))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        BinaryHeapPQ::clear(self)
    }

    fn supports_indexed_access(&self) -> bool {
        false
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::BinaryHeap
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeapPQ<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for BinaryHeapPQ<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.build_heap_from(iter.into_iter().collect());
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeapPQ<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeapPQ")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display> fmt::Display for BinaryHeapPQ<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}
