//! LinkedQueue: FIFO adapter over [`SinglyLinkedList`]

use super::linked_list::{self, SinglyLinkedList};
use super::{ContainerKind, DataContainer};
use crate::error::{check_bounds, ContainerError, Result};
use std::fmt;

const NAME: &str = "LinkedQueue";

/// The narrow FIFO contract
pub trait Queue<T> {
    /// Append an item at the rear
    fn enqueue(&mut self, item: T);

    /// Remove and return the front item
    fn dequeue(&mut self) -> Result<T>;

    /// Front item without removing it
    fn front(&self) -> Result<&T>;
}

/// Linked queue: enqueue at the rear, dequeue from the front
///
/// Through [`DataContainer`] the only legal index for `get`, `set` and
/// `remove_at` is `0`, and the only legal insertion index is `len`.
///
/// # Examples
///
/// ```rust
/// use soas_containers::LinkedQueue;
///
/// let mut tickets = LinkedQueue::new();
/// tickets.enqueue(101);
/// tickets.enqueue(102);
///
/// assert_eq!(tickets.front()?, &101);
/// assert_eq!(tickets.dequeue()?, 101);
/// assert_eq!(tickets.len(), 1);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
#[derive(Clone)]
pub struct LinkedQueue<T> {
    items: SinglyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Number of queued elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `value` at the rear
    pub fn enqueue(&mut self, value: T) {
        self.items.add_rear(value);
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ContainerError::empty("dequeue an empty queue"));
        }
        self.items.remove()
    }

    /// Front element without removing it
    pub fn front(&self) -> Result<&T> {
        self.items
            .front()
            .ok_or(ContainerError::empty("read the front of an empty queue"))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from front to rear
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.items.iter()
    }

    fn check_front(&self, index: usize, operation: &str) -> Result<()> {
        check_bounds(index, self.items.len())?;
        if index != 0 {
            return Err(ContainerError::unsupported(
                NAME,
                format!("{} at index {} (only the front, 0, is accessible)", operation, index),
            ));
        }
        Ok(())
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, item: T) {
        LinkedQueue::enqueue(self, item)
    }

    fn dequeue(&mut self) -> Result<T> {
        LinkedQueue::dequeue(self)
    }

    fn front(&self) -> Result<&T> {
        LinkedQueue::front(self)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> DataContainer<T> for LinkedQueue<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.check_front(index, "get")?;
        self.front()
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_front(index, "set")?;
        self.items.set(0, value)
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.enqueue(value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index != self.items.len() {
            return Err(ContainerError::unsupported(
                NAME,
                format!("insert at index {} (only the rear, {}, accepts values)", index, self.items.len()),
            ));
        }
        self.enqueue(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<T> {
        self.dequeue()
    }

    /// Only the front can be removed; an empty queue gives
    /// [`ContainerError::EmptyContainer`].
    fn remove_value(&mut self, value: &T) -> Result<T> {
        if self.front()? != value {
            return Err(ContainerError::unsupported(
                NAME,
                "remove a value that is not at the front",
            ));
        }
        self.dequeue()
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_front(index, "remove")?;
        self.dequeue()
    }

    fn find_by(&self, _predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>> {
        Err(ContainerError::unsupported(NAME, "find_by needs indexed access"))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        LinkedQueue::clear(self)
    }

    fn supports_indexed_access(&self) -> bool {
        false
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::LinkedQueue
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue").field("items", &self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[front] ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, " [rear]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_with_interleaving() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        queue.enqueue(4);
        queue.enqueue(5);
        let rest: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(rest, vec![3, 4, 5]);
    }

    #[test]
    fn test_dequeue_and_front_on_empty() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        assert!(matches!(queue.dequeue(), Err(ContainerError::EmptyContainer { .. })));
        assert!(matches!(queue.front(), Err(ContainerError::EmptyContainer { .. })));
    }

    #[test]
    fn test_get_set_only_at_front() {
        let mut queue: LinkedQueue<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(DataContainer::get(&queue, 0), Ok(&1));
        assert!(matches!(DataContainer::get(&queue, 2), Err(ContainerError::Unsupported { .. })));
        assert_eq!(DataContainer::get(&queue, 3), Err(ContainerError::out_of_bounds(3, 3)));

        DataContainer::set(&mut queue, 0, 10).unwrap();
        assert_eq!(queue.front(), Ok(&10));
        assert!(matches!(
            DataContainer::set(&mut queue, 1, 0),
            Err(ContainerError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_set_on_empty_is_out_of_bounds() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        assert_eq!(
            DataContainer::set(&mut queue, 0, 1),
            Err(ContainerError::out_of_bounds(0, 0))
        );
    }

    #[test]
    fn test_add_at_only_at_rear() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        DataContainer::add_at(&mut queue, 0, 1).unwrap();
        DataContainer::add_at(&mut queue, 1, 2).unwrap();
        assert!(matches!(
            DataContainer::add_at(&mut queue, 0, 0),
            Err(ContainerError::Unsupported { .. })
        ));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_remove_value_requires_front() {
        let mut queue: LinkedQueue<&str> = vec!["a", "b"].into_iter().collect();
        assert!(matches!(
            queue.remove_value(&"b"),
            Err(ContainerError::Unsupported { .. })
        ));
        assert_eq!(queue.remove_value(&"a"), Ok("a"));

        let mut empty: LinkedQueue<&str> = LinkedQueue::new();
        assert!(matches!(
            empty.remove_value(&"a"),
            Err(ContainerError::EmptyContainer { .. })
        ));
    }

    #[test]
    fn test_remove_at_front_only() {
        let mut queue: LinkedQueue<i32> = vec![7, 8].into_iter().collect();
        assert!(matches!(queue.remove_at(1), Err(ContainerError::Unsupported { .. })));
        assert_eq!(queue.remove_at(0), Ok(7));
        assert_eq!(DataContainer::remove(&mut queue), Ok(8));
        assert_eq!(queue.remove_at(0), Err(ContainerError::out_of_bounds(0, 0)));
    }

    #[test]
    fn test_find_by_always_unsupported() {
        let queue: LinkedQueue<i32> = vec![1].into_iter().collect();
        assert!(matches!(queue.find_by(&|_| true), Err(ContainerError::Unsupported { .. })));
        assert!(!queue.supports_indexed_access());
        assert_eq!(queue.kind(), ContainerKind::LinkedQueue);
    }

    #[test]
    fn test_display_front_to_rear() {
        let queue: LinkedQueue<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(queue.to_string(), "[front] 1, 2 [rear]");
    }

    #[test]
    fn test_queue_trait_object() {
        let mut line: Box<dyn Queue<u32>> = Box::new(LinkedQueue::new());
        line.enqueue(7);
        line.enqueue(9);
        assert_eq!(line.front(), Ok(&7));
        assert_eq!(line.dequeue(), Ok(7));
        assert_eq!(line.dequeue(), Ok(9));
        assert!(matches!(line.front(), Err(ContainerError::EmptyContainer { .. })));
    }
}
