//! SinglyLinkedList: head/tail tracked node chain
//!
//! Front insertion, rear insertion and front removal are O(1); every
//! index-based operation walks from the head and is O(n).
//!
//! The list is FIFO-shaped as a raw structure: the no-argument `add` appends
//! at the **tail** while the no-argument `remove` takes the **head**.
//! [`LinkedQueue`](super::LinkedQueue) builds on exactly that pairing.

use super::{ContainerKind, DataContainer, DynamicArray};
use crate::error::{check_bounds, ContainerError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

// Every `NonNull<Node<T>>` held by a list comes from `Node::alloc`, is reachable
// from `head` exactly once, and is freed exactly once through `Box::from_raw`.
impl<T> Node<T> {
    /// Allocate a detached node and hand out its pointer
    fn alloc(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next: None })))
    }
}

/// Singly linked list with head and tail pointers
///
/// Invariants: `head` is `None` exactly when `len == 0`; the tail node never
/// has a successor; every other node does.
///
/// # Examples
///
/// ```rust
/// use soas_containers::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.add_rear(2);
/// list.add_rear(3);
/// list.add_front(1);
///
/// assert_eq!(list.to_string(), "1 -> 2 -> 3 -> null");
/// assert_eq!(list.remove()?, 1);
/// assert_eq!(list.get(1)?, &3);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// The list uniquely owns every node; the raw pointers never alias another list.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of nodes in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk `index` links from the head
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut cursor = self.head;
        for _ in 0..index {
            // SAFETY: every pointer reachable from `head` is a live node owned by this list.
            cursor = cursor.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        cursor
    }

    /// Insert a new head node
    pub fn add_front(&mut self, value: T) {
        let node = Node::alloc(value);
        // SAFETY: `node` is freshly allocated and not yet shared.
        unsafe {
            (*node.as_ptr()).next = self.head;
        }
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Append a new tail node
    pub fn add_rear(&mut self, value: T) {
        let node = Node::alloc(value);
        // SAFETY: `tail` is a live node of this list; `node` is fresh.
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Append at the tail; same as [`add_rear`](Self::add_rear)
    #[inline]
    pub fn add(&mut self, value: T) {
        self.add_rear(value);
    }

    /// Insert so that the new value ends up at `index`
    ///
    /// Accepts any `index <= len`.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ContainerError::out_of_bounds(index, self.len));
        }
        if index == 0 {
            self.add_front(value);
            return Ok(());
        }
        if index == self.len {
            self.add_rear(value);
            return Ok(());
        }

        let prev = self
            .node_at(index - 1)
            .ok_or(ContainerError::out_of_bounds(index, self.len))?;
        let node = Node::alloc(value);
        // SAFETY: `prev` is a live interior node found by `node_at`.
        unsafe {
            (*node.as_ptr()).next = (*prev.as_ptr()).next;
            (*prev.as_ptr()).next = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Reference to the value at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        let node = self
            .node_at(index)
            .ok_or(ContainerError::out_of_bounds(index, self.len))?;
        // SAFETY: `node_at` only returns live nodes; the borrow is tied to `&self`.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable reference to the value at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        let node = self
            .node_at(index)
            .ok_or(ContainerError::out_of_bounds(index, self.len))?;
        // SAFETY: `node_at` only returns live nodes; `&mut self` makes the borrow unique.
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Replace the value at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Value stored in the head node
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node; the borrow is tied to `&self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Value stored in the tail node
    pub fn rear(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node; the borrow is tied to `&self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Remove and return the head value
    pub fn remove(&mut self) -> Result<T> {
        let head = self.head.ok_or(ContainerError::empty("remove from an empty list"))?;
        // SAFETY: `head` was produced by `Node::alloc` and is unlinked right here.
        let boxed = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = boxed.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(boxed.value)
    }

    /// Unlink and free the successor of `prev`
    fn unlink_after(&mut self, prev: NonNull<Node<T>>) -> Option<T> {
        // SAFETY: `prev` and its successor are live nodes allocated by `Node::alloc`;
        // the successor is unlinked before its box is dropped.
        let target = unsafe { (*prev.as_ptr()).next }?;
        let boxed = unsafe { Box::from_raw(target.as_ptr()) };
        unsafe {
            (*prev.as_ptr()).next = boxed.next;
        }
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Some(boxed.value)
    }

    /// Remove and return the value at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;
        if index == 0 {
            return self.remove();
        }
        self.node_at(index - 1)
            .and_then(|prev| self.unlink_after(prev))
            .ok_or(ContainerError::out_of_bounds(index, self.len))
    }

    /// Index of the first value matching `predicate`
    pub fn find_by<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Drop every node and reset to empty
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            // SAFETY: each node is reached once from `head` and freed exactly once.
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = boxed.next;
        }
        self.tail = None;
        self.len = 0;
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Copy the values into a [`DynamicArray`], preserving order
    pub fn to_dynamic_array(&self) -> DynamicArray<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Index of the first value equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Check if any value equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove and return the first value equal to `value`
    pub fn remove_value(&mut self, value: &T) -> Result<T> {
        let head = match self.head {
            Some(head) => head,
            None => return Err(ContainerError::not_found("list is empty")),
        };
        // SAFETY: `head` and every node reachable from it are live while `&mut self` is held.
        if unsafe { &(*head.as_ptr()).value } == value {
            return self.remove();
        }

        let mut prev = head;
        while let Some(next) = unsafe { (*prev.as_ptr()).next } {
            if unsafe { &(*next.as_ptr()).value } == value {
                return self
                    .unlink_after(prev)
                    .ok_or(ContainerError::not_found("no matching element in list"));
            }
            prev = next;
        }
        Err(ContainerError::not_found("no matching element in list"))
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> DataContainer<T> for SinglyLinkedList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        SinglyLinkedList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        SinglyLinkedList::set(self, index, value)
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.add_rear(value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        SinglyLinkedList::add_at(self, index, value)
    }

    fn remove(&mut self) -> Result<T> {
        SinglyLinkedList::remove(self)
    }

    fn remove_value(&mut self, value: &T) -> Result<T> {
        SinglyLinkedList::remove_value(self, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        SinglyLinkedList::remove_at(self, index)
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>> {
        Ok(SinglyLinkedList::find_by(self, predicate))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }

    fn supports_indexed_access(&self) -> bool {
        true
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::LinkedList
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(SinglyLinkedList::iter(self))
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`]
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for 'a, so no node is freed meanwhile.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator that drains a [`SinglyLinkedList`] from the head
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_rear(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{} -> ", item)?;
        }
        write!(f, "null")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
        values.iter().copied().collect()
    }

    fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_list() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.rear(), None);
        assert_eq!(list.to_string(), "null");
    }

    #[test]
    fn test_add_front_and_rear() {
        let mut list = SinglyLinkedList::new();
        list.add_rear(2);
        list.add_front(1);
        list.add_rear(3);
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.rear(), Some(&3));
    }

    #[test]
    fn test_add_front_on_empty_sets_tail() {
        let mut list = SinglyLinkedList::new();
        list.add_front(7);
        list.add_rear(8);
        assert_eq!(contents(&list), vec![7, 8]);
        assert_eq!(list.rear(), Some(&8));
    }

    #[test]
    fn test_add_at_middle_and_ends() {
        let mut list = list_of(&[0, 1, 2, 3, 4]);
        list.add_at(2, 100).unwrap();
        assert_eq!(list.to_string(), "0 -> 1 -> 100 -> 2 -> 3 -> 4 -> null");

        list.add_at(6, 5).unwrap();
        assert_eq!(list.rear(), Some(&5));
        list.add_at(0, -1).unwrap();
        assert_eq!(list.front(), Some(&-1));
        assert_eq!(list.len(), 8);

        assert_eq!(list.add_at(9, 0), Err(ContainerError::out_of_bounds(9, 8)));
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_add_at_end_of_string_list() {
        let mut list: SinglyLinkedList<&str> = vec!["A", "B", "C", "D"].into_iter().collect();
        list.add_at(4, "E").unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.rear(), Some(&"E"));
    }

    #[test]
    fn test_get_and_set() {
        let mut list = list_of(&[10, 20, 30]);
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(2), Ok(&30));
        assert_eq!(list.get(3), Err(ContainerError::out_of_bounds(3, 3)));

        list.set(1, 25).unwrap();
        assert_eq!(contents(&list), vec![10, 25, 30]);
        assert_eq!(list.set(5, 0), Err(ContainerError::out_of_bounds(5, 3)));
    }

    #[test]
    fn test_remove_takes_head() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove(), Ok(1));
        assert_eq!(list.remove(), Ok(2));
        assert_eq!(list.remove(), Ok(3));
        assert!(list.is_empty());
        assert_eq!(list.rear(), None);
        assert!(matches!(list.remove(), Err(ContainerError::EmptyContainer { .. })));

        // tail must be reset so appending after draining works
        list.add_rear(9);
        assert_eq!(list.front(), Some(&9));
        assert_eq!(list.rear(), Some(&9));
    }

    #[test]
    fn test_remove_at_updates_tail() {
        let mut list = list_of(&[0, 1, 2, 3, 4]);
        assert_eq!(list.remove_at(2), Ok(2));
        assert_eq!(contents(&list), vec![0, 1, 3, 4]);

        assert_eq!(list.remove_at(3), Ok(4));
        assert_eq!(list.rear(), Some(&3));
        list.add_rear(5);
        assert_eq!(contents(&list), vec![0, 1, 3, 5]);

        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.remove_at(3), Err(ContainerError::out_of_bounds(3, 3)));
    }

    #[test]
    fn test_remove_value() {
        let mut list = list_of(&[5, 6, 7, 6]);
        assert_eq!(list.remove_value(&6), Ok(6));
        assert_eq!(contents(&list), vec![5, 7, 6]);

        assert_eq!(list.remove_value(&6), Ok(6));
        assert_eq!(list.rear(), Some(&7));

        assert_eq!(list.remove_value(&5), Ok(5));
        assert!(matches!(list.remove_value(&42), Err(ContainerError::NotFound { .. })));
        assert_eq!(contents(&list), vec![7]);

        list.clear();
        assert!(matches!(list.remove_value(&7), Err(ContainerError::NotFound { .. })));
    }

    #[test]
    fn test_index_of_and_find_by() {
        let list = list_of(&[3, 8, 3, 12]);
        assert_eq!(list.index_of(&3), Some(0));
        assert_eq!(list.index_of(&12), Some(3));
        assert_eq!(list.index_of(&99), None);
        assert_eq!(list.find_by(|n| *n > 5), Some(1));
        assert_eq!(list.find_by(|n| *n > 50), None);
        assert!(list.contains(&8));
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.add(4);
        assert_eq!(contents(&list), vec![4]);
    }

    #[test]
    fn test_to_dynamic_array() {
        let list = list_of(&[4, 5, 6]);
        let array = list.to_dynamic_array();
        assert_eq!(array.as_slice(), &[4, 5, 6]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let list = list_of(&[1, 2, 3]);
        let drained: Vec<i32> = list.into_iter().collect();
        assert_eq!(drained, vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_size_hint() {
        let list = list_of(&[1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = list_of(&[1, 2]);
        let mut copy = original.clone();
        copy.add_rear(3);
        assert_eq!(contents(&original), vec![1, 2]);
        assert_eq!(contents(&copy), vec![1, 2, 3]);
    }

    #[test]
    fn test_long_list_drop_does_not_recurse() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_owned_values_are_dropped() {
        let mut list = SinglyLinkedList::new();
        list.add_rear(String::from("qb"));
        list.add_rear(String::from("rb"));
        assert_eq!(list.remove_value(&String::from("rb")), Ok(String::from("rb")));
        assert_eq!(list.to_string(), "qb -> null");
    }

    #[test]
    fn test_contract_view() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let container: &mut dyn DataContainer<i32> = &mut list;
        container.add(1).unwrap();
        container.add(2).unwrap();
        container.add_at(0, 0).unwrap();
        assert!(container.supports_indexed_access());
        assert_eq!(container.kind(), ContainerKind::LinkedList);
        assert_eq!(container.remove(), Ok(0));
        assert_eq!(container.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
