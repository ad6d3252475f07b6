//! DynamicArray: contiguous growable buffer with full indexed access
//!
//! Elements always occupy the contiguous slots `[0, len)`. When the buffer is
//! full the capacity doubles; it never shrinks, not even on [`clear`].
//!
//! [`clear`]: DynamicArray::clear

use super::{ContainerKind, DataContainer};
use crate::error::{check_bounds, ContainerError, Result};
use std::fmt;
use std::slice;

/// Capacity used by [`DynamicArray::new`] and by containers built from a factory.
pub const DEFAULT_CAPACITY: usize = 16;

/// Growable array with doubling growth and O(1) indexed access
///
/// `add` is amortized O(1); `add_at` and `remove_at` are O(n) because the
/// successors shift; `get` and `set` are O(1). The no-argument `remove`
/// takes the **last** element, which is what [`ArrayStack`](super::ArrayStack)
/// relies on for `pop`.
///
/// # Examples
///
/// ```rust
/// use soas_containers::DynamicArray;
///
/// let mut scores = DynamicArray::with_capacity(2)?;
/// scores.add(10);
/// scores.add(30);
/// scores.add_at(1, 20)?;
///
/// assert_eq!(scores.as_slice(), &[10, 20, 30]);
/// assert_eq!(scores.capacity(), 4);
/// assert_eq!(scores.remove()?, 30);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty array with the given initial capacity
    ///
    /// Fails with [`ContainerError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ContainerError::invalid_argument(
                "initial capacity must be positive",
            ));
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity of the backing buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Double the capacity
    fn grow(&mut self) {
        let new_cap = self.capacity.saturating_mul(2);
        self.data.reserve_exact(new_cap - self.data.len());
        log::debug!("DynamicArray grew from {} to {} slots", self.capacity, new_cap);
        self.capacity = new_cap;
    }

    /// Append to the end, doubling the buffer first if it is full
    pub fn add(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
    }

    /// Insert at `index`, shifting the successors one slot right
    ///
    /// Accepts any `index <= len`.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.data.len() {
            return Err(ContainerError::out_of_bounds(index, self.data.len()));
        }
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Reference to the element at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// Mutable reference to the element at `index`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.data.len())?;
        Ok(&mut self.data[index])
    }

    /// Replace the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Remove and return the last element
    pub fn remove(&mut self) -> Result<T> {
        self.data.pop().ok_or(ContainerError::empty("remove from an empty array"))
    }

    /// Remove and return the element at `index`, shifting the successors left
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.data.len())?;
        Ok(self.data.remove(index))
    }

    /// Index of the first element matching `predicate`
    pub fn find_by<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.data.iter().position(predicate)
    }

    /// Move every element of `other` to the end of this array
    ///
    /// `other` is left empty but keeps its capacity.
    pub fn append(&mut self, other: &mut DynamicArray<T>) {
        while self.capacity - self.data.len() < other.len() {
            self.grow();
        }
        self.data.append(&mut other.data);
    }

    /// Remove every element, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate over the elements in positional order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|item| item == value)
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove and return the first element equal to `value`
    pub fn remove_value(&mut self, value: &T) -> Result<T> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index),
            None => Err(ContainerError::not_found("no matching element in array")),
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> DataContainer<T> for DynamicArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        DynamicArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        DynamicArray::set(self, index, value)
    }

    fn add(&mut self, value: T) -> Result<()> {
        DynamicArray::add(self, value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        DynamicArray::add_at(self, index, value)
    }

    fn remove(&mut self) -> Result<T> {
        DynamicArray::remove(self)
    }

    fn remove_value(&mut self, value: &T) -> Result<T> {
        DynamicArray::remove_value(self, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        DynamicArray::remove_at(self, index)
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>> {
        Ok(DynamicArray::find_by(self, predicate))
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }

    fn supports_indexed_access(&self) -> bool {
        true
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::DynamicArray
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.data.iter())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
