//! The uniform container contract shared by every backing structure

use super::ContainerKind;
use crate::error::Result;

/// Common behavior every backing structure adheres to.
///
/// Consumers pick a concrete structure once (usually through
/// [`ContainerKind::create`]) and afterwards talk to it only through this
/// trait. Structures that restrict access (stack, queue, heap) report
/// `false` from [`supports_indexed_access`](Self::supports_indexed_access)
/// and reject indices other than their single legal position with
/// [`ContainerError::Unsupported`](crate::ContainerError::Unsupported).
///
/// Index-taking operations check bounds before capability: an index at or
/// past `len()` is always [`OutOfBounds`](crate::ContainerError::OutOfBounds).
///
/// # Examples
///
/// ```rust
/// use soas_containers::{ContainerKind, DataContainer};
///
/// let mut roster: Box<dyn DataContainer<u32>> = ContainerKind::LinkedList.create()?;
/// roster.add(12)?;
/// roster.add(7)?;
/// roster.add_at(1, 99)?;
///
/// assert_eq!(roster.get(1)?, &99);
/// assert_eq!(roster.find_by(&|n| *n == 7)?, Some(2));
/// assert_eq!(roster.remove()?, 12);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
pub trait DataContainer<T: PartialEq> {
    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`.
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Inserts at the structure's natural insertion point.
    fn add(&mut self, value: T) -> Result<()>;

    /// Inserts at `index`, shifting successors where the structure allows it.
    fn add_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at the structure's natural removal point.
    fn remove(&mut self) -> Result<T>;

    /// Removes and returns the first element equal to `value`.
    fn remove_value(&mut self, value: &T) -> Result<T>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Returns the index of the first element matching `predicate`, if any.
    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>>;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Capability flag: whether arbitrary indexed access is allowed.
    fn supports_indexed_access(&self) -> bool;

    /// Structural kind of this container.
    fn kind(&self) -> ContainerKind;

    /// Iterates over all live elements in structure-defined order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}
