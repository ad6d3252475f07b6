//! ArrayStack: LIFO adapter over [`DynamicArray`]
//!
//! The only legal index is the top slot, `len - 1`; the only legal insertion
//! index is `len`.

use super::{ContainerKind, DataContainer, DynamicArray};
use crate::error::{check_bounds, ContainerError, Result};
use std::fmt;
use std::slice;

const NAME: &str = "ArrayStack";

/// The narrow LIFO contract
pub trait Stack<T> {
    /// Place an item on top
    fn push(&mut self, item: T);

    /// Remove and return the top item
    fn pop(&mut self) -> Result<T>;

    /// Top item without removing it
    fn peek(&self) -> Result<&T>;
}

/// Array backed stack
///
/// `push`, `pop` and `peek` are the primary API. The [`DataContainer`]
/// methods are thin wrappers that validate the index against the top before
/// delegating.
///
/// # Examples
///
/// ```rust
/// use soas_containers::ArrayStack;
///
/// let mut undo = ArrayStack::new();
/// undo.push("add player");
/// undo.push("trade player");
///
/// assert_eq!(undo.peek()?, &"trade player");
/// assert_eq!(undo.pop()?, "trade player");
/// assert_eq!(undo.len(), 1);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
#[derive(Clone)]
pub struct ArrayStack<T> {
    items: DynamicArray<T>,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack with the default capacity
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
        }
    }

    /// Create an empty stack with the given initial capacity
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: DynamicArray::with_capacity(capacity)?,
        })
    }

    /// Number of elements on the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Place `value` on top
    pub fn push(&mut self, value: T) {
        self.items.add(value);
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ContainerError::empty("pop an empty stack"));
        }
        self.items.remove()
    }

    /// Top element without removing it
    pub fn peek(&self) -> Result<&T> {
        match self.items.len() {
            0 => Err(ContainerError::empty("peek an empty stack")),
            len => self.items.get(len - 1),
        }
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Bounds first, then reject anything but the top
    fn check_top(&self, index: usize, operation: &str) -> Result<()> {
        check_bounds(index, self.items.len())?;
        if index != self.items.len() - 1 {
            return Err(ContainerError::unsupported(
                NAME,
                format!("{} at index {} (only the top, {}, is accessible)", operation, index, self.items.len() - 1),
            ));
        }
        Ok(())
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, item: T) {
        ArrayStack::push(self, item)
    }

    fn pop(&mut self) -> Result<T> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        ArrayStack::peek(self)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> DataContainer<T> for ArrayStack<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.check_top(index, "get")?;
        self.peek()
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_top(index, "set")?;
        self.items.set(index, value)
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.push(value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index != self.items.len() {
            return Err(ContainerError::unsupported(
                NAME,
                format!("insert at index {} (only the top, {}, accepts pushes)", index, self.items.len()),
            ));
        }
        self.push(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<T> {
        self.pop()
    }

    /// Only the top can be removed; an empty stack gives
    /// [`ContainerError::EmptyContainer`].
    fn remove_value(&mut self, value: &T) -> Result<T> {
        if self.peek()? != value {
            return Err(ContainerError::unsupported(
                NAME,
                "remove a value that is not on top; use a container with indexed access",
            ));
        }
        self.pop()
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_top(index, "remove")?;
        self.pop()
    }

    fn find_by(&self, _predicate: &dyn Fn(&T) -> bool) -> Result<Option<usize>> {
        Err(ContainerError::unsupported(NAME, "find_by needs indexed access"))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        ArrayStack::clear(self)
    }

    fn supports_indexed_access(&self) -> bool {
        false
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::ArrayStack
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack").field("items", &self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[bottom] ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, " [top]")
    }
}
