//! Closed set of container structures and the factory that builds them

use super::{ArrayStack, BinaryHeapPQ, DataContainer, DynamicArray, LinkedQueue, SinglyLinkedList};
use crate::config::ContainerConfig;
use crate::error::{ContainerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every backing structure a [`DataContainer`] can be built from
///
/// # Examples
///
/// ```rust
/// use soas_containers::{ContainerKind, DataContainer};
///
/// let kind: ContainerKind = "linked_queue".parse()?;
/// let mut fans: Box<dyn DataContainer<String>> = kind.create()?;
/// fans.add("section 110".to_string())?;
///
/// assert!(!kind.supports_indexed_access());
/// assert_eq!(fans.kind(), ContainerKind::LinkedQueue);
/// # Ok::<(), soas_containers::ContainerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// [`DynamicArray`]
    DynamicArray,
    /// [`SinglyLinkedList`]
    LinkedList,
    /// [`ArrayStack`]
    ArrayStack,
    /// [`LinkedQueue`]
    LinkedQueue,
    /// [`BinaryHeapPQ`]
    BinaryHeap,
}

impl ContainerKind {
    /// All kinds, in declaration order
    pub const ALL: [ContainerKind; 5] = [
        ContainerKind::DynamicArray,
        ContainerKind::LinkedList,
        ContainerKind::ArrayStack,
        ContainerKind::LinkedQueue,
        ContainerKind::BinaryHeap,
    ];

    /// Stable snake_case name, also accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::DynamicArray => "dynamic_array",
            ContainerKind::LinkedList => "linked_list",
            ContainerKind::ArrayStack => "array_stack",
            ContainerKind::LinkedQueue => "linked_queue",
            ContainerKind::BinaryHeap => "binary_heap",
        }
    }

    /// Capability flag of containers of this kind
    pub fn supports_indexed_access(self) -> bool {
        matches!(self, ContainerKind::DynamicArray | ContainerKind::LinkedList)
    }

    /// Build an empty container of this kind with default settings
    ///
    /// The heap orders elements by `T`'s natural ordering.
    pub fn create<T>(self) -> Result<Box<dyn DataContainer<T>>>
    where
        T: Ord + 'static,
    {
        self.create_with_config(&ContainerConfig {
            kind: self,
            ..ContainerConfig::default()
        })
    }

    /// Build an empty container of this kind using `config.initial_capacity`
    ///
    /// `config.kind` is ignored; `self` decides the structure.
    pub fn create_with_config<T>(self, config: &ContainerConfig) -> Result<Box<dyn DataContainer<T>>>
    where
        T: Ord + 'static,
    {
        let capacity = config.initial_capacity;
        let container: Box<dyn DataContainer<T>> = match self {
            ContainerKind::DynamicArray => Box::new(DynamicArray::with_capacity(capacity)?),
            ContainerKind::LinkedList => Box::new(SinglyLinkedList::new()),
            ContainerKind::ArrayStack => Box::new(ArrayStack::with_capacity(capacity)?),
            ContainerKind::LinkedQueue => Box::new(LinkedQueue::new()),
            ContainerKind::BinaryHeap => {
                Box::new(BinaryHeapPQ::with_capacity_and_comparator(capacity, T::cmp)?)
            }
        };
        Ok(container)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerKind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ContainerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ContainerError::configuration(format!("unknown container kind '{}'", s)))
    }
}

/// Verify that `actual` has the same structure as `expected`
///
/// Only the structure is compared, never the contents. Owners call this
/// before swapping a freshly loaded container in for the one they were
/// configured with.
pub fn ensure_same_kind<T, A, B>(expected: &A, actual: &B) -> Result<()>
where
    T: PartialEq,
    A: DataContainer<T> + ?Sized,
    B: DataContainer<T> + ?Sized,
{
    let (expected, actual) = (expected.kind(), actual.kind());
    if expected != actual {
        log::warn!("container mismatch: expected {}, got {}", expected, actual);
        return Err(ContainerError::mismatched(expected.name(), actual.name()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in ContainerKind::ALL {
            assert_eq!(kind.name().parse::<ContainerKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(" Binary_Heap ".parse::<ContainerKind>(), Ok(ContainerKind::BinaryHeap));
        assert!(matches!(
            "skiplist".parse::<ContainerKind>(),
            Err(ContainerError::Configuration { .. })
        ));
    }

    #[test]
    fn test_factory_builds_matching_kind() {
        for kind in ContainerKind::ALL {
            let container = kind.create::<i32>().unwrap();
            assert_eq!(container.kind(), kind);
            assert!(container.is_empty());
            assert_eq!(container.supports_indexed_access(), kind.supports_indexed_access());
        }
    }

    #[test]
    fn test_factory_rejects_zero_capacity() {
        let config = ContainerConfig {
            kind: ContainerKind::DynamicArray,
            initial_capacity: 0,
        };
        assert!(matches!(
            ContainerKind::DynamicArray.create_with_config::<i32>(&config),
            Err(ContainerError::InvalidArgument { .. })
        ));
        // linked structures have no buffer to size
        assert!(ContainerKind::LinkedList.create_with_config::<i32>(&config).is_ok());
    }

    #[test]
    fn test_ensure_same_kind() {
        let array: DynamicArray<i32> = DynamicArray::new();
        let other_array: DynamicArray<i32> = vec![1, 2, 3].into_iter().collect();
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();

        assert!(ensure_same_kind(&array, &other_array).is_ok());
        assert_eq!(
            ensure_same_kind(&array, &list),
            Err(ContainerError::mismatched("dynamic_array", "linked_list"))
        );
    }

    #[test]
    fn test_ensure_same_kind_on_boxed() {
        let expected = ContainerKind::LinkedQueue.create::<u8>().unwrap();
        let reloaded = ContainerKind::ArrayStack.create::<u8>().unwrap();
        assert!(ensure_same_kind(expected.as_ref(), expected.as_ref()).is_ok());
        assert!(matches!(
            ensure_same_kind(expected.as_ref(), reloaded.as_ref()),
            Err(ContainerError::MismatchedContainer { .. })
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ContainerKind::ArrayStack).unwrap();
        assert_eq!(json, "\"array_stack\"");
        let kind: ContainerKind = serde_json::from_str("\"binary_heap\"").unwrap();
        assert_eq!(kind, ContainerKind::BinaryHeap);
    }
}
