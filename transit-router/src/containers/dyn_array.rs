//! Growable array with a fixed doubling policy.

use std::slice;

use super::ContainerError;

/// Capacity of the first allocation.
const INITIAL_CAPACITY: usize = 4;

/// A growable sequence with checked indexed access.
///
/// Capacity grows 0 → 4 → 8 → 16 → … so `push_last` is amortized O(1).
/// Growth moves every element into a fresh allocation; nothing keeps a
/// reference into the old storage.
///
/// # Examples
///
/// ```
/// use transit_router::containers::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push_last(10);
/// arr.push_last(20);
///
/// assert_eq!(arr.get(1), Ok(&20));
/// assert!(arr.get(2).is_err());
/// assert_eq!(arr.capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with no backing storage.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Append a value at the end, growing the storage if it is full.
    pub fn push_last(&mut self, value: T) {
        if self.items.len() + 1 > self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    /// Remove and return the last value. Returns `None` on an empty array.
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Checked shared access.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Overwrite the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ContainerError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of values that fit before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over values in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the values as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// View the values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity * 2
        };

        let mut items = Vec::with_capacity(new_capacity);
        items.extend(self.items.drain(..));
        self.items = items;
        self.capacity = new_capacity;
    }
}

impl<T: Clone> DynArray<T> {
    /// Create an array of `len` copies of `value`.
    pub fn filled(value: T, len: usize) -> Self {
        let mut arr = Self::new();
        for _ in 0..len {
            arr.push_last(value.clone());
        }
        arr
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for value in iter {
            arr.push_last(value);
        }
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
