//! Append-only singly linked list backed by a node arena.

use super::DynArray;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// An append-only singly linked list.
///
/// Nodes are stored in an arena owned by the list and linked by index, so
/// appending is O(1) through the tail index and dropping the list drops
/// every node. Traversal is forward-only from the head; there is no removal.
///
/// # Examples
///
/// ```
/// use transit_router::containers::LinkedList;
///
/// let mut lines = LinkedList::new();
/// lines.push_end(10);
/// lines.push_end(12);
/// lines.push_end(10);
///
/// let collected: Vec<_> = lines.iter().copied().collect();
/// assert_eq!(collected, vec![10, 12, 10]);
/// assert_eq!(lines.head(), Some(&10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList<T> {
    nodes: DynArray<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: DynArray::new(),
            head: None,
            tail: None,
        }
    }

    /// Append a value after the current tail.
    pub fn push_end(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push_last(Node { value, next: None });

        match self.tail {
            Some(tail) => {
                if let Ok(node) = self.nodes.get_mut(tail) {
                    node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// The first value, if any.
    pub fn head(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.nodes.get(index).ok())
            .map(|node| &node.value)
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// First value matching `predicate`, in list order.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<&T> {
        self.iter().find(|value| predicate(value))
    }

    /// Mutable access to the first value matching `predicate`, in list order.
    pub fn find_mut<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<&mut T> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.nodes.get(index).ok()?;
            let next = node.next;
            if predicate(&node.value) {
                return self.nodes.get_mut(index).ok().map(|node| &mut node.value);
            }
            cursor = next;
        }
        None
    }

    /// Returns true if any value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_end(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?).ok()?;
        self.cursor = node.next;
        Some(&node.value)
    }
}
