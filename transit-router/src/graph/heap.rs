//! Binary min-heap with decrease-key, keyed by vertex.

use crate::containers::DynArray;

use super::error::HeapError;
use super::types::{Distance, VertexIndex};

/// A (vertex, distance) pair stored in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: VertexIndex,
    pub distance: Distance,
}

/// Binary min-heap over vertices with an auxiliary position table.
///
/// The position table maps each vertex to its current slot, which makes
/// `decrease_key` O(log n). The set of admissible vertices is fixed at
/// construction. Every node's distance is at most its children's; ties are
/// left in whatever order the sift operations produce.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    entries: DynArray<HeapEntry>,
    positions: DynArray<Option<usize>>,
}

impl IndexedMinHeap {
    /// Create a heap able to hold vertices `0..vertex_count`.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            entries: DynArray::new(),
            positions: DynArray::filled(None, vertex_count),
        }
    }

    /// Returns true if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct vertices the heap accepts.
    pub fn vertex_capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if `vertex` is currently in the heap.
    pub fn contains(&self, vertex: VertexIndex) -> bool {
        self.position(vertex).is_some()
    }

    /// Insert a vertex with its current distance.
    pub fn insert(&mut self, vertex: VertexIndex, distance: Distance) -> Result<(), HeapError> {
        let capacity = self.vertex_capacity();
        if vertex.0 >= capacity {
            return Err(HeapError::VertexOutOfRange { vertex, capacity });
        }
        if self.contains(vertex) {
            return Err(HeapError::DuplicateVertex(vertex));
        }

        let slot = self.entries.len();
        self.entries.push_last(HeapEntry { vertex, distance });
        self.set_position(vertex, Some(slot));
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the entry with the smallest distance.
    ///
    /// Returns `None` on an empty heap.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        let last = self.entries.pop_last()?;
        self.set_position(last.vertex, None);

        if self.entries.is_empty() {
            return Some(last);
        }

        let root = std::mem::replace(&mut self.entries.as_mut_slice()[0], last);
        self.set_position(root.vertex, None);
        self.set_position(last.vertex, Some(0));
        self.sift_down(0);
        Some(root)
    }

    /// Lower the distance of a vertex already in the heap.
    ///
    /// Returns `false` without changing anything if the vertex is not in the
    /// heap (never inserted, or already extracted) or if `distance` is not
    /// smaller than its current one.
    pub fn decrease_key(&mut self, vertex: VertexIndex, distance: Distance) -> bool {
        let slot = match self.position(vertex) {
            Some(slot) if slot < self.entries.len() => slot,
            _ => return false,
        };

        let entry = &mut self.entries.as_mut_slice()[slot];
        if entry.vertex != vertex || distance >= entry.distance {
            return false;
        }
        entry.distance = distance;
        self.sift_up(slot);
        true
    }

    fn position(&self, vertex: VertexIndex) -> Option<usize> {
        self.positions.get(vertex.0).ok().copied().flatten()
    }

    fn set_position(&mut self, vertex: VertexIndex, slot: Option<usize>) {
        if let Ok(position) = self.positions.get_mut(vertex.0) {
            *position = slot;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        let entries = self.entries.as_mut_slice();
        entries.swap(a, b);
        let (va, vb) = (entries[a].vertex, entries[b].vertex);
        self.set_position(va, Some(a));
        self.set_position(vb, Some(b));
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let entries = self.entries.as_slice();
            if entries[parent].distance <= entries[slot].distance {
                break;
            }
            self.swap_slots(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let entries = self.entries.as_slice();
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && entries[left].distance < entries[smallest].distance {
                smallest = left;
            }
            if right < len && entries[right].distance < entries[smallest].distance {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    #[cfg(test)]
    fn holds_heap_property(&self) -> bool {
        let entries = self.entries.as_slice();
        let ordered =
            (1..entries.len()).all(|i| entries[(i - 1) / 2].distance <= entries[i].distance);
        let indexed = entries
            .iter()
            .enumerate()
            .all(|(slot, e)| self.position(e.vertex) == Some(slot));
        ordered && indexed
    }
}
