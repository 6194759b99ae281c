//! Stop names by id.

use crate::containers::DynArray;
use crate::graph::StopId;

/// Names of the stops in the network, addressed by 1-based stop id.
///
/// The highest inserted id fixes the size of the network; ids below it that
/// were never named are gaps.
#[derive(Debug, Clone, Default)]
pub struct StopCatalogue {
    names: DynArray<Option<String>>,
}

impl StopCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name a stop, replacing any earlier name for the same id.
    ///
    /// Returns `false` for stop id 0, which is never valid.
    pub fn insert(&mut self, id: StopId, name: impl Into<String>) -> bool {
        let Some(vertex) = id.to_vertex() else {
            return false;
        };

        while self.names.len() <= vertex.0 {
            self.names.push_last(None);
        }
        self.names.set(vertex.0, Some(name.into())).is_ok()
    }

    /// Name of a stop, if it has one.
    pub fn name(&self, id: StopId) -> Option<&str> {
        let vertex = id.to_vertex()?;
        self.names.get(vertex.0).ok()?.as_deref()
    }

    /// Lowest stop id carrying exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<StopId> {
        self.iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(id, _)| id)
    }

    /// Returns true if `id` is in `[1, max_id]`.
    pub fn is_valid(&self, id: StopId) -> bool {
        id.0 >= 1 && (id.0 as usize) <= self.names.len()
    }

    /// Highest stop id, which is also the vertex count of the network.
    pub fn max_id(&self) -> usize {
        self.names.len()
    }

    /// Number of named stops.
    pub fn len(&self) -> usize {
        self.names.iter().filter(|name| name.is_some()).count()
    }

    /// Returns true if no stop has a name.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Named stops in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &str)> {
        self.names.iter().enumerate().filter_map(|(i, name)| {
            name.as_deref().map(|name| (StopId(i as u32 + 1), name))
        })
    }
}
