//! Caching layer for shortest-path trees.
//!
//! The graph never changes after ingestion, so a tree computed from a source
//! stays valid for the life of the network. Repeated queries from the same
//! stop (every passenger boarding at a busy stop, say) reuse the tree
//! instead of rerunning Dijkstra.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::graph::{Graph, RoutingError, ShortestPathTree, VertexIndex};

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached trees. Zero disables caching.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 256 }
    }
}

/// Shortest-path trees keyed by source vertex.
pub struct PathTreeCache {
    trees: Option<MokaCache<VertexIndex, Arc<ShortestPathTree>>>,
}

impl PathTreeCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let trees = (config.max_capacity > 0).then(|| {
            MokaCache::builder()
                .max_capacity(config.max_capacity)
                .build()
        });
        Self { trees }
    }

    /// Return the tree for `source`, computing and caching it on a miss.
    pub fn get_or_compute(
        &self,
        graph: &Graph,
        source: VertexIndex,
    ) -> Result<Arc<ShortestPathTree>, RoutingError> {
        let Some(trees) = &self.trees else {
            return graph.shortest_paths(source).map(Arc::new);
        };

        if let Some(tree) = trees.get(&source) {
            trace!(source = source.0, "Shortest-path tree cache hit");
            return Ok(tree);
        }

        let tree = Arc::new(graph.shortest_paths(source)?);
        trees.insert(source, tree.clone());
        Ok(tree)
    }

    /// Returns true if caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.trees.is_some()
    }

    /// Drop every cached tree.
    pub fn invalidate_all(&self) {
        if let Some(trees) = &self.trees {
            trees.invalidate_all();
        }
    }
}

impl std::fmt::Debug for PathTreeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathTreeCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
