//! Identifier and weight types shared by the graph engine.

use std::fmt;

use serde::Serialize;

/// A stop identifier as presented to users and source files: 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl StopId {
    /// Convert to the graph's 0-based vertex index.
    ///
    /// Returns `None` for stop id 0, which is never valid.
    pub fn to_vertex(self) -> Option<VertexIndex> {
        (self.0 as usize).checked_sub(1).map(VertexIndex)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A vertex index inside the graph: 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    /// Convert back to the 1-based stop id.
    pub fn to_stop(self) -> StopId {
        StopId(self.0 as u32 + 1)
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A transit line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineNo(pub u32);

impl fmt::Display for LineNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative edge weight.
pub type Weight = u32;

/// Path length from a source, with a distinguished unreachable value.
///
/// `Distance::INFINITY` compares greater than every finite distance, so it
/// can sit in the heap alongside reached vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    /// Distance of the source to itself.
    pub const ZERO: Distance = Distance(0);

    /// Sentinel for "not reached".
    pub const INFINITY: Distance = Distance(u64::MAX);

    /// A finite distance.
    pub fn new(value: u64) -> Self {
        Distance(value)
    }

    /// Returns true unless this is the unreachable sentinel.
    pub fn is_finite(self) -> bool {
        self != Self::INFINITY
    }

    /// The finite value, or `None` for the sentinel.
    pub fn value(self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Extend by an edge weight. Infinity stays infinity.
    pub fn saturating_add(self, weight: Weight) -> Distance {
        if !self.is_finite() {
            return self;
        }
        Distance(self.0.saturating_add(u64::from(weight)))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => v.fmt(f),
            None => f.write_str("∞"),
        }
    }
}
