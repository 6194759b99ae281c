//! Binary search tree mapping a stop to the lines that visit it.

use std::cmp::Ordering;

use crate::containers::{DynArray, LinkedList};
use crate::graph::{LineNo, StopId};

#[derive(Debug, Clone)]
struct BstNode {
    stop: StopId,
    lines: LinkedList<LineNo>,
    left: Option<usize>,
    right: Option<usize>,
}

impl BstNode {
    fn new(stop: StopId, line: LineNo) -> Self {
        let mut lines = LinkedList::new();
        lines.push_end(line);
        Self {
            stop,
            lines,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree keyed by stop id.
///
/// Each node keeps every line number inserted for its stop, in insertion
/// order and without deduplication. Nodes live in an arena owned by the
/// tree. There is no rebalancing, so inserting stops in sorted order
/// degrades the tree to a list.
///
/// # Examples
///
/// ```
/// use transit_router::graph::{LineNo, StopId};
/// use transit_router::stops::StopLineIndex;
///
/// let mut index = StopLineIndex::new();
/// index.insert(StopId(7), LineNo(3));
/// index.insert(StopId(7), LineNo(8));
///
/// let lines: Vec<_> = index.search(StopId(7)).unwrap().iter().copied().collect();
/// assert_eq!(lines, vec![LineNo(3), LineNo(8)]);
/// assert!(index.search(StopId(1)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopLineIndex {
    nodes: DynArray<BstNode>,
    root: Option<usize>,
}

impl StopLineIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `line` visits `stop`.
    pub fn insert(&mut self, stop: StopId, line: LineNo) {
        let mut cursor = self.root;
        let mut attach: Option<(usize, Ordering)> = None;

        while let Some(index) = cursor {
            let node = &mut self.nodes.as_mut_slice()[index];
            let ordering = stop.cmp(&node.stop);
            match ordering {
                Ordering::Equal => {
                    node.lines.push_end(line);
                    return;
                }
                Ordering::Less => cursor = node.left,
                Ordering::Greater => cursor = node.right,
            }
            attach = Some((index, ordering));
        }

        let new_index = self.nodes.len();
        self.nodes.push_last(BstNode::new(stop, line));

        let nodes = self.nodes.as_mut_slice();
        match attach {
            None => self.root = Some(new_index),
            Some((parent, Ordering::Less)) => nodes[parent].left = Some(new_index),
            Some((parent, _)) => nodes[parent].right = Some(new_index),
        }
    }

    /// Lines recorded for `stop`, or `None` if the stop was never inserted.
    pub fn search(&self, stop: StopId) -> Option<&LinkedList<LineNo>> {
        let nodes = self.nodes.as_slice();
        let mut cursor = self.root;

        while let Some(index) = cursor {
            let node = &nodes[index];
            cursor = match stop.cmp(&node.stop) {
                Ordering::Equal => return Some(&node.lines),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Stop ids in ascending order.
    pub fn in_order(&self) -> Vec<StopId> {
        let nodes = self.nodes.as_slice();
        let mut out = Vec::with_capacity(nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !stack.is_empty() {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                out.push(nodes[index].stop);
                cursor = nodes[index].right;
            }
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let nodes = self.nodes.as_slice();
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((index, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &nodes[index];
            stack.extend(node.left.map(|c| (c, level + 1)));
            stack.extend(node.right.map(|c| (c, level + 1)));
        }
        deepest
    }

    /// Number of distinct stops.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
