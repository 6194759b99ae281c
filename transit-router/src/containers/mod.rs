//! Sequence containers used by the graph engine.
//!
//! `DynArray` is a growable, index-checked array with an explicit doubling
//! policy. `LinkedList` is an append-only singly linked list whose nodes live
//! in an arena and are addressed by index, so the list owns every node and
//! releases them all when dropped.

mod dyn_array;
mod error;
mod linked_list;

pub use dyn_array::DynArray;
pub use error::ContainerError;
pub use linked_list::LinkedList;
