//! In-memory document tree.
//!
//! The viewer treats the page as a live tree of elements carrying ids,
//! classes, attributes, and text, and every behavior component reads and
//! mutates that tree directly. The tree is the single source of truth:
//! nothing caches a second copy of visibility or selection state.

pub mod document;
pub mod node;

pub use document::{Document, NodeId};
pub use node::{Element, Node};
