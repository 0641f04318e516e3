//! An implementation of an owned, incrementally updatable K-D Tree.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod select;
mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub(crate) use node::Node;
pub use r#trait::KDTreeIndex;
pub use select::partition;
pub use traversal::{Iter, NodeRef};
