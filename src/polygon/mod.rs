//! This module has all the types and functions associated with polygon rings, edges, and the
//! offset contour engine.
pub mod internal;
mod edge;
mod offset;
mod ring;
mod ring_tree;

pub use edge::*;
pub use offset::*;
pub use ring::*;
pub use ring_tree::*;
