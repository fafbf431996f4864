//! 2D polygon offset contours with round corners.
//!
//! This crate computes offset contours of a simple closed polygon: outward
//! ([margin](polygon::OffsetPolygon::margin)), inward
//! ([padding](polygon::OffsetPolygon::padding)), or both sides at once
//! ([offset_both](polygon::OffsetPolygon::offset_both)). Each polygon edge is
//! swept into a capsule polygon (the offset edge plus half circle corner arcs
//! around its end points) and the capsules are merged through a polygon union
//! backend, so splits and merges of the contour topology fall out of the union
//! rather than out of segment trimming logic.
//!
//! The union backend is a capability trait ([boolean::PolygonUnion]) with a
//! default implementation built on the `geo` crate ([boolean::GeoUnion]).
//!
//! Returned rings follow a fixed convention: outer boundaries wind clockwise
//! (negative signed area), holes wind counter clockwise (positive signed
//! area), and every ring is explicitly closed (last point repeats the first).
//!
//! # Examples
//!
//! ```
//! use offset_contours::polygon::{OffsetOptions, OffsetPolygon};
//! use offset_contours::ring;
//!
//! let square = OffsetPolygon::new(
//!     ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
//!     OffsetOptions::default(),
//! );
//!
//! // single outward contour with rounded corners
//! let outward = square.margin(2.0).unwrap();
//! assert_eq!(outward.len(), 1);
//! assert!(outward[0].area() < 0.0);
//!
//! // inward contour shrinks to a smaller square, sharp corners
//! let inward = square.padding(3.0).unwrap();
//! assert_eq!(inward.len(), 1);
//! assert!(inward[0].area() > 0.0);
//!
//! // offsetting inward by more than half the width leaves nothing
//! assert!(square.padding(6.0).unwrap().is_empty());
//! ```

#[macro_use]
mod macros;

pub mod boolean;
pub mod core;
pub mod error;
pub mod polygon;

pub use static_aabb2d_index::AABB;

pub use error::{OffsetError, UnionError};
