//! Error types returned by offset and union operations.

use thiserror::Error;

/// Errors reported by a [PolygonUnion](crate::boolean::PolygonUnion) backend.
#[derive(Debug, Error)]
pub enum UnionError {
    #[error("input polygon {polygon_index} contains a non-finite coordinate")]
    NonFiniteCoordinate { polygon_index: usize },

    #[error("input polygon {polygon_index} has fewer than three distinct points")]
    DegeneratePolygon { polygon_index: usize },

    #[error("union backend failed: {message}")]
    Backend {
        /// Index of the input polygon involved in the failure, if the backend knows it.
        polygon_index: Option<usize>,
        message: String,
    },
}

impl UnionError {
    /// Index of the input polygon that caused the failure, when known.
    ///
    /// The offset engine uses this to rebuild the named capsule and retry the union once.
    #[inline]
    pub fn polygon_index(&self) -> Option<usize> {
        match self {
            UnionError::NonFiniteCoordinate { polygon_index }
            | UnionError::DegeneratePolygon { polygon_index } => Some(*polygon_index),
            UnionError::Backend { polygon_index, .. } => *polygon_index,
        }
    }
}

/// Errors reported by offset contour operations.
#[derive(Debug, Error)]
pub enum OffsetError {
    /// Merging the per edge capsule polygons failed and the bounded retry did not recover it.
    #[error("capsule union failed (edge index {edge_index:?})")]
    UnionFailed {
        /// Index of the edge whose capsule was involved in the failure, if known.
        edge_index: Option<usize>,
        #[source]
        source: UnionError,
    },
}
