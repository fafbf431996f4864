//! Polygon union capability used to merge the per edge capsule polygons into offset contours.
mod geo_backend;

pub use geo_backend::GeoUnion;

use crate::core::traits::Real;
use crate::error::UnionError;
use crate::polygon::Ring;

/// Result of unioning a set of polygons, split into outer boundaries and holes.
///
/// No winding or closure normalization is applied here, rings come back the way the backend
/// produced them and callers normalize for their own conventions.
#[derive(Debug, Clone)]
pub struct UnionResult<T = f64> {
    /// Outer boundary rings of the merged area.
    pub boundaries: Vec<Ring<T>>,
    /// Hole rings fully enclosed by the merged area.
    pub holes: Vec<Ring<T>>,
}

impl<T> UnionResult<T> {
    #[inline]
    pub fn new(boundaries: Vec<Ring<T>>, holes: Vec<Ring<T>>) -> Self {
        Self { boundaries, holes }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Capability trait for N-ary polygon union.
///
/// Implementations accept simple closed rings (winding direction of the inputs must not matter)
/// and return the merged area as boundaries and holes. Returned rings must carry no repeat
/// points besides an optional closing vertex, the offset engine forwards them as-is after
/// winding normalization. A failed union should name the offending input polygon through
/// [UnionError::polygon_index] whenever it can, the offset engine uses the index to rebuild
/// that one capsule and retry.
pub trait PolygonUnion<T>
where
    T: Real,
{
    /// Union all `polygons` into one area.
    ///
    /// An empty input yields an empty result.
    fn union_all(&self, polygons: &[Ring<T>]) -> Result<UnionResult<T>, UnionError>;
}
