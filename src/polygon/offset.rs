use super::internal::ring_offset::{self, OffsetSide};
use super::{orient_ring, Edge, Ring};
use crate::boolean::{GeoUnion, PolygonUnion};
use crate::core::traits::Real;
use crate::error::OffsetError;

/// Struct to hold option parameters when generating offset contours.
#[derive(Debug, Clone)]
pub struct OffsetOptions {
    /// Requested segment count for each half circle corner arc.
    ///
    /// Odd counts are decremented to even so a sample lands exactly on the arc midpoint, and
    /// counts below 2 are raised to 2. Higher counts approximate circular corners more closely
    /// at the cost of more output points.
    pub arc_segments: usize,
}

impl OffsetOptions {
    #[inline]
    pub fn new() -> Self {
        Self { arc_segments: 5 }
    }
}

impl Default for OffsetOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Offset contour engine for a single simple closed polygon.
///
/// Construction normalizes the input ring and freezes it: adjacent repeat points are filtered
/// (exact comparison, wrapping around), the winding is normalized to the clockwise outer
/// convention, the ring is explicitly closed, and one [Edge] is derived per consecutive point
/// pair. Offsetting a different polygon means constructing a new engine.
///
/// All offset operations return winding and closure normalized rings: outer boundaries wind
/// clockwise (negative [Ring::area]), holes wind counter clockwise (positive area), and the last
/// point of every ring repeats its first. Operations short circuit to the normalized input ring
/// for a zero distance and for degenerate input (fewer than two distinct points).
///
/// # Examples
///
/// ```
/// # use offset_contours::polygon::{OffsetOptions, OffsetPolygon, RingOrientation};
/// # use offset_contours::core::traits::FuzzyEq;
/// # use offset_contours::ring;
/// let engine = OffsetPolygon::new(
///     ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
///     OffsetOptions::default(),
/// );
/// // input is reversed to clockwise and closed
/// assert_eq!(engine.verts().orientation(), RingOrientation::Clockwise);
/// assert_eq!(engine.edges().len(), 4);
///
/// let inward = engine.padding(3.0).unwrap();
/// assert_eq!(inward.len(), 1);
/// // eroding the 10 x 10 square by 3 leaves a 4 x 4 square
/// assert!(inward[0].area().fuzzy_eq(16.0));
/// ```
#[derive(Debug, Clone)]
pub struct OffsetPolygon<T = f64> {
    verts: Ring<T>,
    edges: Vec<Edge<T>>,
    options: OffsetOptions,
}

impl<T> OffsetPolygon<T>
where
    T: Real,
{
    /// Create a new engine from the input `ring` and `options` given.
    ///
    /// The ring may be open or explicitly closed and may wind either way, construction
    /// normalizes it.
    pub fn new(ring: Ring<T>, options: OffsetOptions) -> Self {
        let mut verts = match ring.remove_repeat_points() {
            Some(cleaned) => cleaned,
            None => ring,
        };
        orient_ring(&mut verts, false);
        verts.close();

        // consecutive point pairs of the closed ring yield exactly the wrapping edge set
        let edges = if verts.vertex_count() >= 2 {
            verts
                .points
                .windows(2)
                .map(|w| Edge::new(w[0], w[1]))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            verts,
            edges,
            options,
        }
    }

    /// The normalized closed input ring.
    #[inline]
    pub fn verts(&self) -> &Ring<T> {
        &self.verts
    }

    /// The edges derived from the normalized input ring.
    #[inline]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    #[inline]
    pub fn options(&self) -> &OffsetOptions {
        &self.options
    }

    /// Offset outward by `|distance|` using the default [GeoUnion] backend.
    ///
    /// Returns the outer boundaries of the offset band, clockwise wound and explicitly closed.
    #[inline]
    pub fn margin(&self, distance: T) -> Result<Vec<Ring<T>>, OffsetError> {
        self.margin_with(distance, &GeoUnion)
    }

    /// Same as [OffsetPolygon::margin] using the union `backend` given.
    #[inline]
    pub fn margin_with<U>(&self, distance: T, backend: &U) -> Result<Vec<Ring<T>>, OffsetError>
    where
        U: PolygonUnion<T> + ?Sized,
    {
        self.offset_side(distance, OffsetSide::Outer, backend)
    }

    /// Offset inward by `|distance|` using the default [GeoUnion] backend.
    ///
    /// Returns the holes of the offset band, counter clockwise wound and explicitly closed. The
    /// result is empty when the polygon erodes away completely.
    #[inline]
    pub fn padding(&self, distance: T) -> Result<Vec<Ring<T>>, OffsetError> {
        self.padding_with(distance, &GeoUnion)
    }

    /// Same as [OffsetPolygon::padding] using the union `backend` given.
    #[inline]
    pub fn padding_with<U>(&self, distance: T, backend: &U) -> Result<Vec<Ring<T>>, OffsetError>
    where
        U: PolygonUnion<T> + ?Sized,
    {
        self.offset_side(distance, OffsetSide::Inner, backend)
    }

    /// Signed offset dispatch using the default [GeoUnion] backend.
    ///
    /// Zero returns the normalized input ring, positive distances offset outward and all other
    /// distances offset inward by the magnitude. A NaN distance therefore takes the inward path
    /// and surfaces as a [OffsetError::UnionFailed] instead of silently returning the input.
    #[inline]
    pub fn offset(&self, distance: T) -> Result<Vec<Ring<T>>, OffsetError> {
        self.offset_with(distance, &GeoUnion)
    }

    /// Same as [OffsetPolygon::offset] using the union `backend` given.
    pub fn offset_with<U>(&self, distance: T, backend: &U) -> Result<Vec<Ring<T>>, OffsetError>
    where
        U: PolygonUnion<T> + ?Sized,
    {
        if distance == T::zero() {
            return Ok(vec![self.verts.clone()]);
        }

        if distance > T::zero() {
            self.margin_with(distance, backend)
        } else {
            self.padding_with(-distance, backend)
        }
    }

    /// Offset both sides by `|distance|` in one union pass using the default [GeoUnion] backend.
    ///
    /// Returns the outward rings followed by the inward rings as one flat list. The role of each
    /// ring is recoverable from its winding, outward boundaries are clockwise (negative area)
    /// and inward rings are counter clockwise (positive area).
    #[inline]
    pub fn offset_both(&self, distance: T) -> Result<Vec<Ring<T>>, OffsetError> {
        self.offset_both_with(distance, &GeoUnion)
    }

    /// Same as [OffsetPolygon::offset_both] using the union `backend` given.
    #[inline]
    pub fn offset_both_with<U>(&self, distance: T, backend: &U) -> Result<Vec<Ring<T>>, OffsetError>
    where
        U: PolygonUnion<T> + ?Sized,
    {
        self.offset_side(distance, OffsetSide::Both, backend)
    }

    fn offset_side<U>(
        &self,
        distance: T,
        side: OffsetSide,
        backend: &U,
    ) -> Result<Vec<Ring<T>>, OffsetError>
    where
        U: PolygonUnion<T> + ?Sized,
    {
        let distance = distance.abs();
        if distance == T::zero() || self.edges.is_empty() {
            return Ok(vec![self.verts.clone()]);
        }

        ring_offset::offset_rings(
            &self.edges,
            distance,
            side,
            self.options.arc_segments,
            backend,
        )
    }
}
