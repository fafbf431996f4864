//! This module has all the functions for building per edge capsule polygons and merging them
//! into finished offset contour rings.
//!
//! The steps of the offset algorithm are as follows:
//!
//! 1. Build a capsule polygon for each polygon edge, the edge translated to both sides of the
//!    polygon by the offset distance plus half circle arcs around the edge end points (the
//!    stadium shape swept by a disc moving along the edge).
//! 2. Union all the capsules through a [PolygonUnion] backend. The outer boundaries of the union
//!    trace the outward offset and the holes of the union trace the inward offset, with contour
//!    splits and merges handled entirely by the union.
//! 3. If the union fails on a capsule it names, rebuild that capsule from slightly nudged edge
//!    end points and retry (at most once per edge), otherwise the failure is fatal.
//! 4. Select boundaries and/or holes for the requested side and normalize winding and closure of
//!    every returned ring.

use crate::boolean::{PolygonUnion, UnionResult};
use crate::core::math::{angle, normalize_radians, point_on_circle, point2, Point};
use crate::core::traits::Real;
use crate::error::OffsetError;
use crate::polygon::{orient_ring, Edge, Ring};

/// Which side(s) of the source polygon an offset pass returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetSide {
    /// Outward offset rings (outer boundaries of the capsule union).
    Outer,
    /// Inward offset rings (holes of the capsule union).
    Inner,
    /// Outward rings followed by inward rings.
    Both,
}

/// Fixed per coordinate nudge applied to an edge's end points when rebuilding its capsule after
/// a union failure. Kept well below any meaningful coordinate resolution, it only exists to break
/// exact degeneracies (coincident or tangent capsule boundaries) the union backend cannot digest.
const RETRY_NUDGE: f64 = 2.5e-3;

/// Returns the arc segment count actually used for the `arc_segments` requested.
///
/// Odd counts are decremented to even so that a sample lands exactly on the arc midpoint, and the
/// result is floored at 2.
#[inline]
pub fn effective_arc_segments(arc_segments: usize) -> usize {
    let segments = if arc_segments % 2 == 1 {
        arc_segments - 1
    } else {
        arc_segments
    };

    segments.max(2)
}

/// Sample the clockwise arc around `center` from `pt_start` to `pt_end` at `radius`.
///
/// Returns `pt_start`, the intermediate samples in clockwise order, then `pt_end`, for a total of
/// [effective_arc_segments]` + 1` points. The sweep always runs clockwise from the start angle
/// down to the end angle, the side symmetric capsules built from it never need a counter
/// clockwise sweep.
///
/// # Examples
///
/// ```
/// # use offset_contours::polygon::internal::ring_offset::arc_points;
/// # use offset_contours::core::math::Point;
/// let pts = arc_points(
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(0.0, -2.0),
///     2.0,
///     2,
/// );
/// // quarter circle swept clockwise with one midpoint sample
/// assert_eq!(pts.len(), 3);
/// let m = std::f64::consts::FRAC_1_SQRT_2 * 2.0;
/// assert!(pts[1].fuzzy_eq(Point::new(m, -m)));
/// ```
pub fn arc_points<T>(
    center: Point<T>,
    pt_start: Point<T>,
    pt_end: Point<T>,
    radius: T,
    arc_segments: usize,
) -> Vec<Point<T>>
where
    T: Real,
{
    let angle_start = normalize_radians(angle(center, pt_start));
    let angle_end = normalize_radians(angle(center, pt_end));
    // clockwise sweep magnitude going from the start angle down to the end angle
    let sweep = normalize_radians(angle_start - angle_end);

    let segments = effective_arc_segments(arc_segments);
    let step = sweep / T::from(segments).unwrap();

    let mut points = Vec::with_capacity(segments + 1);
    points.push(pt_start);
    for i in 1..segments {
        let a = angle_start - step * T::from(i).unwrap();
        points.push(point_on_circle(radius, center, a));
    }
    points.push(pt_end);

    points
}

/// Build the closed capsule polygon for `edge` at the offset `distance` given.
///
/// The capsule is the edge offset to both sides joined by half circle arcs around the edge end
/// points. The clockwise arc sweep makes the capsule itself wind clockwise.
pub fn edge_capsule<T>(edge: &Edge<T>, distance: T, arc_segments: usize) -> Ring<T>
where
    T: Real,
{
    let offset = edge.offset(distance);
    let inverse = edge.inverse_offset(distance);

    // half circle around the edge start point then half circle around the edge end point
    let mut points = arc_points(edge.curr(), inverse.next(), offset.curr(), distance, arc_segments);
    points.extend(arc_points(
        edge.next(),
        offset.next(),
        inverse.curr(),
        distance,
        arc_segments,
    ));

    let mut ring = Ring { points };
    ring.close();
    ring
}

/// Rebuild the capsule for `edge` from deterministically nudged end points.
///
/// The end points move by [RETRY_NUDGE] per coordinate with opposing signs so a capsule that sat
/// exactly on top of a twin cannot land on it again.
fn nudged_capsule<T>(edge: &Edge<T>, distance: T, arc_segments: usize) -> Ring<T>
where
    T: Real,
{
    let delta = T::from(RETRY_NUDGE).unwrap();
    let shifted = Edge::new(
        point2(edge.curr().x + delta, edge.curr().y - delta),
        point2(edge.next().x - delta, edge.next().y + delta),
    );

    edge_capsule(&shifted, distance, arc_segments)
}

/// Offset the polygon described by `edges` by `distance` and return the rings for `side`.
///
/// `distance` must be positive, the side selection replaces signed distances (the capsule band
/// is symmetric around the source polygon). Returned rings are winding normalized (outer rings
/// clockwise, holes counter clockwise) and explicitly closed.
///
/// A recoverable union failure naming a capsule gets one retry with that capsule rebuilt from
/// nudged end points, any further failure is returned as [OffsetError::UnionFailed].
pub fn offset_rings<T, U>(
    edges: &[Edge<T>],
    distance: T,
    side: OffsetSide,
    arc_segments: usize,
    backend: &U,
) -> Result<Vec<Ring<T>>, OffsetError>
where
    T: Real,
    U: PolygonUnion<T> + ?Sized,
{
    let mut capsules: Vec<Ring<T>> = edges
        .iter()
        .map(|edge| edge_capsule(edge, distance, arc_segments))
        .collect();

    let mut retried = vec![false; capsules.len()];
    let union_result = loop {
        match backend.union_all(&capsules) {
            Ok(result) => break result,
            Err(err) => match err.polygon_index() {
                Some(i) if i < capsules.len() && !retried[i] => {
                    retried[i] = true;
                    capsules[i] = nudged_capsule(&edges[i], distance, arc_segments);
                }
                edge_index => {
                    return Err(OffsetError::UnionFailed {
                        edge_index,
                        source: err,
                    });
                }
            },
        }
    };

    let UnionResult {
        mut boundaries,
        mut holes,
    } = union_result;

    for ring in boundaries.iter_mut() {
        orient_ring(ring, false);
        ring.close();
    }
    for ring in holes.iter_mut() {
        orient_ring(ring, true);
        ring.close();
    }

    let rings = match side {
        OffsetSide::Outer => boundaries,
        OffsetSide::Inner => holes,
        OffsetSide::Both => {
            boundaries.append(&mut holes);
            boundaries
        }
    };

    debug_assert!(
        rings.iter().all(|r| r
            .remove_repeat_points()
            .map_or(true, |c| c.points.len() == r.vertex_count())),
        "bug: result should never have repeat points besides the closing one"
    );

    Ok(rings)
}
