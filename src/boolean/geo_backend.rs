use super::{PolygonUnion, UnionResult};
use crate::core::math::Point;
use crate::core::traits::Real;
use crate::error::UnionError;
use crate::polygon::Ring;

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use num_traits::NumCast;

/// Default [PolygonUnion] backend built on the `geo` crate's boolean operations.
///
/// Coordinates are converted through `f64` for the clipper and back, so any scalar satisfying
/// [Real] works. Inputs are validated up front (finite coordinates, at least three distinct
/// points) and violations are reported as typed errors carrying the polygon index instead of
/// being fed to the clipper.
#[derive(Debug, Copy, Clone, Default)]
pub struct GeoUnion;

impl<T> PolygonUnion<T> for GeoUnion
where
    T: Real,
{
    fn union_all(&self, polygons: &[Ring<T>]) -> Result<UnionResult<T>, UnionError> {
        let mut merged: Option<MultiPolygon<f64>> = None;
        for (i, ring) in polygons.iter().enumerate() {
            let polygon = to_geo_polygon(ring, i)?;
            merged = Some(match merged {
                Some(acc) => acc.union(&MultiPolygon::new(vec![polygon])),
                None => MultiPolygon::new(vec![polygon]),
            });
        }

        let Some(merged) = merged else {
            return Ok(UnionResult::empty());
        };

        let mut boundaries = Vec::new();
        let mut holes = Vec::new();
        for polygon in merged {
            let (exterior, interiors) = polygon.into_inner();
            boundaries.push(ring_from_line_string(&exterior));
            holes.extend(interiors.iter().map(ring_from_line_string));
        }

        Ok(UnionResult::new(boundaries, holes))
    }
}

fn to_geo_polygon<T>(ring: &Ring<T>, polygon_index: usize) -> Result<Polygon<f64>, UnionError>
where
    T: Real,
{
    let mut coords = Vec::with_capacity(ring.points.len());
    for p in ring.points.iter() {
        let x = <f64 as NumCast>::from(p.x)
            .ok_or(UnionError::NonFiniteCoordinate { polygon_index })?;
        let y = <f64 as NumCast>::from(p.y)
            .ok_or(UnionError::NonFiniteCoordinate { polygon_index })?;
        if !x.is_finite() || !y.is_finite() {
            return Err(UnionError::NonFiniteCoordinate { polygon_index });
        }

        coords.push(Coord { x, y });
    }

    // count coordinates differing from their successor (wrapping around) so rings made of
    // repeated points are caught along with rings that are simply too short
    let n = coords.len();
    let distinct = coords
        .iter()
        .enumerate()
        .filter(|(i, c)| {
            let next = &coords[(i + 1) % n];
            c.x != next.x || c.y != next.y
        })
        .count();
    if distinct < 3 {
        return Err(UnionError::DegeneratePolygon { polygon_index });
    }

    // rewind clockwise inputs to the clipper's counter clockwise exterior convention so the
    // winding of the inputs cannot change the merged area
    let mut doubled_area = 0.0;
    for (i, c) in coords.iter().enumerate() {
        let next = &coords[(i + 1) % n];
        doubled_area += c.x * next.y - next.x * c.y;
    }
    if doubled_area < 0.0 {
        coords.reverse();
    }

    Ok(Polygon::new(LineString::new(coords), Vec::new()))
}

fn ring_from_line_string<T>(line_string: &LineString<f64>) -> Ring<T>
where
    T: Real,
{
    line_string
        .0
        .iter()
        .map(|c| Point::new(T::from(c.x).unwrap(), T::from(c.y).unwrap()))
        .collect()
}
