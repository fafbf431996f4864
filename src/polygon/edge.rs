use crate::core::math::Point;
use crate::core::traits::Real;

/// Directed polygon edge from `curr` to `next` with its unit normal cached at construction.
///
/// The normal is the edge direction rotated 90 degrees counter clockwise. For the clockwise
/// outer winding used by the offset engine that direction points away from the polygon interior,
/// so translating an edge along its normal moves it outward.
#[derive(Debug, Copy, Clone)]
pub struct Edge<T = f64> {
    curr: Point<T>,
    next: Point<T>,
    normal: Point<T>,
}

impl<T> Edge<T>
where
    T: Real,
{
    /// Create a new edge from `curr` to `next`.
    ///
    /// The points must not be coincident, a zero length edge has no defined normal.
    pub fn new(curr: Point<T>, next: Point<T>) -> Self {
        let dir = next - curr;
        // exact zero only, upstream dedup keeps exactly distinct points however close
        debug_assert!(
            dir.length_squared() > T::zero(),
            "zero length edge has no defined normal"
        );
        Edge {
            curr,
            next,
            normal: dir.unit_perp(),
        }
    }

    /// Start point of the edge.
    #[inline]
    pub fn curr(&self) -> Point<T> {
        self.curr
    }

    /// End point of the edge.
    #[inline]
    pub fn next(&self) -> Point<T> {
        self.next
    }

    /// Unit normal of the edge (direction rotated 90 degrees counter clockwise).
    #[inline]
    pub fn normal(&self) -> Point<T> {
        self.normal
    }

    /// Returns the edge translated along its normal by `distance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::polygon::Edge;
    /// # use offset_contours::core::math::Point;
    /// let e = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    /// let off = e.offset(2.0);
    /// assert!(off.curr().fuzzy_eq(Point::new(0.0, 2.0)));
    /// assert!(off.next().fuzzy_eq(Point::new(10.0, 2.0)));
    /// ```
    pub fn offset(&self, distance: T) -> Edge<T> {
        let shift = self.normal.scale(distance);
        Edge {
            curr: self.curr + shift,
            next: self.next + shift,
            normal: self.normal,
        }
    }

    /// Returns the edge translated against its normal by `distance` with its end points swapped.
    ///
    /// The swap keeps corner arcs generated at a shared polygon vertex connecting start to end
    /// consistently when walking the offset band boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::polygon::Edge;
    /// # use offset_contours::core::math::Point;
    /// let e = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    /// let inv = e.inverse_offset(2.0);
    /// assert!(inv.curr().fuzzy_eq(Point::new(10.0, -2.0)));
    /// assert!(inv.next().fuzzy_eq(Point::new(0.0, -2.0)));
    /// ```
    pub fn inverse_offset(&self, distance: T) -> Edge<T> {
        let shift = self.normal.scale(distance);
        Edge {
            curr: self.next - shift,
            next: self.curr - shift,
            normal: -self.normal,
        }
    }
}
