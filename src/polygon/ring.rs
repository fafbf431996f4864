use crate::core::math::Point;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Represents the orientation of a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingOrientation {
    /// Ring is not explicitly closed.
    Open,
    /// Ring is closed and directionally clockwise (negative signed area).
    Clockwise,
    /// Ring is closed and directionally counter clockwise (positive signed area).
    CounterClockwise,
}

/// Contiguous sequence of 2D points forming a polygon ring.
///
/// A ring is explicitly closed when its last point repeats its first point, compared with exact
/// coordinate equality. Offset results follow a fixed winding convention: outer boundaries are
/// clockwise (negative [Ring::area]) and holes are counter clockwise (positive [Ring::area]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Ring<T = f64> {
    /// Contiguous sequence of points.
    pub points: Vec<Point<T>>,
}

impl<T> Default for Ring<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Create a new empty [Ring].
    #[inline]
    pub fn new() -> Self {
        Ring { points: Vec::new() }
    }

    /// Create a new empty [Ring] with `capacity` points of capacity reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point constructed from `x` and `y` to the end of the ring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Point::new(x, y));
    }

    /// Count of points excluding the closing repeat point if the ring is closed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::ring;
    /// let mut r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)];
    /// assert_eq!(r.vertex_count(), 3);
    /// r.close();
    /// // closing point is not counted
    /// assert_eq!(r.vertex_count(), 3);
    /// ```
    #[inline]
    pub fn vertex_count(&self) -> usize {
        let n = self.points.len();
        if n > 1 && self.is_closed() {
            n - 1
        } else {
            n
        }
    }

    /// Returns `true` if the last point exactly repeats the first point.
    ///
    /// A single point ring is considered closed (its first point is its last point). An empty
    /// ring is not closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.x == last.x && first.y == last.y,
            _ => false,
        }
    }

    /// Explicitly close the ring by appending a copy of the first point.
    ///
    /// Does nothing if the ring is empty or already closed (never appends a second repeat).
    #[inline]
    pub fn close(&mut self) {
        if !self.points.is_empty() && !self.is_closed() {
            let first = self.points[0];
            self.points.push(first);
        }
    }

    /// Reverse the point order in place (flips the winding of a closed ring).
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Compute the signed area of the ring.
    ///
    /// Uses the shoelace formula treating the ring as implicitly closed, so explicitly closed and
    /// open representations of the same loop return the same value. The area is positive for
    /// counter clockwise windings and negative for clockwise windings.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::ring;
    /// # use offset_contours::core::traits::*;
    /// let mut r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)];
    /// assert!(r.area().fuzzy_eq(12.0));
    /// r.reverse();
    /// assert!(r.area().fuzzy_eq(-12.0));
    /// ```
    pub fn area(&self) -> T {
        let n = self.points.len();
        if n < 3 {
            return T::zero();
        }

        let mut double_total_area = T::zero();
        for i in 0..n {
            let p0 = self.points[i];
            let p1 = self.points[(i + 1) % n];
            double_total_area = double_total_area + p0.perp_dot(p1);
        }

        double_total_area / T::two()
    }

    /// Returns the total path length along the ring's points.
    ///
    /// No implicit closing segment is added, an explicitly closed ring includes its closing
    /// segment and an open ring measures only the open path.
    pub fn path_length(&self) -> T {
        self.points
            .windows(2)
            .fold(T::zero(), |acc, w| acc + (w[1] - w[0]).length())
    }

    /// Compute the axis aligned extents of the ring.
    ///
    /// Returns `None` if the ring has no points.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Returns the orientation of the ring.
    ///
    /// Determined from the sign of [Ring::area] for explicitly closed rings, open rings return
    /// [RingOrientation::Open].
    pub fn orientation(&self) -> RingOrientation {
        if !self.is_closed() {
            return RingOrientation::Open;
        }

        if self.area() < T::zero() {
            RingOrientation::Clockwise
        } else {
            RingOrientation::CounterClockwise
        }
    }

    /// Compute the winding number of `point` relative to the ring.
    ///
    /// Returns 0 if the point is outside the ring, non-zero if inside (positive for counter
    /// clockwise windings, negative for clockwise windings). The ring is treated as implicitly
    /// closed. Result is not defined for points exactly on the ring boundary.
    pub fn winding_number(&self, point: Point<T>) -> i32 {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }

        let mut winding = 0;
        for i in 0..n {
            let p0 = self.points[i];
            let p1 = self.points[(i + 1) % n];
            if p0.y <= point.y {
                if p1.y > point.y && (p1 - p0).perp_dot(point - p0) > T::zero() {
                    winding += 1;
                }
            } else if p1.y <= point.y && (p1 - p0).perp_dot(point - p0) < T::zero() {
                winding -= 1;
            }
        }

        winding
    }

    /// Remove all adjacent repeat position points from the ring using exact comparison.
    ///
    /// Each point is compared with its predecessor, keeping the first point of every run, and a
    /// closing repeat of the first point is removed as well (the result is always open). Returns
    /// `None` to avoid allocation and copy in the case that no points are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::ring;
    /// let r = ring![(0.0, 0.0), (0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 0.0)];
    /// let cleaned = r.remove_repeat_points().expect("repeat points were removed");
    /// // adjacent duplicate dropped and the closing repeat dropped
    /// assert_eq!(cleaned.points.len(), 3);
    /// ```
    pub fn remove_repeat_points(&self) -> Option<Ring<T>> {
        let mut result: Option<Ring<T>> = None;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            let prev = self.points[i - 1];
            let is_repeat = p.x == prev.x && p.y == prev.y;
            if is_repeat {
                // drop point by copying all points kept so far if not already copying
                result.get_or_insert_with(|| Ring {
                    points: self.points[..i].to_vec(),
                });
            } else if let Some(ref mut r) = result {
                r.points.push(*p);
            }
        }

        // once interior repeats are gone a closing repeat reduces to the last point matching the
        // first, drop it so the result never carries the closure duplicate
        let has_closing_repeat = match &result {
            Some(r) => r.points.len() > 1 && r.is_closed(),
            None => self.points.len() > 1 && self.is_closed(),
        };
        if has_closing_repeat {
            let r = result.get_or_insert_with(|| self.clone());
            r.points.pop();
        }

        result
    }

    /// Fuzzy equal comparison with another ring using `fuzzy_epsilon` given.
    ///
    /// Rings compare equal when they have the same point count and each point pair fuzzy
    /// compares equal in order.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| a.fuzzy_eq_eps(*b, fuzzy_epsilon))
    }

    /// Fuzzy equal comparison with another ring using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<T> FromIterator<Point<T>> for Ring<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Ring {
            points: iter.into_iter().collect(),
        }
    }
}
