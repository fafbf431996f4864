use super::Ring;
use crate::core::traits::Real;

/// Apply the winding rule for the given role to a ring in place.
///
/// Outer rings (`is_hole` false) are reversed when their [Ring::area] is positive so they end up
/// clockwise, hole rings are reversed when their area is negative so they end up counter
/// clockwise. Zero area rings are left untouched.
pub fn orient_ring<T>(ring: &mut Ring<T>, is_hole: bool)
where
    T: Real,
{
    let area = ring.area();
    if is_hole {
        if area < T::zero() {
            ring.reverse();
        }
    } else if area > T::zero() {
        ring.reverse();
    }
}

/// Tree of polygon rings grouped by containment role.
///
/// A [RingTree::Group] holds a boundary ring (or subtree) as its first child followed by that
/// boundary's holes, letting nested polygon structures (boundary, holes, islands inside holes)
/// be normalized in one walk. A bare [RingTree::Ring] stands for a single outer boundary.
#[derive(Debug, Clone)]
pub enum RingTree<T = f64> {
    /// Leaf node holding a single ring.
    Ring(Ring<T>),
    /// Group node where the first child takes the outer role and the remaining children take the
    /// hole role.
    Group(Vec<RingTree<T>>),
}

impl<T> RingTree<T>
where
    T: Real,
{
    /// Normalize winding and closure across the whole tree in place.
    ///
    /// Every leaf ring gets the winding rule for its role (see [orient_ring]): outer rings become
    /// clockwise, hole rings become counter clockwise. Role is determined by position, the root
    /// and the first child of every group are outer, all other group children are holes. A leaf
    /// ring at the root is additionally explicitly closed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use offset_contours::polygon::{RingOrientation, RingTree};
    /// # use offset_contours::ring;
    /// let mut tree = RingTree::from(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// tree.orient();
    /// let RingTree::Ring(r) = tree else { unreachable!() };
    /// // counter clockwise input reversed to the clockwise outer convention and closed
    /// assert_eq!(r.orientation(), RingOrientation::Clockwise);
    /// assert!(r.is_closed());
    /// ```
    pub fn orient(&mut self) {
        self.orient_node(false, 0);
    }

    fn orient_node(&mut self, is_hole: bool, depth: usize) {
        match self {
            RingTree::Ring(ring) => {
                orient_ring(ring, is_hole);
                if depth == 0 {
                    ring.close();
                }
            }
            RingTree::Group(children) => {
                for (i, child) in children.iter_mut().enumerate() {
                    child.orient_node(i > 0, depth + 1);
                }
            }
        }
    }
}

impl<T> From<Ring<T>> for RingTree<T>
where
    T: Real,
{
    #[inline]
    fn from(ring: Ring<T>) -> Self {
        RingTree::Ring(ring)
    }
}

impl<T> From<Vec<RingTree<T>>> for RingTree<T>
where
    T: Real,
{
    #[inline]
    fn from(children: Vec<RingTree<T>>) -> Self {
        RingTree::Group(children)
    }
}
