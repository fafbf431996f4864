use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point (also used as a 2D vector where the distinction does not matter).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create the origin point (x = 0, y = 0).
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale the point by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        point2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector from the origin to this point.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize to a unit vector (length = 1).
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Create perpendicular vector (rotated 90 degrees counter clockwise).
    pub fn perp(&self) -> Self {
        point2(-self.y, self.x)
    }

    /// Create perpendicular unit vector (length = 1).
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn point2<T>(x: T, y: T) -> Point<T>
where
    T: Real,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Point<T> {
            type Output = Point<T>;
            fn $op_func(self) -> Self::Output {
                Point::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Point<T> {
            type Output = Point<T>;
            fn $op_func(self) -> Self::Output {
                Point::new($op self.x, $op self.y)
            }
        }
    };
}

ImplUnaryOp!(Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = point2(4.0, 5.0);
        let v2 = point2(1.0, 2.0);
        test_binary_op!(v1, v2, +, point2(5.0, 7.0));
        test_binary_op!(v1, v2, -, point2(3.0, 3.0));
        assert!((-v1).fuzzy_eq(point2(-4.0, -5.0)));
    }

    #[test]
    fn perp_follows_counter_clockwise_rotation() {
        let v = point2(3.0, 0.0);
        assert!(v.perp().fuzzy_eq(point2(0.0, 3.0)));
        assert!(v.unit_perp().fuzzy_eq(point2(0.0, 1.0)));
        assert_fuzzy_eq!(v.perp_dot(point2(0.0, 1.0)), 3.0);
    }
}
