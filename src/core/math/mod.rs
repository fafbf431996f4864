//! Core/common math functions for working with angles and 2D points.
mod base_math;
mod point;

pub use base_math::*;
pub use point::{point2, Point};
