use offset_contours::core::math::{point_on_circle, Point};
use offset_contours::core::traits::Real;
use offset_contours::polygon::Ring;

pub fn star_ring<T>(vertex_count: usize) -> Ring<T>
where
    T: Real,
{
    let outer_radius = T::from(40.0).unwrap();
    let inner_radius = T::from(25.0).unwrap();
    let center = Point::zero();

    let mut result = Ring::new();

    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * T::tau() / T::from(vertex_count).unwrap();
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        result.points.push(point_on_circle(radius, center, angle));
    }

    result
}
