pub mod arc_2d;
pub mod bezier_2d;
pub mod circle_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod predicates_2d;
pub mod rect_2d;
pub mod roots;

pub use intersect_2d::Intersection;
pub use polygon_2d::Inclusion;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every "same point", "parallel", "collinear" and "on boundary" decision in
/// the kernel goes through this one value, either directly or through
/// [`points_coincide`], [`is_near_zero`] and [`in_unit_interval`].
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` when both coordinate deltas are within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() <= TOLERANCE && (a.y - b.y).abs() <= TOLERANCE
}

/// Returns `true` when `value` is within [`TOLERANCE`] of zero.
#[must_use]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() <= TOLERANCE
}

/// Returns `true` when the parameter `t` lies in `[0, 1]` up to [`TOLERANCE`].
#[must_use]
pub fn in_unit_interval(t: f64) -> bool {
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&t)
}

/// 2D cross product (determinant) `u.x * v.y - u.y * v.x`.
#[must_use]
pub fn cross(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}
