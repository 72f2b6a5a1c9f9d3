use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A circle in the plane.
///
/// A zero radius is a legal "empty circle" which intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle. Negative radii are clamped to zero.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Creates a new circle, rejecting negative or non-finite values.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if the center or radius is NaN or infinite
    /// - `GeometryError::NegativeExtent` if the radius is negative
    pub fn try_new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
            return Err(GeometryError::NonFinite("circle").into());
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeExtent {
                what: "circle radius",
                value: radius,
            }
            .into());
        }
        Ok(Self::new(center, radius))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` for a circle whose radius is within tolerance of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius <= TOLERANCE
    }

    /// Evaluates the point at `angle` radians from the positive x axis.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// A circular arc: the part of `circle` swept from `start_angle` by `sweep`.
///
/// Positive sweep runs counter-clockwise, negative sweep clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    circle: Circle,
    start_angle: f64,
    sweep: f64,
}

impl CircularArc {
    /// Creates a new arc.
    #[must_use]
    pub fn new(circle: Circle, start_angle: f64, sweep: f64) -> Self {
        Self {
            circle,
            start_angle,
            sweep,
        }
    }

    /// Returns the supporting circle.
    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Returns the start angle.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep angle.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the end angle (`start_angle + sweep`).
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.circle.point_at_angle(self.start_angle + self.sweep * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn negative_radius_clamps_to_empty() {
        let c = Circle::new(Point2::origin(), -3.0);
        assert!(c.is_empty());
        assert!(Circle::try_new(Point2::origin(), -3.0).is_err());
    }

    #[test]
    fn arc_endpoints() {
        let arc = CircularArc::new(Circle::new(Point2::new(1.0, 0.0), 2.0), 0.0, PI);
        assert_abs_diff_eq!(arc.point_at(0.0), Point2::new(3.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.point_at(0.5), Point2::new(1.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.point_at(1.0), Point2::new(-1.0, 0.0), epsilon = 1e-12);
    }
}
