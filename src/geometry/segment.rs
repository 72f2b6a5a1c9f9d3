use crate::error::{GeometryError, Result};
use crate::math::{points_coincide, Point2, Vector2};

use super::Rect;

/// A directed line segment from `start` to `end`.
///
/// The parametric form is: `P(t) = start + t * (end - start)`, `t` in `[0, 1]`.
/// A segment whose endpoints coincide is degenerate but still legal input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Creates a new segment, rejecting non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any coordinate is NaN or infinite.
    pub fn try_new(start: Point2, end: Point2) -> Result<Self> {
        if !(start.coords.iter().chain(end.coords.iter())).all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite("segment").into());
        }
        Ok(Self::new(start, end))
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the (unnormalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the squared length.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Returns the length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` when both endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_coincide(&self.start, &self.end)
    }

    /// Evaluates the segment at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    /// Returns the same segment walked in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the axis-aligned bounding rectangle of the segment.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}
