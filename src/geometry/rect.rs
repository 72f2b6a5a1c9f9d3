use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// An axis-aligned rectangle given by its minimum corner and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    origin: Point2,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a new rectangle. Negative extents are clamped to zero.
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a new rectangle, rejecting negative or non-finite extents.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if any value is NaN or infinite
    /// - `GeometryError::NegativeExtent` if `width` or `height` is negative
    pub fn try_new(origin: Point2, width: f64, height: f64) -> Result<Self> {
        if !(origin.x.is_finite() && origin.y.is_finite() && width.is_finite() && height.is_finite())
        {
            return Err(GeometryError::NonFinite("rect").into());
        }
        if width < 0.0 {
            return Err(GeometryError::NegativeExtent {
                what: "rect width",
                value: width,
            }
            .into());
        }
        if height < 0.0 {
            return Err(GeometryError::NegativeExtent {
                what: "rect height",
                value: height,
            }
            .into());
        }
        Ok(Self::new(origin, width, height))
    }

    /// Creates the smallest rectangle containing both corner points.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let origin = Point2::new(a.x.min(b.x), a.y.min(b.y));
        Self::new(origin, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Returns the origin (minimum corner).
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.origin
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    /// Returns `true` if the point lies inside or on the border, up to tolerance.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let max = self.max();
        p.x >= self.origin.x - TOLERANCE
            && p.x <= max.x + TOLERANCE
            && p.y >= self.origin.y - TOLERANCE
            && p.y <= max.y + TOLERANCE
    }

    /// Returns the four corners in counter-clockwise order, starting at the minimum.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let max = self.max();
        [
            self.origin,
            Point2::new(max.x, self.origin.y),
            max,
            Point2::new(self.origin.x, max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn negative_extent_clamps() {
        let r = Rect::new(Point2::origin(), -1.0, 2.0);
        assert_relative_eq!(r.width(), 0.0);
        assert_relative_eq!(r.height(), 2.0);
    }

    #[test]
    fn try_new_rejects_negative_extent() {
        assert!(Rect::try_new(Point2::origin(), 1.0, -2.0).is_err());
        assert!(Rect::try_new(Point2::origin(), f64::INFINITY, 2.0).is_err());
        assert!(Rect::try_new(Point2::origin(), 0.0, 0.0).is_ok());
    }

    #[test]
    fn contains_border_points() {
        let r = Rect::new(Point2::new(1.0, 1.0), 2.0, 3.0);
        assert!(r.contains_point(&Point2::new(1.0, 2.0)));
        assert!(r.contains_point(&Point2::new(3.0, 4.0)));
        assert!(!r.contains_point(&Point2::new(3.5, 2.0)));
    }

    #[test]
    fn corners_are_counter_clockwise() {
        let c = Rect::new(Point2::origin(), 2.0, 1.0).corners();
        assert_relative_eq!(c[1], Point2::new(2.0, 0.0));
        assert_relative_eq!(c[2], Point2::new(2.0, 1.0));
        assert_relative_eq!(c[3], Point2::new(0.0, 1.0));
    }
}
