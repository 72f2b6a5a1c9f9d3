use crate::math::{Point2, Vector2};

use super::Rect;

/// A quadratic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub from: Point2,
    pub ctrl: Point2,
    pub to: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier curve.
    #[must_use]
    pub fn new(from: Point2, ctrl: Point2, to: Point2) -> Self {
        Self { from, ctrl, to }
    }

    /// Returns the power-basis coefficients `[c2, c1, c0]` so that
    /// `B(t) = c2 * t² + c1 * t + c0`.
    #[must_use]
    pub fn coefficients(&self) -> [Vector2; 3] {
        let p0 = self.from.coords;
        let p1 = self.ctrl.coords;
        let p2 = self.to.coords;
        [p0 - p1 * 2.0 + p2, (p1 - p0) * 2.0, p0]
    }

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Point2 {
        let one_t = 1.0 - t;
        Point2::from(
            self.from.coords * (one_t * one_t)
                + self.ctrl.coords * (2.0 * one_t * t)
                + self.to.coords * (t * t),
        )
    }

    /// Returns the bounding rectangle of the control polygon.
    #[must_use]
    pub fn fast_bounding_rect(&self) -> Rect {
        hull_rect(&[self.from, self.ctrl, self.to])
    }
}

/// A cubic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: Point2,
    pub ctrl1: Point2,
    pub ctrl2: Point2,
    pub to: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub fn new(from: Point2, ctrl1: Point2, ctrl2: Point2, to: Point2) -> Self {
        Self {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Returns the power-basis coefficients `[c3, c2, c1, c0]` so that
    /// `B(t) = c3 * t³ + c2 * t² + c1 * t + c0`.
    #[must_use]
    pub fn coefficients(&self) -> [Vector2; 4] {
        let p0 = self.from.coords;
        let p1 = self.ctrl1.coords;
        let p2 = self.ctrl2.coords;
        let p3 = self.to.coords;
        [
            p3 - p0 + (p1 - p2) * 3.0,
            (p0 - p1 * 2.0 + p2) * 3.0,
            (p1 - p0) * 3.0,
            p0,
        ]
    }

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Point2 {
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let t2 = t * t;
        Point2::from(
            self.from.coords * (one_t2 * one_t)
                + self.ctrl1.coords * (3.0 * one_t2 * t)
                + self.ctrl2.coords * (3.0 * one_t * t2)
                + self.to.coords * (t2 * t),
        )
    }

    /// Returns the bounding rectangle of the control polygon.
    #[must_use]
    pub fn fast_bounding_rect(&self) -> Rect {
        hull_rect(&[self.from, self.ctrl1, self.ctrl2, self.to])
    }
}

fn hull_rect(points: &[Point2]) -> Rect {
    let (mut min, mut max) = (points[0], points[0]);
    for p in &points[1..] {
        min = Point2::new(min.x.min(p.x), min.y.min(p.y));
        max = Point2::new(max.x.max(p.x), max.y.max(p.y));
    }
    Rect::from_corners(min, max)
}
