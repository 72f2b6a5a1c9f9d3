use nalgebra::Rotation2;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A rotated ellipse in the plane.
///
/// `P(t) = center + R(rotation) * (r1 * cos(t), r2 * sin(t))`
///
/// Either radius being `<= TOLERANCE` makes the ellipse degenerate; it then
/// intersects and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    r1: f64,
    r2: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `r1` - Radius along the local x axis
    /// * `r2` - Radius along the local y axis
    /// * `rotation` - Counter-clockwise rotation of the local frame, in radians
    #[must_use]
    pub fn new(center: Point2, r1: f64, r2: f64, rotation: f64) -> Self {
        Self {
            center,
            r1,
            r2,
            rotation,
        }
    }

    /// Creates a new ellipse, rejecting non-finite values.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any value is NaN or infinite.
    pub fn try_new(center: Point2, r1: f64, r2: f64, rotation: f64) -> Result<Self> {
        let finite = [center.x, center.y, r1, r2, rotation]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GeometryError::NonFinite("ellipse").into());
        }
        Ok(Self::new(center, r1, r2, rotation))
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius along the local x axis.
    #[must_use]
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Returns the radius along the local y axis.
    #[must_use]
    pub fn r2(&self) -> f64 {
        self.r2
    }

    /// Returns the rotation angle in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns `true` when either radius is within tolerance of zero or negative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.r1 <= TOLERANCE || self.r2 <= TOLERANCE
    }

    /// Maps a world-space point into the ellipse's local, unrotated frame.
    #[must_use]
    pub fn to_local(&self, p: &Point2) -> Point2 {
        Point2::from(Rotation2::new(-self.rotation) * (p - self.center))
    }

    /// Maps a local-frame point back to world space.
    #[must_use]
    pub fn to_world(&self, p: &Point2) -> Point2 {
        self.center + Rotation2::new(self.rotation) * p.coords
    }

    /// Evaluates the ellipse at parametric angle `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.to_world(&Point2::new(self.r1 * t.cos(), self.r2 * t.sin()))
    }
}
