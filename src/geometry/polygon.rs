use crate::math::polygon_2d::{point_in_polygon, point_in_polygon_set, signed_area};
use crate::math::{Inclusion, Point2};

/// A closed polygon: the last point implicitly connects back to the first.
///
/// Fewer than 3 points describe a polygon without interior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Classifies a point against this polygon.
    #[must_use]
    pub fn classify(&self, p: &Point2) -> Inclusion {
        point_in_polygon(p, &self.points)
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl AsRef<[Point2]> for Polygon {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}

/// An ordered set of polygons combined with the even/odd rule.
///
/// A polygon nested inside another one describes a hole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Creates a polygon set.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Returns the member polygons.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Classifies a point against the even/odd aggregate of all polygons.
    #[must_use]
    pub fn classify(&self, p: &Point2) -> Inclusion {
        point_in_polygon_set(p, &self.polygons)
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
