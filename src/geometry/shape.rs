use crate::math::arc_2d::{point_in_circle, point_in_ellipse, point_in_sector};
use crate::math::bezier_2d::{cubic_segment_intersection, quadratic_segment_intersection};
use crate::math::circle_2d::{
    arc_segment_intersection, circle_segment_intersection, ellipse_segment_intersection,
};
use crate::math::intersect_2d::segment_segment_intersection;
use crate::math::predicates_2d::point_on_segment;
use crate::math::rect_2d::{point_in_rect, segment_rect_intersection};
use crate::math::{points_coincide, Inclusion, Point2};

use super::{
    Circle, CircularArc, CubicBezier, Ellipse, Polygon, PolygonSet, QuadraticBezier, Rect,
    Segment,
};

/// Any primitive the kernel knows about.
///
/// Callers that hold heterogeneous shapes (a scene, a hit-test list)
/// dispatch through this enum instead of inspecting concrete types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point2),
    Segment(Segment),
    Circle(Circle),
    Arc(CircularArc),
    Ellipse(Ellipse),
    Rect(Rect),
    QuadraticBezier(QuadraticBezier),
    CubicBezier(CubicBezier),
    Polygon(Polygon),
    PolygonSet(PolygonSet),
}

impl Shape {
    /// Classifies a point against the shape's region.
    ///
    /// Arcs are treated as pie slices. Points and segments have no interior
    /// and report `Boundary` only when the point lies on them. Curves are
    /// never hit; pick them through [`Shape::intersect_segment`].
    #[must_use]
    pub fn hit_test(&self, p: &Point2) -> Inclusion {
        match self {
            Self::Point(q) => boundary_if(points_coincide(p, q)),
            Self::Segment(s) => boundary_if(point_on_segment(p, s)),
            Self::Circle(c) => point_in_circle(p, c),
            Self::Arc(a) => point_in_sector(p, a),
            Self::Ellipse(e) => point_in_ellipse(p, e),
            Self::Rect(r) => point_in_rect(p, r),
            Self::QuadraticBezier(_) | Self::CubicBezier(_) => Inclusion::Outside,
            Self::Polygon(poly) => poly.classify(p),
            Self::PolygonSet(set) => set.classify(p),
        }
    }

    /// Points where a segment meets the shape's outline.
    ///
    /// Collinear overlaps with straight edges contribute the endpoints of
    /// the shared sub-segment. Duplicates at shared vertices are merged.
    #[must_use]
    pub fn intersect_segment(&self, seg: &Segment) -> Vec<Point2> {
        match self {
            Self::Point(q) => {
                if point_on_segment(q, seg) {
                    vec![*q]
                } else {
                    Vec::new()
                }
            }
            Self::Segment(s) => segment_segment_intersection(seg, s).points(),
            Self::Circle(c) => circle_segment_intersection(c, seg).points(),
            Self::Arc(a) => arc_segment_intersection(a, seg).points(),
            Self::Ellipse(e) => ellipse_segment_intersection(e, seg).points(),
            Self::Rect(r) => segment_rect_intersection(seg, r),
            Self::QuadraticBezier(q) => quadratic_segment_intersection(q, seg).points(),
            Self::CubicBezier(c) => cubic_segment_intersection(c, seg),
            Self::Polygon(poly) => polygon_edge_hits(poly.points(), seg),
            Self::PolygonSet(set) => {
                let mut out = Vec::new();
                for poly in set.polygons() {
                    merge_points(&mut out, polygon_edge_hits(poly.points(), seg));
                }
                out
            }
        }
    }
}

fn boundary_if(on: bool) -> Inclusion {
    if on {
        Inclusion::Boundary
    } else {
        Inclusion::Outside
    }
}

fn polygon_edge_hits(points: &[Point2], seg: &Segment) -> Vec<Point2> {
    let n = points.len();
    let mut out = Vec::new();
    if n < 2 {
        return out;
    }
    // Two points form a single edge, not a closed loop.
    let edges = if n == 2 { 1 } else { n };
    for i in 0..edges {
        let edge = Segment::new(points[i], points[(i + 1) % n]);
        merge_points(&mut out, segment_segment_intersection(seg, &edge).iter());
    }
    out
}

fn merge_points(out: &mut Vec<Point2>, points: impl IntoIterator<Item = Point2>) {
    for p in points {
        if !out.iter().any(|q| points_coincide(q, &p)) {
            out.push(p);
        }
    }
}
