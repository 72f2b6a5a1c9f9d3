use super::{cross, in_unit_interval, is_near_zero, points_coincide, TOLERANCE};
use crate::geometry::{Circle, Rect, Segment};
use crate::math::Point2;

/// Returns `true` if `p` lies on the segment.
///
/// The point is on the segment if it coincides with an endpoint, or if it is
/// collinear with the segment and inside the segment's bounding box.
#[must_use]
pub fn point_on_segment(p: &Point2, seg: &Segment) -> bool {
    let (a, b) = (seg.start(), seg.end());
    if points_coincide(p, a) || points_coincide(p, b) {
        return true;
    }
    if seg.is_degenerate() {
        return false;
    }
    if !is_near_zero(cross(&seg.direction(), &(p - a))) {
        return false;
    }
    seg.bounding_rect().contains_point(p)
}

/// Returns `true` if the two segments touch or cross.
///
/// Parallel (or degenerate) pairs degrade to endpoint-on-segment checks in
/// both directions, which keeps the test commutative.
#[must_use]
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let r = a.direction();
    let s = b.direction();
    let det = cross(&r, &s);

    if is_near_zero(det) {
        return point_on_segment(b.start(), a)
            || point_on_segment(b.end(), a)
            || point_on_segment(a.start(), b)
            || point_on_segment(a.end(), b);
    }

    let q = b.start() - a.start();
    let t = cross(&q, &s) / det;
    let u = cross(&q, &r) / det;
    in_unit_interval(t) && in_unit_interval(u)
}

/// Returns `true` if two axis-aligned rectangles overlap or touch.
///
/// x-extents are compared with x-extents and y-extents with y-extents.
#[must_use]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    let apart_x = a_max.x < b_min.x - TOLERANCE || b_max.x < a_min.x - TOLERANCE;
    let apart_y = a_max.y < b_min.y - TOLERANCE || b_max.y < a_min.y - TOLERANCE;
    !(apart_x || apart_y)
}

/// How two circles are positioned relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRelation {
    /// At least one circle has zero radius.
    Empty,
    /// Centers are further apart than the sum of the radii.
    Separate,
    /// One circle lies strictly inside the other.
    Contained,
    /// Same center and radius.
    Coincident,
    /// Touching from outside at a single point.
    ExternallyTangent,
    /// Touching from inside at a single point.
    InternallyTangent,
    /// Crossing at two points.
    Crossing,
}

impl CircleRelation {
    /// Number of intersection points implied by the relation.
    #[must_use]
    pub fn point_count(self) -> usize {
        match self {
            Self::Empty | Self::Separate | Self::Contained | Self::Coincident => 0,
            Self::ExternallyTangent | Self::InternallyTangent => 1,
            Self::Crossing => 2,
        }
    }
}

/// Classifies two circles by comparing the center distance with the sum and
/// the absolute difference of the radii.
#[must_use]
pub fn circle_relation(a: &Circle, b: &Circle) -> CircleRelation {
    if a.is_empty() || b.is_empty() {
        return CircleRelation::Empty;
    }
    let d = (b.center() - a.center()).norm();
    let sum = a.radius() + b.radius();
    let diff = (a.radius() - b.radius()).abs();

    if d <= TOLERANCE {
        return if diff <= TOLERANCE {
            CircleRelation::Coincident
        } else {
            CircleRelation::Contained
        };
    }
    if (d - sum).abs() <= TOLERANCE {
        CircleRelation::ExternallyTangent
    } else if d > sum {
        CircleRelation::Separate
    } else if (d - diff).abs() <= TOLERANCE {
        CircleRelation::InternallyTangent
    } else if d < diff {
        CircleRelation::Contained
    } else {
        CircleRelation::Crossing
    }
}

/// Returns `true` if the two circles' outlines meet.
#[must_use]
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    circle_relation(a, b).point_count() > 0
}
