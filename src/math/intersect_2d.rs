use tracing::trace;

use super::predicates_2d::point_on_segment;
use super::{cross, in_unit_interval, is_near_zero, points_coincide, Point2, Vector2};
use crate::geometry::Segment;

/// Intersection points between two primitives, with explicit multiplicity.
///
/// Collinear overlapping segments are reported as [`Intersection::Two`]
/// holding the endpoints of the shared sub-segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    Empty,
    One(Point2),
    Two(Point2, Point2),
}

impl Intersection {
    /// Builds a result from up to two points; further points are ignored.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Self {
        let mut iter = points.into_iter();
        match (iter.next(), iter.next()) {
            (None, _) => Self::Empty,
            (Some(p), None) => Self::One(p),
            (Some(p), Some(q)) => Self::Two(p, q),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns `true` if there is no intersection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Iterates over the intersection points.
    pub fn iter(&self) -> impl Iterator<Item = Point2> {
        let (a, b) = match *self {
            Self::Empty => (None, None),
            Self::One(p) => (Some(p), None),
            Self::Two(p, q) => (Some(p), Some(q)),
        };
        a.into_iter().chain(b)
    }

    /// Collects the points into a freshly allocated vector.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.iter().collect()
    }
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_params(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let det = cross(d1, d2);
    if is_near_zero(det) {
        return None;
    }
    let q = p2 - p1;
    Some((cross(&q, d2) / det, cross(&q, d1) / det))
}

/// Intersection point of the infinite lines through two segments.
///
/// Returns `None` for parallel or degenerate lines.
#[must_use]
pub fn line_line_intersection(a: &Segment, b: &Segment) -> Option<Point2> {
    line_line_params(a.start(), &a.direction(), b.start(), &b.direction())
        .map(|(t, _)| a.point_at(t))
}

/// Intersection of two bounded segments.
///
/// Crossing segments yield [`Intersection::One`]. Parallel segments sharing
/// any point go through [`overlap_intersection`], so collinear overlapping
/// segments report their shared sub-segment.
#[must_use]
pub fn segment_segment_intersection(a: &Segment, b: &Segment) -> Intersection {
    let r = a.direction();
    let s = b.direction();
    let det = cross(&r, &s);

    if is_near_zero(det) {
        let touching = point_on_segment(b.start(), a)
            || point_on_segment(b.end(), a)
            || point_on_segment(a.start(), b)
            || point_on_segment(a.end(), b);
        if !touching {
            return Intersection::Empty;
        }
        return overlap_intersection(a.start(), a.end(), b.start(), b.end());
    }

    let q = b.start() - a.start();
    let t = cross(&q, &s) / det;
    let u = cross(&q, &r) / det;
    if in_unit_interval(t) && in_unit_interval(u) {
        Intersection::One(a.point_at(t.clamp(0.0, 1.0)))
    } else {
        Intersection::Empty
    }
}

/// General four-point resolver for possibly degenerate or collinear segments
/// `a0→a1` and `b0→b1`.
///
/// - point vs point or point vs segment: the touching point, if any
/// - non-parallel segments: the single crossing point, if any
/// - parallel segments offset by more than `TOLERANCE`: the endpoints lying
///   on the other segment, so pairs that only touch at an endpoint still
///   report it
/// - collinear segments: the overlap of both segments projected onto the
///   dominant axis of `a0→a1`, returned as one touching point or the two
///   endpoints of the shared sub-segment
#[must_use]
pub fn overlap_intersection(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Intersection {
    let a = Segment::new(*a0, *a1);
    let b = Segment::new(*b0, *b1);

    if a.is_degenerate() || b.is_degenerate() {
        return touching_endpoints(&a, &b)
            .first()
            .map_or(Intersection::Empty, |p| Intersection::One(*p));
    }

    let u_a = a.direction();
    if !is_near_zero(cross(&u_a, &b.direction())) {
        return segment_segment_intersection(&a, &b);
    }

    // Distance of b0 from the line through a.
    let offset = cross(&u_a, &(b0 - a0)) / u_a.norm();
    if !is_near_zero(offset) {
        let touching = touching_endpoints(&a, &b);
        if touching.is_empty() {
            trace!(offset, "parallel segments are not collinear");
        }
        return Intersection::from_points(touching);
    }

    // Collinear: project b onto a's parametrization along its dominant axis.
    let project = |p: &Point2| {
        if u_a.x.abs() >= u_a.y.abs() {
            (p.x - a0.x) / u_a.x
        } else {
            (p.y - a0.y) / u_a.y
        }
    };
    let (tb0, tb1) = (project(b0), project(b1));
    let lo = tb0.min(tb1).max(0.0);
    let hi = tb0.max(tb1).min(1.0);

    let p_lo = a.point_at(lo);
    let p_hi = a.point_at(hi);
    if lo > hi && !points_coincide(&p_lo, &p_hi) {
        return Intersection::Empty;
    }
    if points_coincide(&p_lo, &p_hi) {
        Intersection::One(p_lo)
    } else {
        Intersection::Two(p_lo, p_hi)
    }
}

/// Endpoints of either segment lying on the other, without duplicates.
///
/// Non-empty exactly when the parallel branch of
/// [`segments_intersect`](super::predicates_2d::segments_intersect) reports a
/// touch.
fn touching_endpoints(a: &Segment, b: &Segment) -> Vec<Point2> {
    let candidates = [
        (a.start(), b),
        (a.end(), b),
        (b.start(), a),
        (b.end(), a),
    ];
    let mut out: Vec<Point2> = Vec::with_capacity(2);
    for (p, other) in candidates {
        if point_on_segment(p, other) && !out.iter().any(|q| points_coincide(q, p)) {
            out.push(*p);
        }
    }
    out
}
