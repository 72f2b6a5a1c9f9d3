use tracing::trace;

use super::roots::{quadratic_roots, CubicRoots};
use super::{in_unit_interval, is_near_zero, Intersection, Point2, Vector2, TOLERANCE};
use crate::geometry::{CubicBezier, QuadraticBezier, Segment};

/// An intersection between a curve and a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// The intersection point.
    pub point: Point2,
    /// Parameter on the curve.
    pub t_curve: f64,
    /// Parameter on the segment.
    pub t_segment: f64,
}

/// Implicit line through a segment: `n · p + c = 0` with `n = (A, B)`.
struct ImplicitLine {
    normal: Vector2,
    offset: f64,
}

impl ImplicitLine {
    fn through(seg: &Segment) -> Option<Self> {
        if seg.is_degenerate() {
            return None;
        }
        let (s, e) = (seg.start(), seg.end());
        let normal = Vector2::new(s.y - e.y, e.x - s.x);
        let offset = s.x * e.y - e.x * s.y;
        Some(Self { normal, offset })
    }
}

/// Intersections of a quadratic Bézier with a segment, ascending in `t_curve`.
///
/// The curve's power form is dotted with the segment's line normal, giving a
/// quadratic in the curve parameter. Roots in `[0, 1]` are then checked
/// against the segment's bounding box; exactly vertical or horizontal
/// segments are only checked along their extent, since a flat box would
/// reject points off by rounding noise.
///
/// A curve lying entirely on the segment's line has no isolated
/// intersections and yields nothing.
#[must_use]
pub fn quadratic_segment_hits(curve: &QuadraticBezier, seg: &Segment) -> Vec<CurveHit> {
    let Some(line) = ImplicitLine::through(seg) else {
        trace!("degenerate segment");
        return Vec::new();
    };
    let [c2, c1, c0] = curve.coefficients();
    let n = &line.normal;
    let roots = quadratic_roots(n.dot(&c2), n.dot(&c1), n.dot(&c0) + line.offset);

    roots
        .iter()
        .filter(|t| in_unit_interval(*t))
        .map(|t| t.clamp(0.0, 1.0))
        .filter_map(|t| {
            let point = curve.sample(t);
            within_segment_box(&point, seg).then(|| CurveHit {
                point,
                t_curve: t,
                t_segment: segment_param(&point, seg),
            })
        })
        .collect()
}

/// Intersection points of a quadratic Bézier with a segment.
#[must_use]
pub fn quadratic_segment_intersection(curve: &QuadraticBezier, seg: &Segment) -> Intersection {
    Intersection::from_points(quadratic_segment_hits(curve, seg).into_iter().map(|h| h.point))
}

/// Intersections of a cubic Bézier with a segment, ascending in `t_curve`.
///
/// Combines the curve's power form with the implicit line `A·x + B·y + C = 0`
/// into one cubic in `t`. A root can solve the infinite-line problem while
/// missing the finite segment, so each point is also checked along the
/// segment's dominant axis.
#[must_use]
pub fn cubic_segment_hits(curve: &CubicBezier, seg: &Segment) -> Vec<CurveHit> {
    let Some(line) = ImplicitLine::through(seg) else {
        trace!("degenerate segment");
        return Vec::new();
    };
    let [c3, c2, c1, c0] = curve.coefficients();
    let n = &line.normal;
    let roots = CubicRoots::in_unit_interval(
        n.dot(&c3),
        n.dot(&c2),
        n.dot(&c1),
        n.dot(&c0) + line.offset,
    );

    let d = seg.direction();
    let mostly_vertical = d.y.abs() >= d.x.abs();
    let (s, e) = (seg.start(), seg.end());
    let (lo, hi) = if mostly_vertical {
        (s.y.min(e.y), s.y.max(e.y))
    } else {
        (s.x.min(e.x), s.x.max(e.x))
    };

    roots
        .iter()
        .filter_map(|t| {
            let point = curve.sample(t);
            let along = if mostly_vertical { point.y } else { point.x };
            (along >= lo - TOLERANCE && along <= hi + TOLERANCE).then(|| CurveHit {
                point,
                t_curve: t,
                t_segment: segment_param(&point, seg),
            })
        })
        .collect()
}

/// Intersection points of a cubic Bézier with a segment (up to three).
#[must_use]
pub fn cubic_segment_intersection(curve: &CubicBezier, seg: &Segment) -> Vec<Point2> {
    cubic_segment_hits(curve, seg)
        .into_iter()
        .map(|h| h.point)
        .collect()
}

fn within_segment_box(p: &Point2, seg: &Segment) -> bool {
    let (s, e) = (seg.start(), seg.end());
    let in_x = p.x >= s.x.min(e.x) - TOLERANCE && p.x <= s.x.max(e.x) + TOLERANCE;
    let in_y = p.y >= s.y.min(e.y) - TOLERANCE && p.y <= s.y.max(e.y) + TOLERANCE;
    if is_near_zero(s.x - e.x) {
        in_y
    } else if is_near_zero(s.y - e.y) {
        in_x
    } else {
        in_x && in_y
    }
}

fn segment_param(p: &Point2, seg: &Segment) -> f64 {
    let d = seg.direction();
    ((p - seg.start()).dot(&d) / d.norm_squared()).clamp(0.0, 1.0)
}
