use tracing::trace;

use super::arc_2d::angle_in_sweep;
use super::predicates_2d::{circle_relation, CircleRelation};
use super::roots::{quadratic_roots, QuadraticRoots};
use super::{in_unit_interval, Intersection, Point2, Vector2};
use crate::geometry::{Circle, CircularArc, Ellipse, Segment};

/// Intersection points of two circle outlines.
///
/// Uses the chord construction: with `d` the center distance,
/// `a = (r0² - r1² + d²) / (2d)` locates the chord's foot `P2` on the center
/// line and `h = sqrt(r0² - a²)` is the half chord length. Tangent circles
/// yield one point; separate, nested, coincident or empty circles yield none.
#[must_use]
pub fn circle_circle_intersection(c0: &Circle, c1: &Circle) -> Intersection {
    let relation = circle_relation(c0, c1);
    if relation.point_count() == 0 {
        trace!(?relation, "circles do not meet");
        return Intersection::Empty;
    }

    let delta = c1.center() - c0.center();
    let d2 = delta.norm_squared();
    let d = d2.sqrt();
    let (r0, r1) = (c0.radius(), c1.radius());

    let a = (r0 * r0 - r1 * r1 + d2) / (2.0 * d);
    let foot = c0.center() + delta * (a / d);

    if relation == CircleRelation::Crossing {
        let h = (r0 * r0 - a * a).max(0.0).sqrt();
        let offset = Vector2::new(-delta.y, delta.x) * (h / d);
        Intersection::Two(foot + offset, foot - offset)
    } else {
        Intersection::One(foot)
    }
}

/// Intersection points of a circle outline with a segment.
///
/// Substitutes `P(t) = start + t·(end - start)` into the circle equation and
/// keeps the roots of the resulting quadratic that lie in `[0, 1]`. Empty
/// circles and degenerate segments yield no points.
#[must_use]
pub fn circle_segment_intersection(circle: &Circle, seg: &Segment) -> Intersection {
    if circle.is_empty() || seg.is_degenerate() {
        trace!("degenerate circle or segment");
        return Intersection::Empty;
    }
    let d = seg.direction();
    let f = seg.start() - circle.center();
    let r = circle.radius();

    let roots = quadratic_roots(d.dot(&d), 2.0 * f.dot(&d), f.dot(&f) - r * r);
    points_on_segment(seg, roots)
}

/// Intersection points of a circular arc with a segment.
#[must_use]
pub fn arc_segment_intersection(arc: &CircularArc, seg: &Segment) -> Intersection {
    let circle = arc.circle();
    Intersection::from_points(
        circle_segment_intersection(circle, seg)
            .iter()
            .filter(|p| on_arc(arc, p)),
    )
}

/// Intersection points of two circular arcs.
#[must_use]
pub fn arc_arc_intersection(a: &CircularArc, b: &CircularArc) -> Intersection {
    Intersection::from_points(
        circle_circle_intersection(a.circle(), b.circle())
            .iter()
            .filter(|p| on_arc(a, p) && on_arc(b, p)),
    )
}

/// Intersection points of a rotated ellipse with a segment.
///
/// The segment is rotated into the ellipse's local frame, where the ellipse
/// equation `x²/r1² + y²/r2² = 1` yields a quadratic in the segment
/// parameter. Accepted points are rotated back to world space.
#[must_use]
pub fn ellipse_segment_intersection(ellipse: &Ellipse, seg: &Segment) -> Intersection {
    if ellipse.is_degenerate() || seg.is_degenerate() {
        trace!("degenerate ellipse or segment");
        return Intersection::Empty;
    }
    let p0 = ellipse.to_local(seg.start());
    let p1 = ellipse.to_local(seg.end());
    let local = Segment::new(p0, p1);

    let inv_rx2 = 1.0 / (ellipse.r1() * ellipse.r1());
    let inv_ry2 = 1.0 / (ellipse.r2() * ellipse.r2());
    let d = local.direction();
    let f = p0.coords;

    let a = d.x * d.x * inv_rx2 + d.y * d.y * inv_ry2;
    let b = 2.0 * (f.x * d.x * inv_rx2 + f.y * d.y * inv_ry2);
    let c = f.x * f.x * inv_rx2 + f.y * f.y * inv_ry2 - 1.0;

    Intersection::from_points(
        points_on_segment(&local, quadratic_roots(a, b, c))
            .iter()
            .map(|p| ellipse.to_world(&p)),
    )
}

fn points_on_segment(seg: &Segment, roots: QuadraticRoots) -> Intersection {
    Intersection::from_points(
        roots
            .iter()
            .filter(|t| in_unit_interval(*t))
            .map(|t| seg.point_at(t.clamp(0.0, 1.0))),
    )
}

fn on_arc(arc: &CircularArc, p: &Point2) -> bool {
    let center = arc.circle().center();
    let angle = (p.y - center.y).atan2(p.x - center.x);
    angle_in_sweep(angle, arc.start_angle(), arc.sweep())
}
