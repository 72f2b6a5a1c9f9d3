use tracing::trace;

use super::intersect_2d::segment_segment_intersection;
use super::{is_near_zero, points_coincide, Inclusion, Point2, Vector2, TOLERANCE};
use crate::geometry::{Rect, Segment};

/// Narrows the parameter range `[t0, t1]` of `origin + t * dir` to the part
/// inside `rect` (Liang–Barsky). Returns `None` when nothing of the range
/// remains.
fn clip_param_range(
    origin: &Point2,
    dir: &Vector2,
    rect: &Rect,
    mut t0: f64,
    mut t1: f64,
) -> Option<(f64, f64)> {
    let (min, max) = (rect.min(), rect.max());
    let boundaries = [
        (-dir.x, origin.x - min.x),
        (dir.x, max.x - origin.x),
        (-dir.y, origin.y - min.y),
        (dir.y, max.y - origin.y),
    ];

    for (p, q) in boundaries {
        if is_near_zero(p) {
            // Parallel to this boundary: either fully inside its half-plane or fully out.
            if q < -TOLERANCE {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 + TOLERANCE {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 - TOLERANCE {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    (t0 <= t1 + TOLERANCE).then_some((t0, t1.max(t0)))
}

/// Clips a segment to the rectangle, returning the visible part.
#[must_use]
pub fn clip_segment_to_rect(seg: &Segment, rect: &Rect) -> Option<Segment> {
    if seg.is_degenerate() {
        return rect.contains_point(seg.start()).then_some(*seg);
    }
    let (t0, t1) = clip_param_range(seg.start(), &seg.direction(), rect, 0.0, 1.0)?;
    Some(Segment::new(seg.point_at(t0), seg.point_at(t1)))
}

/// Clips the ray `origin + t * dir`, `t >= 0`, to the rectangle.
#[must_use]
pub fn clip_ray_to_rect(origin: &Point2, dir: &Vector2, rect: &Rect) -> Option<Segment> {
    if is_near_zero(dir.norm()) {
        trace!("zero-length ray direction");
        return None;
    }
    let (t0, t1) = clip_param_range(origin, dir, rect, 0.0, f64::INFINITY)?;
    Some(Segment::new(origin + dir * t0, origin + dir * t1))
}

/// Clips the infinite line through `origin` along `dir` to the rectangle.
#[must_use]
pub fn clip_line_to_rect(origin: &Point2, dir: &Vector2, rect: &Rect) -> Option<Segment> {
    if is_near_zero(dir.norm()) {
        trace!("zero-length line direction");
        return None;
    }
    let (t0, t1) = clip_param_range(origin, dir, rect, f64::NEG_INFINITY, f64::INFINITY)?;
    Some(Segment::new(origin + dir * t0, origin + dir * t1))
}

/// Points where a segment meets the rectangle's border, ordered along the segment.
#[must_use]
pub fn segment_rect_intersection(seg: &Segment, rect: &Rect) -> Vec<Point2> {
    let corners = rect.corners();
    let mut points: Vec<Point2> = Vec::with_capacity(4);
    for i in 0..corners.len() {
        let edge = Segment::new(corners[i], corners[(i + 1) % corners.len()]);
        for p in segment_segment_intersection(seg, &edge).iter() {
            if !points.iter().any(|q| points_coincide(q, &p)) {
                points.push(p);
            }
        }
    }
    let start = *seg.start();
    points.sort_by(|a, b| (a - start).norm_squared().total_cmp(&(b - start).norm_squared()));
    points
}

/// Classifies a point against the rectangle.
#[must_use]
pub fn point_in_rect(p: &Point2, rect: &Rect) -> Inclusion {
    if !rect.contains_point(p) {
        return Inclusion::Outside;
    }
    let (min, max) = (rect.min(), rect.max());
    let on_edge = (p.x - min.x).abs() <= TOLERANCE
        || (p.x - max.x).abs() <= TOLERANCE
        || (p.y - min.y).abs() <= TOLERANCE
        || (p.y - max.y).abs() <= TOLERANCE;
    if on_edge {
        Inclusion::Boundary
    } else {
        Inclusion::Inside
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn viewport() -> Rect {
        Rect::new(Point2::origin(), 10.0, 5.0)
    }

    #[test]
    fn segment_crossing_viewport_is_trimmed() {
        let clipped = clip_segment_to_rect(&Segment::from_coords(-5.0, 2.0, 15.0, 2.0), &viewport()).unwrap();
        assert_abs_diff_eq!(*clipped.start(), Point2::new(0.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*clipped.end(), Point2::new(10.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn segment_inside_is_unchanged() {
        let seg = Segment::from_coords(1.0, 1.0, 2.0, 3.0);
        let clipped = clip_segment_to_rect(&seg, &viewport()).unwrap();
        assert_abs_diff_eq!(*clipped.start(), *seg.start());
        assert_abs_diff_eq!(*clipped.end(), *seg.end());
    }

    #[test]
    fn segment_outside_is_rejected() {
        assert!(clip_segment_to_rect(&Segment::from_coords(-5.0, 6.0, 15.0, 9.0), &viewport()).is_none());
        assert!(clip_segment_to_rect(&Segment::from_coords(11.0, 1.0, 11.0, 4.0), &viewport()).is_none());
    }

    #[test]
    fn degenerate_segment_clips_to_itself_when_inside() {
        let dot = Segment::from_coords(3.0, 3.0, 3.0, 3.0);
        assert!(clip_segment_to_rect(&dot, &viewport()).is_some());
        let far = Segment::from_coords(30.0, 3.0, 30.0, 3.0);
        assert!(clip_segment_to_rect(&far, &viewport()).is_none());
    }

    #[test]
    fn diagonal_line_clipped_to_corners() {
        let rect = Rect::new(Point2::origin(), 4.0, 4.0);
        let clipped = clip_line_to_rect(&Point2::new(2.0, 2.0), &Vector2::new(1.0, 1.0), &rect).unwrap();
        assert_abs_diff_eq!(*clipped.start(), Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*clipped.end(), Point2::new(4.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn ray_starts_at_origin() {
        let clipped = clip_ray_to_rect(&Point2::new(5.0, 2.0), &Vector2::new(1.0, 0.0), &viewport()).unwrap();
        assert_abs_diff_eq!(*clipped.start(), Point2::new(5.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*clipped.end(), Point2::new(10.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let hit = clip_ray_to_rect(&Point2::new(15.0, 2.0), &Vector2::new(1.0, 0.0), &viewport());
        assert!(hit.is_none());
        let hit = clip_ray_to_rect(&Point2::new(15.0, 2.0), &Vector2::new(-1.0, 0.0), &viewport());
        assert!(hit.is_some());
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(clip_line_to_rect(&Point2::new(1.0, 1.0), &Vector2::zeros(), &viewport()).is_none());
    }

    #[test]
    fn short_direction_still_clips() {
        let dir = Vector2::new(1e-6, 0.0);
        let clipped = clip_ray_to_rect(&Point2::new(5.0, 2.0), &dir, &viewport()).unwrap();
        assert_abs_diff_eq!(*clipped.start(), Point2::new(5.0, 2.0), epsilon = 1e-9);
        assert_abs_diff_eq!(*clipped.end(), Point2::new(10.0, 2.0), epsilon = 1e-6);
        assert!(clip_line_to_rect(&Point2::new(5.0, 2.0), &dir, &viewport()).is_some());
    }

    #[test]
    fn border_crossings_sorted_along_segment() {
        let pts = segment_rect_intersection(&Segment::from_coords(12.0, 2.0, -2.0, 2.0), &viewport());
        assert_eq!(pts.len(), 2);
        assert_abs_diff_eq!(pts[0], Point2::new(10.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1], Point2::new(0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn corner_crossing_deduplicated() {
        let pts = segment_rect_intersection(&Segment::from_coords(-1.0, -1.0, 1.0, 1.0), &viewport());
        assert_eq!(pts.len(), 1);
        assert_abs_diff_eq!(pts[0], Point2::origin(), epsilon = 1e-12);
    }

    #[test]
    fn rect_point_classification() {
        assert_eq!(point_in_rect(&Point2::new(5.0, 2.0), &viewport()), Inclusion::Inside);
        assert_eq!(point_in_rect(&Point2::new(10.0, 2.0), &viewport()), Inclusion::Boundary);
        assert_eq!(point_in_rect(&Point2::new(11.0, 2.0), &viewport()), Inclusion::Outside);
    }
}
