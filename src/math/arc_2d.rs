use std::f64::consts::TAU;

use super::{Inclusion, Point2, TOLERANCE};
use crate::geometry::{Circle, CircularArc, Ellipse};

/// Angular slack used when comparing angles, in radians.
const ANGLE_TOLERANCE: f64 = TOLERANCE * 100.0;

/// Converts an absolute angle to a sweep parameter `t` in `[0, 1]`.
///
/// A positive `sweep` runs counter-clockwise from `start_angle` and a
/// negative one clockwise. A sweep of `±2π` or more covers the full turn.
///
/// Returns `None` if the angle is not within the sweep.
#[must_use]
pub fn angle_to_sweep_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    if sweep.abs() < ANGLE_TOLERANCE {
        return None;
    }
    if is_full_turn(sweep) {
        let delta = (angle - start_angle).rem_euclid(TAU);
        let delta = if sweep > 0.0 { delta } else { (TAU - delta) % TAU };
        return Some((delta / sweep.abs()).clamp(0.0, 1.0));
    }

    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        delta = delta.rem_euclid(TAU);
        // An angle just below the start wraps to almost 2π.
        if delta > TAU - ANGLE_TOLERANCE {
            delta -= TAU;
        }
    } else {
        delta = -(-delta).rem_euclid(TAU);
        if delta < -TAU + ANGLE_TOLERANCE {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    if t >= -ANGLE_TOLERANCE && t <= 1.0 + ANGLE_TOLERANCE {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Returns `true` if `angle` falls within the sweep starting at `start_angle`.
#[must_use]
pub fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    angle_to_sweep_param(angle, start_angle, sweep).is_some()
}

/// Classifies a point against a circle's disk.
#[must_use]
pub fn point_in_circle(p: &Point2, circle: &Circle) -> Inclusion {
    if circle.is_empty() {
        return Inclusion::Outside;
    }
    let d = (p - circle.center()).norm();
    classify_radial(d, circle.radius())
}

/// Classifies a point against the region bounded by an ellipse.
///
/// The point is mapped into the ellipse's local frame and scaled onto the
/// unit circle; the boundary band is `TOLERANCE` wide in world units along
/// the smaller radius.
#[must_use]
pub fn point_in_ellipse(p: &Point2, ellipse: &Ellipse) -> Inclusion {
    if ellipse.is_degenerate() {
        return Inclusion::Outside;
    }
    let local = ellipse.to_local(p);
    let rho = (local.x / ellipse.r1()).hypot(local.y / ellipse.r2());
    let band = TOLERANCE / ellipse.r1().min(ellipse.r2());
    classify_radial_with(rho, 1.0, band)
}

/// Classifies a point against the circular sector (pie slice) of an arc.
///
/// Points on the arc or on either bounding radius are `Boundary`.
#[must_use]
pub fn point_in_sector(p: &Point2, arc: &CircularArc) -> Inclusion {
    let circle = arc.circle();
    if circle.is_empty() {
        return Inclusion::Outside;
    }
    let offset = p - circle.center();
    let d = offset.norm();
    if d <= TOLERANCE {
        return center_inclusion(arc.sweep());
    }
    let radial = classify_radial(d, circle.radius());
    if radial == Inclusion::Outside {
        return Inclusion::Outside;
    }
    let angle = offset.y.atan2(offset.x);
    sector_inclusion(radial, angle, arc.start_angle(), arc.sweep(), d)
}

/// Classifies a point against an elliptical sector.
///
/// `start_angle` and `sweep` are parametric angles of the ellipse, measured
/// in its local frame.
#[must_use]
pub fn point_in_elliptical_sector(
    p: &Point2,
    ellipse: &Ellipse,
    start_angle: f64,
    sweep: f64,
) -> Inclusion {
    if ellipse.is_degenerate() {
        return Inclusion::Outside;
    }
    let local = ellipse.to_local(p);
    if local.coords.norm() <= TOLERANCE {
        return center_inclusion(sweep);
    }
    let radial = point_in_ellipse(p, ellipse);
    if radial == Inclusion::Outside {
        return Inclusion::Outside;
    }
    let (u, v) = (local.x / ellipse.r1(), local.y / ellipse.r2());
    let angle = v.atan2(u);
    sector_inclusion(radial, angle, start_angle, sweep, u.hypot(v))
}

fn is_full_turn(sweep: f64) -> bool {
    sweep.abs() >= TAU - ANGLE_TOLERANCE
}

/// The center is interior to a full disk but lies on the edges of a slice.
fn center_inclusion(sweep: f64) -> Inclusion {
    if is_full_turn(sweep) {
        Inclusion::Inside
    } else {
        Inclusion::Boundary
    }
}

fn classify_radial(d: f64, radius: f64) -> Inclusion {
    classify_radial_with(d, radius, TOLERANCE)
}

fn classify_radial_with(d: f64, radius: f64, band: f64) -> Inclusion {
    if (d - radius).abs() <= band {
        Inclusion::Boundary
    } else if d < radius {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Combines a radial classification with the angular test of a sector.
///
/// `d` is the distance from the center, used to turn the angular slack into
/// a distance to the bounding radii.
fn sector_inclusion(radial: Inclusion, angle: f64, start_angle: f64, sweep: f64, d: f64) -> Inclusion {
    let Some(t) = angle_to_sweep_param(angle, start_angle, sweep) else {
        return Inclusion::Outside;
    };
    if is_full_turn(sweep) {
        return radial;
    }
    let on_edge = |edge_angle: f64| {
        let delta = (angle - edge_angle).sin().abs() * d;
        delta <= TOLERANCE && (angle - edge_angle).cos() > 0.0
    };
    if radial == Inclusion::Boundary || t <= 0.0 || t >= 1.0 {
        return Inclusion::Boundary;
    }
    if on_edge(start_angle) || on_edge(start_angle + sweep) {
        Inclusion::Boundary
    } else {
        radial
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn ccw_sweep_contains_midpoint() {
        assert!(angle_in_sweep(FRAC_PI_2, 0.0, PI));
        assert!(!angle_in_sweep(-FRAC_PI_2, 0.0, PI));
        assert_abs_diff_eq!(angle_to_sweep_param(FRAC_PI_2, 0.0, PI).unwrap(), 0.5);
    }

    #[test]
    fn cw_sweep_runs_backwards() {
        assert!(angle_in_sweep(-FRAC_PI_2, 0.0, -PI));
        assert!(!angle_in_sweep(FRAC_PI_2, 0.0, -PI));
        assert_abs_diff_eq!(angle_to_sweep_param(-FRAC_PI_4, 0.0, -PI).unwrap(), 0.25);
    }

    #[test]
    fn sweep_wraps_across_pi() {
        // From 135° sweeping 90° counter-clockwise reaches 225° = -135°.
        assert!(angle_in_sweep(PI, 3.0 * FRAC_PI_4, FRAC_PI_2));
        assert!(angle_in_sweep(-3.0 * FRAC_PI_4, 3.0 * FRAC_PI_4, FRAC_PI_2));
        assert!(!angle_in_sweep(0.0, 3.0 * FRAC_PI_4, FRAC_PI_2));
    }

    #[test]
    fn start_angle_is_included() {
        assert_abs_diff_eq!(angle_to_sweep_param(0.3, 0.3, 1.0).unwrap(), 0.0);
        assert_abs_diff_eq!(angle_to_sweep_param(1.3, 0.3, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn full_turn_contains_everything() {
        assert!(angle_in_sweep(-2.0, 1.0, TAU));
        assert!(angle_in_sweep(2.0, 1.0, -TAU));
    }

    #[test]
    fn circle_containment() {
        let c = Circle::new(Point2::origin(), 2.0);
        assert_eq!(point_in_circle(&Point2::new(1.0, 1.0), &c), Inclusion::Inside);
        assert_eq!(point_in_circle(&Point2::new(0.0, 2.0), &c), Inclusion::Boundary);
        assert_eq!(point_in_circle(&Point2::new(3.0, 0.0), &c), Inclusion::Outside);
        let empty = Circle::new(Point2::origin(), 0.0);
        assert_eq!(point_in_circle(&Point2::origin(), &empty), Inclusion::Outside);
    }

    #[test]
    fn ellipse_containment() {
        let e = Ellipse::new(Point2::origin(), 4.0, 1.0, FRAC_PI_2);
        assert_eq!(point_in_ellipse(&Point2::new(0.0, 3.0), &e), Inclusion::Inside);
        assert_eq!(point_in_ellipse(&Point2::new(3.0, 0.0), &e), Inclusion::Outside);
        assert_eq!(point_in_ellipse(&Point2::new(1.0, 0.0), &e), Inclusion::Boundary);
    }

    #[test]
    fn sector_containment() {
        let arc = CircularArc::new(Circle::new(Point2::origin(), 2.0), 0.0, FRAC_PI_2);
        assert_eq!(point_in_sector(&Point2::new(0.5, 0.5), &arc), Inclusion::Inside);
        assert_eq!(point_in_sector(&Point2::new(-0.5, 0.5), &arc), Inclusion::Outside);
        assert_eq!(point_in_sector(&Point2::new(1.0, 0.0), &arc), Inclusion::Boundary);
        assert_eq!(point_in_sector(&Point2::new(0.0, 1.0), &arc), Inclusion::Boundary);
        assert_eq!(point_in_sector(&Point2::new(0.0, 2.0), &arc), Inclusion::Boundary);
        assert_eq!(point_in_sector(&Point2::origin(), &arc), Inclusion::Boundary);
        assert_eq!(point_in_sector(&Point2::new(2.0, 2.0), &arc), Inclusion::Outside);

        let disk = CircularArc::new(Circle::new(Point2::origin(), 2.0), 0.0, TAU);
        assert_eq!(point_in_sector(&Point2::origin(), &disk), Inclusion::Inside);
        assert_eq!(point_in_sector(&Point2::new(1.0, 0.0), &disk), Inclusion::Inside);
    }

    #[test]
    fn elliptical_sector_containment() {
        let e = Ellipse::new(Point2::origin(), 4.0, 2.0, 0.0);
        assert_eq!(
            point_in_elliptical_sector(&Point2::new(1.0, 1.0), &e, 0.0, FRAC_PI_2),
            Inclusion::Inside
        );
        assert_eq!(
            point_in_elliptical_sector(&Point2::new(1.0, -1.0), &e, 0.0, FRAC_PI_2),
            Inclusion::Outside
        );
        assert_eq!(
            point_in_elliptical_sector(&Point2::new(3.0, 0.0), &e, 0.0, FRAC_PI_2),
            Inclusion::Boundary
        );
    }
}
