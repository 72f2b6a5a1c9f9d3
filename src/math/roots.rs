use std::f64::consts::PI;

use super::{in_unit_interval, is_near_zero, TOLERANCE};

/// Real roots of a quadratic (or degraded linear) equation, ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    Empty,
    One(f64),
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Iterates over the roots in ascending order.
    pub fn iter(self) -> impl Iterator<Item = f64> {
        let (a, b) = match self {
            Self::Empty => (None, None),
            Self::One(r) => (Some(r), None),
            Self::Two(r0, r1) => (Some(r0), Some(r1)),
        };
        a.into_iter().chain(b)
    }
}

/// Solves `a·t² + b·t + c = 0`.
///
/// The equation is normalized by `a` before the discriminant is classified,
/// so the tolerance does not depend on the magnitude of the coefficients.
/// A near-zero `a` degrades to the linear equation `b·t + c = 0`; if that is
/// degenerate as well the result is [`QuadraticRoots::Empty`].
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if is_near_zero(a) {
        if is_near_zero(b) {
            return QuadraticRoots::Empty;
        }
        return QuadraticRoots::One(-c / b);
    }

    let p = b / a;
    let q = c / a;
    let discriminant = p * p - 4.0 * q;

    if discriminant < -TOLERANCE {
        QuadraticRoots::Empty
    } else if discriminant <= TOLERANCE {
        QuadraticRoots::One(-p * 0.5)
    } else {
        let sqrt = discriminant.sqrt();
        QuadraticRoots::Two((-p - sqrt) * 0.5, (-p + sqrt) * 0.5)
    }
}

/// Returns every distinct real root of `a·t³ + b·t² + c·t + d = 0`, unsorted.
///
/// A near-zero leading coefficient degrades to [`quadratic_roots`]. A
/// discriminant that vanishes relative to the size of its terms is a double
/// root: it is reported once, next to the simple root (or alone when all
/// three coincide).
#[must_use]
pub fn real_cubic_roots(a: f64, b: f64, c: f64, d: f64) -> [Option<f64>; 3] {
    if is_near_zero(a) {
        let mut out = [None; 3];
        for (slot, root) in out.iter_mut().zip(quadratic_roots(b, c, d).iter()) {
            *slot = Some(root);
        }
        return out;
    }

    let bn = b / a;
    let cn = c / a;
    let dn = d / a;
    let shift = -bn / 3.0;

    // Depressed cubic: q and r as in the Cardano formulation.
    let q = (3.0 * cn - bn * bn) / 9.0;
    let r = (9.0 * bn * cn - 27.0 * dn - 2.0 * bn * bn * bn) / 54.0;
    let q3 = q * q * q;
    let discriminant = q3 + r * r;

    if discriminant.abs() <= TOLERANCE * q3.abs().max(r * r) {
        let s = r.cbrt();
        let simple = shift + 2.0 * s;
        let double = shift - s;
        return [Some(simple), (!is_near_zero(simple - double)).then_some(double), None];
    }

    if discriminant > 0.0 {
        let sqrt = discriminant.sqrt();
        let s = (r + sqrt).cbrt();
        let t = (r - sqrt).cbrt();
        [Some(shift + s + t), None, None]
    } else {
        let cos_theta = (r / (-q3).sqrt()).clamp(-1.0, 1.0);
        let theta = cos_theta.acos();
        let scale = 2.0 * (-q).sqrt();
        [
            Some(scale * (theta / 3.0).cos() + shift),
            Some(scale * ((theta + 2.0 * PI) / 3.0).cos() + shift),
            Some(scale * ((theta + 4.0 * PI) / 3.0).cos() + shift),
        ]
    }
}

/// Up to three real cubic roots restricted to the curve parameter range `[0, 1]`.
///
/// Valid roots come first in ascending order and roots closer than
/// `TOLERANCE` are merged. Exhausted slots are `None`, so a root at `t = 0`
/// is never confused with "no more roots".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicRoots {
    roots: [Option<f64>; 3],
}

impl CubicRoots {
    /// Solves `a·t³ + b·t² + c·t + d = 0` and keeps the roots in `[0, 1]`.
    #[must_use]
    pub fn in_unit_interval(a: f64, b: f64, c: f64, d: f64) -> Self {
        let mut roots = real_cubic_roots(a, b, c, d)
            .map(|root| root.filter(|t| in_unit_interval(*t)).map(|t| t.clamp(0.0, 1.0)));
        roots.sort_by(|x, y| match (x, y) {
            (Some(x), Some(y)) => x.total_cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        // Near-equal roots count once, including two clamped onto one end.
        let mut merged = [None; 3];
        let mut len = 0;
        for t in roots.into_iter().flatten() {
            let repeated =
                len > 0 && merged[len - 1].is_some_and(|prev: f64| is_near_zero(t - prev));
            if !repeated {
                merged[len] = Some(t);
                len += 1;
            }
        }
        Self { roots: merged }
    }

    /// Returns the raw root slots.
    #[must_use]
    pub fn slots(&self) -> &[Option<f64>; 3] {
        &self.roots
    }

    /// Returns the number of valid roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().flatten().count()
    }

    /// Returns `true` if no root lies in `[0, 1]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots[0].is_none()
    }

    /// Iterates over the valid roots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.roots.iter().flatten().copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic_two_roots() {
        // (t - 1)(t - 3) = t² - 4t + 3
        assert_eq!(quadratic_roots(1.0, -4.0, 3.0), QuadraticRoots::Two(1.0, 3.0));
    }

    #[test]
    fn quadratic_double_root() {
        // 100·(t - 0.5)²
        assert_eq!(quadratic_roots(100.0, -100.0, 25.0), QuadraticRoots::One(0.5));
    }

    #[test]
    fn quadratic_no_real_root() {
        assert_eq!(quadratic_roots(1.0, 0.0, 1.0), QuadraticRoots::Empty);
    }

    #[test]
    fn quadratic_degrades_to_linear() {
        assert_eq!(quadratic_roots(0.0, 2.0, -1.0), QuadraticRoots::One(0.5));
        assert_eq!(quadratic_roots(0.0, 0.0, 1.0), QuadraticRoots::Empty);
    }

    #[test]
    fn cubic_three_distinct_roots() {
        // (t - 0.1)(t - 0.5)(t - 0.9)
        let (r0, r1, r2) = (0.1, 0.5, 0.9);
        let roots = CubicRoots::in_unit_interval(
            1.0,
            -(r0 + r1 + r2),
            r0 * r1 + r0 * r2 + r1 * r2,
            -r0 * r1 * r2,
        );
        assert_eq!(roots.len(), 3);
        let found: Vec<f64> = roots.iter().collect();
        assert_abs_diff_eq!(found[0], 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(found[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(found[2], 0.9, epsilon = 1e-9);
    }

    #[test]
    fn cubic_single_real_root_discards_complex_pair() {
        // (t - 0.25)(t² + 1)
        let roots = CubicRoots::in_unit_interval(1.0, -0.25, 1.0, -0.25);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots.slots()[0].unwrap(), 0.25, epsilon = 1e-9);
        assert!(roots.slots()[1].is_none());
        assert!(roots.slots()[2].is_none());
    }

    #[test]
    fn cubic_root_at_zero_is_valid() {
        // t(t - 2)(t - 3): only t = 0 lies in range.
        let roots = CubicRoots::in_unit_interval(1.0, -5.0, 6.0, 0.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots.slots()[0].unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_out_of_range_roots_trail_as_none() {
        // (t + 1)(t - 0.5)(t - 2)
        let roots = CubicRoots::in_unit_interval(1.0, -1.5, -1.5, 1.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots.slots()[0].unwrap(), 0.5, epsilon = 1e-9);
        assert_eq!(roots.slots()[1..], [None, None]);
    }

    #[test]
    fn cubic_degrades_to_quadratic() {
        let roots = CubicRoots::in_unit_interval(0.0, 1.0, -1.0, 0.21);
        let found: Vec<f64> = roots.iter().collect();
        assert_eq!(found.len(), 2);
        assert_abs_diff_eq!(found[0], 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(found[1], 0.7, epsilon = 1e-9);
    }

    #[test]
    fn cubic_double_root_with_inexact_coefficients() {
        // (t - 0.25)²(t - 2); 0.25 is not a root the solver hits exactly.
        let all = real_cubic_roots(1.0, -2.5, 1.0625, -0.125);
        assert_eq!(all.iter().flatten().count(), 2);

        let roots = CubicRoots::in_unit_interval(1.0, -2.5, 1.0625, -0.125);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots.slots()[0].unwrap(), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn cubic_double_root_scaled() {
        // 18t³ - 27t² + 9t - √3/2 touches zero at t = (3 - √3) / 6.
        let d = -(3.0_f64.sqrt()) / 2.0;
        let all = real_cubic_roots(18.0, -27.0, 9.0, d);
        let mut real: Vec<f64> = all.iter().flatten().copied().collect();
        real.sort_by(f64::total_cmp);
        assert_eq!(real.len(), 2);
        assert_abs_diff_eq!(real[0], (3.0 - 3.0_f64.sqrt()) / 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(real[1], 1.5 - (3.0 - 3.0_f64.sqrt()) / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn cubic_triple_root_reported_once() {
        // (t - 0.5)³
        let roots = CubicRoots::in_unit_interval(1.0, -1.5, 0.75, -0.125);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots.slots()[0].unwrap(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn cubic_double_root_kept_once() {
        // (t - 0.5)²(t - 2) = t³ - 3t² + 2.25t - 0.5
        let all = real_cubic_roots(1.0, -3.0, 2.25, -0.5);
        let mut real: Vec<f64> = all.iter().flatten().copied().collect();
        real.sort_by(f64::total_cmp);
        assert_eq!(real.len(), 2);
        assert_abs_diff_eq!(real[0], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(real[1], 2.0, epsilon = 1e-6);
    }
}
