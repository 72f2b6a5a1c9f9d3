use super::{Point2, TOLERANCE};

/// Tri-state classification of a point against a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Outside,
    Boundary,
    Inside,
}

impl Inclusion {
    /// Returns `true` for `Inside` or `Boundary`.
    #[must_use]
    pub fn is_covered(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area(points) > 0.0
}

/// Returns the polygon wound counter-clockwise, reversing it if needed.
#[must_use]
pub fn ensure_counter_clockwise(mut points: Vec<Point2>) -> Vec<Point2> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}

/// Classifies a point against a closed polygon.
///
/// Crossing-number walk after Hormann and Agathos: a point on a vertex, on a
/// horizontal edge, or with a vanishing edge determinant is reported as
/// `Boundary` immediately. Polygons with fewer than 3 points have no interior
/// and always report `Outside`.
#[must_use]
pub fn point_in_polygon(p: &Point2, points: &[Point2]) -> Inclusion {
    let n = points.len();
    if n < 3 {
        return Inclusion::Outside;
    }

    let mut inside = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];

        if (b.y - p.y).abs() <= TOLERANCE {
            if (b.x - p.x).abs() <= TOLERANCE {
                return Inclusion::Boundary;
            }
            if (a.y - p.y).abs() <= TOLERANCE && ((b.x > p.x) == (a.x < p.x)) {
                return Inclusion::Boundary;
            }
        }

        if (a.y < p.y) == (b.y < p.y) {
            continue;
        }

        if a.x >= p.x {
            if b.x > p.x {
                inside = !inside;
                continue;
            }
        } else if b.x <= p.x {
            continue;
        }

        // The edge straddles the point horizontally: decide by side.
        let det = (a.x - p.x) * (b.y - p.y) - (b.x - p.x) * (a.y - p.y);
        if det.abs() <= TOLERANCE {
            return Inclusion::Boundary;
        }
        if (det > 0.0) == (b.y > a.y) {
            inside = !inside;
        }
    }

    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies a point against a set of polygons using the even/odd rule.
///
/// Being inside an even number of member polygons means being in a hole.
/// Short-circuits to `Boundary` as soon as any member reports it.
#[must_use]
pub fn point_in_polygon_set<I, P>(p: &Point2, polygons: I) -> Inclusion
where
    I: IntoIterator<Item = P>,
    P: AsRef<[Point2]>,
{
    let mut inside = false;
    for polygon in polygons {
        match point_in_polygon(p, polygon.as_ref()) {
            Inclusion::Boundary => return Inclusion::Boundary,
            Inclusion::Inside => inside = !inside,
            Inclusion::Outside => {}
        }
    }
    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}
