use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Rect, Segment};
use crate::math::intersect_2d::line_line_intersection;
use crate::math::polygon_2d::{ensure_counter_clockwise, signed_area};
use crate::math::{cross, is_near_zero, points_coincide, Point2, TOLERANCE};

/// Clips a subject polygon against a convex clip polygon.
///
/// # Algorithm
///
/// Sutherland–Hodgman: the subject is clipped against each edge of the clip
/// polygon in turn. For every subject edge `(s, e)`:
///
/// 1. `e` inside: emit the crossing if `s` was outside, then emit `e`
/// 2. `e` outside, `s` inside: emit the crossing only
/// 3. both outside: emit nothing
///
/// Both polygons are normalized to counter-clockwise winding first, so
/// "inside" means left of, or on, the directed clip edge. The subject may be
/// concave; the clip polygon must be convex.
#[derive(Debug)]
pub struct PolygonClip {
    subject: Vec<Point2>,
    clip: Vec<Point2>,
}

impl PolygonClip {
    /// Creates a new clip operation.
    #[must_use]
    pub fn new(subject: Vec<Point2>, clip: Vec<Point2>) -> Self {
        Self { subject, clip }
    }

    /// Creates a clip operation against an axis-aligned viewport.
    #[must_use]
    pub fn rect(subject: Vec<Point2>, rect: &Rect) -> Self {
        Self::new(subject, rect.corners().to_vec())
    }

    /// Executes the clip.
    ///
    /// The result is wound counter-clockwise, has no consecutive duplicate
    /// vertices, and is empty when the polygons share no area.
    ///
    /// # Errors
    ///
    /// - `OperationError::InsufficientPoints` if either polygon has fewer than 3 points
    /// - `OperationError::InvalidInput` if the clip polygon encloses no area
    pub fn execute(&self) -> Result<Polygon> {
        check_len("subject", &self.subject)?;
        check_len("clip", &self.clip)?;
        if is_near_zero(signed_area(&self.clip)) {
            return Err(
                OperationError::InvalidInput("clip polygon has zero area".to_owned()).into(),
            );
        }

        let clip = ensure_counter_clockwise(self.clip.clone());
        let mut output = ensure_counter_clockwise(self.subject.clone());

        for i in 0..clip.len() {
            let edge = Segment::new(clip[i], clip[(i + 1) % clip.len()]);
            output = clip_against_edge(&output, &edge);
            if output.is_empty() {
                debug!(edge = i, "clip emptied the subject");
                return Ok(Polygon::default());
            }
        }

        let output = merge_coincident(output);
        if output.len() < 3 {
            debug!(points = output.len(), "clip result collapsed");
            return Ok(Polygon::default());
        }
        Ok(Polygon::new(output))
    }
}

fn check_len(role: &'static str, points: &[Point2]) -> Result<()> {
    if points.len() < 3 {
        debug!(role, actual = points.len(), "polygon rejected");
        return Err(OperationError::InsufficientPoints {
            role,
            actual: points.len(),
        }
        .into());
    }
    Ok(())
}

fn is_inside(p: &Point2, edge: &Segment) -> bool {
    cross(&edge.direction(), &(p - edge.start())) >= -TOLERANCE
}

fn clip_against_edge(input: &[Point2], edge: &Segment) -> Vec<Point2> {
    let Some(&last) = input.last() else {
        return Vec::new();
    };
    let mut output = Vec::with_capacity(input.len() + 1);
    let mut s = last;
    for &e in input {
        let s_in = is_inside(&s, edge);
        let e_in = is_inside(&e, edge);
        if e_in != s_in {
            // Parallel only within tolerance; the inside endpoint already covers it.
            if let Some(x) = line_line_intersection(&Segment::new(s, e), edge) {
                output.push(x);
            }
        }
        if e_in {
            output.push(e);
        }
        s = e;
    }
    output
}

/// Drops consecutive coincident vertices, including across the wraparound.
fn merge_coincident(points: Vec<Point2>) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|q| !points_coincide(q, &p)) {
            out.push(p);
        }
    }
    while out.len() > 1 && points_coincide(&out[0], &out[out.len() - 1]) {
        out.pop();
    }
    out
}
