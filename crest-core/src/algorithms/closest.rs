//! Divide-and-conquer closest pair of points.

use core::cmp::Ordering;

use crate::{ClosestPairResult, CrestError, Point2D};

/// Find the two closest points of `points` by Euclidean distance.
///
/// Points are sorted by x and split at the median; each half is solved
/// recursively (brute force at three points or fewer). The pair from the left
/// half is kept when both halves tie. Points within `delta` of the dividing line
/// form a strip that is sorted by y and scanned while the y-gap stays below the
/// best distance; a strip pair replaces the half result only when strictly closer.
///
/// ```
/// use crest_core::{Point2D, closest_pair};
///
/// let pts = [Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0), Point2D::new(0.5, 0.5)];
/// let best = closest_pair(&pts).unwrap();
/// assert_eq!((best.a, best.b), (pts[0], pts[2]));
/// assert!((best.distance - 0.5f64.hypot(0.5)).abs() < 1e-12);
/// ```
///
/// # Errors
/// Returns `InvalidInput` for fewer than two points or a non-finite coordinate.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "crest_core::closest_pair",
        level = "debug",
        skip(points),
        fields(len = points.len()),
    )
)]
pub fn closest_pair(points: &[Point2D]) -> Result<ClosestPairResult, CrestError> {
    if points.len() < 2 {
        return Err(CrestError::invalid_input(format!(
            "closest pair needs at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(CrestError::invalid_input(format!(
            "non-finite point ({}, {}) at index {i}",
            points[i].x, points[i].y
        )));
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| by_coord(a.x, b.x));
    Ok(recurse(&sorted))
}

// Inputs are finite, so `partial_cmp` always answers.
fn by_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn pair(a: Point2D, b: Point2D) -> ClosestPairResult {
    ClosestPairResult {
        a,
        b,
        distance: a.distance(&b),
    }
}

/// All-pairs scan; `points.len() >= 2`.
fn brute_force(points: &[Point2D]) -> ClosestPairResult {
    let mut best = pair(points[0], points[1]);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            if d < best.distance {
                best = pair(points[i], points[j]);
            }
        }
    }
    best
}

/// `sorted` is ordered by x and holds at least two points.
fn recurse(sorted: &[Point2D]) -> ClosestPairResult {
    let n = sorted.len();
    if n <= 3 {
        return brute_force(sorted);
    }

    let mid = n / 2;
    let line = sorted[mid].x;
    let left = recurse(&sorted[..mid]);
    let right = recurse(&sorted[mid..]);

    let best = if left.distance <= right.distance {
        left
    } else {
        right
    };
    let delta = best.distance;

    let mut strip: Vec<Point2D> = sorted
        .iter()
        .filter(|p| (p.x - line).abs() < delta)
        .copied()
        .collect();
    strip.sort_by(|a, b| by_coord(a.y, b.y));

    closest_in_strip(&strip, delta).unwrap_or(best)
}

/// Closest strip pair strictly under `delta`, if any.
fn closest_in_strip(strip: &[Point2D], delta: f64) -> Option<ClosestPairResult> {
    let mut min_distance = delta;
    let mut found = None;
    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if q.y - p.y >= min_distance {
                break;
            }
            let d = p.distance(q);
            if d < min_distance {
                min_distance = d;
                found = Some(pair(*p, *q));
            }
        }
    }
    found
}
