//! Value types produced and consumed by the analysis algorithms.

use serde::{Deserialize, Serialize};

/// A point in the (volume, price) plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate (traded volume).
    pub x: f64,
    /// Vertical coordinate (closing price).
    pub y: f64,
}

impl Point2D {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Closed index range `[start, end]` into a series together with its sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubarrayResult {
    /// First index of the range.
    pub start: usize,
    /// Last index of the range (inclusive, `end >= start`).
    pub end: usize,
    /// Sum of the elements in the range.
    pub sum: f64,
}

impl SubarrayResult {
    /// Number of elements covered by the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a result never describes an empty range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Sub-rectangle `[top, bottom] x [left, right]` of a matrix with its total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubrectangleResult {
    /// First row (inclusive).
    pub top: usize,
    /// Last row (inclusive).
    pub bottom: usize,
    /// First column (inclusive).
    pub left: usize,
    /// Last column (inclusive).
    pub right: usize,
    /// Sum of every cell inside the rectangle.
    pub sum: f64,
}

/// The two closest points of a set and their distance.
///
/// `a` and `b` are copies; they may be equal when the set holds duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPairResult {
    /// First point of the pair.
    pub a: Point2D,
    /// Second point of the pair.
    pub b: Point2D,
    /// Euclidean distance between `a` and `b`.
    pub distance: f64,
}
