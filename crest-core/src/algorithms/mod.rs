//! The analysis algorithms.
//!
//! Each function is pure and reentrant: inputs are borrowed, results are fresh
//! values, and no state survives a call. Recursion depth is logarithmic in the
//! input length for all three divide-and-conquer routines.

/// Divide-and-conquer closest pair of points.
pub mod closest;
/// Merge sort over caller-supplied labels.
pub mod sort;
/// 1-D maximum subarray.
pub mod subarray;
/// 2-D maximum sub-rectangle built on the 1-D routine.
pub mod subrectangle;
