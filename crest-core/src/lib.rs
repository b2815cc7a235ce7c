//! crest-core
//!
//! Algorithms and time-series helpers behind the crest analysis.
//!
//! - `algorithms`: merge sort over labels, 1-D maximum subarray, 2-D maximum
//!   sub-rectangle, and closest pair of points.
//! - `timeseries`: date alignment of two histories and exact first differences.
//! - `source`: the `SeriesSource` trait implemented by history providers.
//! - `types`: value types re-exported from `crest-types`.
//!
//! Concurrency
//! -----------
//! Every function here is synchronous and pure over borrowed input. Calls are
//! reentrant and may run concurrently on separate inputs. The divide-and-conquer
//! routines recurse to a depth of about `log2(n)`, so the stack is not a concern
//! even at tens of millions of elements; the O(n) working buffers are.
//!
#![warn(missing_docs)]

/// The analysis algorithms.
pub mod algorithms;
mod matrix;
/// History provider trait.
pub mod source;
/// Time-series utilities for alignment and differencing.
pub mod timeseries;
pub mod types;

pub use algorithms::closest::closest_pair;
pub use algorithms::sort::{argsort, merge_sort_indices};
pub use algorithms::subarray::max_subarray;
pub use algorithms::subrectangle::{column_sums, max_subrectangle};
pub use matrix::GainMatrix;
pub use source::SeriesSource;
pub use timeseries::align::{AlignedPair, align_by_date};
pub use timeseries::diff::first_differences;
pub use types::*;
