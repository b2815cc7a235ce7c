//! Time-series utilities applied before analysis.
//!
//! Modules include:
//! - `align`: inner-join two histories on date and order them chronologically
//! - `diff`: exact first differences of closing prices
/// Date alignment of two histories.
pub mod align;
/// First-difference transform.
pub mod diff;
