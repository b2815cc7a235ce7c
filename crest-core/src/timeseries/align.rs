use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use chrono::NaiveDate;

use crate::algorithms::sort::merge_sort_indices;
use crate::{CrestError, DuplicateDates, PriceRecord, PriceSeries, SortPolicy};

/// Two histories restricted to their common dates, in chronological order.
///
/// `dates[i]`, `first[i].date` and `second[i].date` are always equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    /// Joined dates, non-decreasing.
    pub dates: Vec<NaiveDate>,
    /// Records of the first input, one per joined date.
    pub first: Vec<PriceRecord>,
    /// Records of the second input, one per joined date.
    pub second: Vec<PriceRecord>,
}

impl AlignedPair {
    /// Number of joined rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no row was joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Inner-join two histories on date and order the result chronologically.
///
/// - Rows come out in `first`'s input order, each matched with the rows of
///   `second` sharing its date in `second`'s input order.
/// - `DuplicateDates::FirstWins` drops every repeat of a date inside either
///   input before joining; `KeepAll` pairs every match.
/// - The joined rows are then ordered by date with
///   [`merge_sort_indices`] under `policy`.
///
/// # Errors
/// - `InvalidInput` if the inputs share no date.
/// - `InvariantViolation` from the sort (not reachable for dates).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "crest_core::align_by_date",
        skip(first, second),
        fields(first = %first.symbol, second = %second.symbol),
    )
)]
pub fn align_by_date(
    first: &PriceSeries,
    second: &PriceSeries,
    duplicates: DuplicateDates,
    policy: SortPolicy,
) -> Result<AlignedPair, CrestError> {
    let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
    let mut dropped = 0usize;
    for (i, r) in second.records.iter().enumerate() {
        match by_date.entry(r.date) {
            Entry::Vacant(v) => {
                v.insert(vec![i]);
            }
            Entry::Occupied(mut o) => match duplicates {
                DuplicateDates::KeepAll => o.get_mut().push(i),
                _ => dropped += 1,
            },
        }
    }

    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut joined: Vec<(usize, usize)> = Vec::new();
    for (i, r) in first.records.iter().enumerate() {
        if !seen.insert(r.date) && duplicates == DuplicateDates::FirstWins {
            dropped += 1;
            continue;
        }
        if let Some(matches) = by_date.get(&r.date) {
            joined.extend(matches.iter().map(|&j| (i, j)));
        }
    }

    #[cfg(feature = "tracing")]
    if dropped > 0 {
        tracing::warn!(dropped, "dropped records with repeated dates");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = dropped;

    if joined.is_empty() {
        return Err(CrestError::invalid_input(format!(
            "{} and {} share no dates",
            first.symbol, second.symbol
        )));
    }

    let dates: Vec<NaiveDate> = joined.iter().map(|&(i, _)| first.records[i].date).collect();
    let labels: Vec<usize> = (0..joined.len()).collect();
    let order = merge_sort_indices(&dates, &labels, policy)?;

    let mut out = AlignedPair {
        dates: Vec::with_capacity(order.len()),
        first: Vec::with_capacity(order.len()),
        second: Vec::with_capacity(order.len()),
    };
    for k in order {
        let (i, j) = joined[k];
        out.dates.push(dates[k]);
        out.first.push(first.records[i].clone());
        out.second.push(second.records[j].clone());
    }
    Ok(out)
}
