use std::collections::{BTreeSet, HashMap};

use chrono::{Days, NaiveDate};
use crest_core::{
    CrestError, Decimal, DuplicateDates, PriceRecord, PriceSeries, SortPolicy, align_by_date,
    first_differences,
};
use proptest::prelude::*;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset)
}

/// Records with the given day offsets; the volume carries the input position.
fn series(symbol: &str, offsets: &[u64]) -> PriceSeries {
    let records = offsets
        .iter()
        .enumerate()
        .map(|(i, &o)| PriceRecord::new(day(o), Decimal::from(100 + o), i as u64))
        .collect();
    PriceSeries::new(symbol, records)
}

fn counts(offsets: &[u64]) -> HashMap<u64, usize> {
    let mut out = HashMap::new();
    for &o in offsets {
        *out.entry(o).or_insert(0) += 1;
    }
    out
}

fn arb_offsets() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(0u64..15, 0..30)
}

proptest! {
    #[test]
    fn first_wins_joins_each_common_date_once(a in arb_offsets(), b in arb_offsets()) {
        let common: BTreeSet<u64> = a.iter().copied().filter(|o| b.contains(o)).collect();
        let out = align_by_date(&series("A", &a), &series("B", &b), DuplicateDates::FirstWins, SortPolicy::Stable);
        if common.is_empty() {
            prop_assert!(matches!(out, Err(CrestError::InvalidInput(_))));
            return Ok(());
        }
        let out = out.unwrap();
        let expected: Vec<NaiveDate> = common.iter().map(|&o| day(o)).collect();
        prop_assert_eq!(&out.dates, &expected);
        for i in 0..out.len() {
            prop_assert_eq!(out.first[i].date, out.dates[i]);
            prop_assert_eq!(out.second[i].date, out.dates[i]);
        }
        // the first occurrence in each input survives
        for r in &out.first {
            let pos = usize::try_from(r.volume).unwrap();
            prop_assert_eq!(a.iter().position(|&o| day(o) == r.date), Some(pos));
        }
        for r in &out.second {
            let pos = usize::try_from(r.volume).unwrap();
            prop_assert_eq!(b.iter().position(|&o| day(o) == r.date), Some(pos));
        }
    }

    #[test]
    fn keep_all_pairs_every_match(a in arb_offsets(), b in arb_offsets(), prefer_right in any::<bool>()) {
        let policy = if prefer_right { SortPolicy::PreferRight } else { SortPolicy::Stable };
        let (ca, cb) = (counts(&a), counts(&b));
        let expected: usize = ca.iter().map(|(o, n)| n * cb.get(o).copied().unwrap_or(0)).sum();

        let out = align_by_date(&series("A", &a), &series("B", &b), DuplicateDates::KeepAll, policy);
        if expected == 0 {
            prop_assert!(out.is_err());
            return Ok(());
        }
        let out = out.unwrap();
        prop_assert_eq!(out.len(), expected);
        for w in out.dates.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn stable_keep_all_preserves_join_order(a in arb_offsets(), b in arb_offsets()) {
        let Ok(out) = align_by_date(&series("A", &a), &series("B", &b), DuplicateDates::KeepAll, SortPolicy::Stable) else {
            return Ok(());
        };
        // within a date: first's input order, then second's input order
        for i in 1..out.len() {
            if out.dates[i - 1] == out.dates[i] {
                let prev = (out.first[i - 1].volume, out.second[i - 1].volume);
                let cur = (out.first[i].volume, out.second[i].volume);
                prop_assert!(prev < cur);
            }
        }
    }
}

#[test]
fn unsorted_inputs_come_out_chronological() {
    let a = series("A", &[3, 1, 2, 0]);
    let b = series("B", &[2, 0, 9, 3]);
    let out = align_by_date(&a, &b, DuplicateDates::FirstWins, SortPolicy::Stable).unwrap();
    assert_eq!(out.dates, vec![day(0), day(2), day(3)]);
    assert_eq!(
        out.first.iter().map(|r| r.close).collect::<Vec<_>>(),
        vec![Decimal::from(100), Decimal::from(102), Decimal::from(103)]
    );
    assert_eq!(out.second.iter().map(|r| r.volume).collect::<Vec<_>>(), vec![1, 0, 3]);
}

#[test]
fn prefer_right_reorders_repeated_dates() {
    let a = series("A", &[5, 5]);
    let b = series("B", &[5]);

    let stable = align_by_date(&a, &b, DuplicateDates::KeepAll, SortPolicy::Stable).unwrap();
    assert_eq!(stable.first.iter().map(|r| r.volume).collect::<Vec<_>>(), vec![0, 1]);

    let right = align_by_date(&a, &b, DuplicateDates::KeepAll, SortPolicy::PreferRight).unwrap();
    assert_eq!(right.first.iter().map(|r| r.volume).collect::<Vec<_>>(), vec![1, 0]);
}

#[test]
fn keep_all_with_prefer_right_pairs_every_match_right_first() {
    let a = series("A", &[5, 5]);
    let b = series("B", &[5, 5]);
    let volumes = |out: &crest_core::AlignedPair| {
        (
            out.first.iter().map(|r| r.volume).collect::<Vec<_>>(),
            out.second.iter().map(|r| r.volume).collect::<Vec<_>>(),
        )
    };

    let stable = align_by_date(&a, &b, DuplicateDates::KeepAll, SortPolicy::Stable).unwrap();
    assert_eq!(stable.dates, vec![day(5); 4]);
    assert_eq!(volumes(&stable), (vec![0, 0, 1, 1], vec![0, 1, 0, 1]));

    let right = align_by_date(&a, &b, DuplicateDates::KeepAll, SortPolicy::PreferRight).unwrap();
    assert_eq!(volumes(&right), (vec![1, 1, 0, 0], vec![1, 0, 1, 0]));
}

#[test]
fn disjoint_histories_fail() {
    let err = align_by_date(
        &series("A", &[0, 1]),
        &series("B", &[5, 6]),
        DuplicateDates::FirstWins,
        SortPolicy::Stable,
    )
    .unwrap_err();
    assert!(matches!(err, CrestError::InvalidInput(_)));
}

#[test]
fn differences_are_exact() {
    let values: Vec<Decimal> = ["10.10", "10.30", "10.20", "10.20"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(first_differences(&values).unwrap(), vec![0.2, -0.1, 0.0]);
}

#[test]
fn differences_need_two_values() {
    assert!(matches!(
        first_differences(&[Decimal::ONE]),
        Err(CrestError::InvalidInput(_))
    ));
    assert!(matches!(first_differences(&[]), Err(CrestError::InvalidInput(_))));
}
