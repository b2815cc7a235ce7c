use crest_core::{CrestError, SortPolicy, argsort, merge_sort_indices};
use proptest::prelude::*;

/// Textbook recursive merge sort over (key, label) pairs that takes the left
/// element only when strictly smaller.
fn right_first_model(pairs: Vec<(i32, usize)>) -> Vec<(i32, usize)> {
    if pairs.len() <= 1 {
        return pairs;
    }
    let mid = pairs.len() / 2;
    let left = right_first_model(pairs[..mid].to_vec());
    let right = right_first_model(pairs[mid..].to_vec());
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::with_capacity(pairs.len());
    while i < left.len() && j < right.len() {
        if left[i].0 < right[j].0 {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

fn arb_policy() -> impl Strategy<Value = SortPolicy> {
    prop_oneof![Just(SortPolicy::Stable), Just(SortPolicy::PreferRight)]
}

proptest! {
    #[test]
    fn output_is_sorted_permutation(keys in proptest::collection::vec(-20i32..20, 0..200), policy in arb_policy()) {
        let out = argsort(&keys, policy).unwrap();
        prop_assert_eq!(out.len(), keys.len());

        let mut seen = out.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..keys.len()).collect::<Vec<_>>());

        for w in out.windows(2) {
            prop_assert!(keys[w[0]] <= keys[w[1]]);
        }
    }

    #[test]
    fn stable_policy_keeps_input_order_of_equal_keys(keys in proptest::collection::vec(0i32..5, 0..200)) {
        let out = argsort(&keys, SortPolicy::Stable).unwrap();
        let mut expected: Vec<usize> = (0..keys.len()).collect();
        expected.sort_by_key(|&i| keys[i]);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prefer_right_matches_reference_merge(keys in proptest::collection::vec(0i32..5, 0..200)) {
        let labels: Vec<usize> = (0..keys.len()).map(|i| i * 3 + 1).collect();
        let out = merge_sort_indices(&keys, &labels, SortPolicy::PreferRight).unwrap();
        let model: Vec<usize> = right_first_model(keys.iter().copied().zip(labels.iter().copied()).collect())
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        prop_assert_eq!(out, model);
    }

    #[test]
    fn policies_agree_on_distinct_keys(mut keys in proptest::collection::vec(-1000i32..1000, 0..100)) {
        keys.sort_unstable();
        keys.dedup();
        keys.reverse();
        let a = argsort(&keys, SortPolicy::Stable).unwrap();
        let b = argsort(&keys, SortPolicy::PreferRight).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a, (0..keys.len()).rev().collect::<Vec<_>>());
    }

    #[test]
    fn sorting_is_deterministic(keys in proptest::collection::vec(0i32..3, 0..100), policy in arb_policy()) {
        prop_assert_eq!(argsort(&keys, policy).unwrap(), argsort(&keys, policy).unwrap());
    }
}

#[test]
fn prefer_right_reorders_equal_keys_across_a_split() {
    // [a=1, b=1]: split into [a] | [b]; a < b is false, so b comes first
    assert_eq!(argsort(&[1, 1], SortPolicy::PreferRight).unwrap(), vec![1, 0]);
    assert_eq!(argsort(&[1, 1], SortPolicy::Stable).unwrap(), vec![0, 1]);
}

#[test]
fn dates_sort_chronologically() {
    use chrono::NaiveDate;
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    let dates = [d(3, 1), d(1, 15), d(2, 29), d(1, 2)];
    assert_eq!(
        argsort(&dates, SortPolicy::Stable).unwrap(),
        vec![3, 1, 2, 0]
    );
}

#[test]
fn incomparable_keys_fail_loudly() {
    let err = merge_sort_indices(&[f64::NAN, 1.0], &[0, 1], SortPolicy::PreferRight).unwrap_err();
    assert!(matches!(err, CrestError::InvariantViolation(_)));
}
