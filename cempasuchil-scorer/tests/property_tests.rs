//! Property-based tests for the relevance filter and desert scorer.
//!
//! # Invariants tested
//!
//! - **Blank input:** blank queries and empty datasets select nothing.
//! - **Fallback:** keyword-free queries return the largest facilities.
//! - **Bounds:** ranked output never exceeds twenty rows or the input size.
//! - **Ordering:** ranked output is sorted by descending positive relevance.
//! - **Subset:** every hit indexes a distinct source row.
//! - **Score range:** desert scores stay in `0..=10` for any input.
//! - **Monotonicity:** adding a critical-care keyword never lowers a score.

mod proptest_support;

use std::cmp::Ordering;
use std::collections::HashSet;

use cempasuchil_core::{Dataset, FacilityRecord, SelectionMode};
use cempasuchil_scorer::{desert_score, filter_facilities};
use proptest::prelude::*;

use proptest_support::{
    dataset_strategy, facility_strategy, query_strategy, stopword_query_strategy,
};

fn capacity_order(dataset: &Dataset) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    let capacity = |index: usize| dataset.get(index).and_then(FacilityRecord::capacity_value);
    indices.sort_by(|&left, &right| match (capacity(left), capacity(right)) {
        (Some(l), Some(r)) => r.partial_cmp(&l).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    indices
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: whitespace-only queries select nothing.
    #[test]
    fn blank_queries_select_nothing(
        dataset in dataset_strategy(1, 12),
        query in "[ \t]{0,4}",
    ) {
        let selection = filter_facilities(&dataset, &query);
        prop_assert!(selection.is_empty());
        prop_assert_eq!(selection.mode(), SelectionMode::Blank);
    }

    /// Property: an empty dataset selects nothing for any query.
    #[test]
    fn empty_dataset_selects_nothing(query in ".{0,40}") {
        let dataset = Dataset::default();
        prop_assert!(filter_facilities(&dataset, &query).is_empty());
    }

    /// Property: keyword-free queries return the fifteen largest facilities.
    #[test]
    fn stopword_queries_return_largest_facilities(
        dataset in dataset_strategy(1, 30),
        query in stopword_query_strategy(),
    ) {
        let selection = filter_facilities(&dataset, &query);
        prop_assert_eq!(selection.mode(), SelectionMode::DefaultView);
        let expected: Vec<usize> = capacity_order(&dataset).into_iter().take(15).collect();
        prop_assert_eq!(selection.indices().collect::<Vec<_>>(), expected);
    }

    /// Property: ranked output is bounded, sorted and a subset of the input.
    #[test]
    fn ranked_output_is_bounded_sorted_and_positive(
        dataset in dataset_strategy(0, 40),
        query in query_strategy(),
    ) {
        let selection = filter_facilities(&dataset, &query);
        prop_assert!(selection.len() <= 20);
        prop_assert!(selection.len() <= dataset.len());

        let mut seen = HashSet::new();
        for hit in selection.hits() {
            prop_assert!(hit.index < dataset.len());
            prop_assert!(seen.insert(hit.index), "duplicate row {}", hit.index);
            prop_assert_eq!(dataset.get(hit.index), Some(hit.facility));
        }

        if selection.mode() == SelectionMode::Ranked {
            let scores: Vec<u32> = selection
                .hits()
                .iter()
                .map(|hit| hit.relevance.unwrap_or(0))
                .collect();
            prop_assert!(scores.iter().all(|&score| score > 0));
            prop_assert!(scores.is_sorted_by(|left, right| left >= right));
        }
    }

    /// Property: desert scores stay within `0..=10`.
    #[test]
    fn desert_score_is_bounded(facility in facility_strategy()) {
        let score = desert_score(&facility);
        prop_assert!(score.value() <= 10);
        prop_assert!(score.map_size() >= 2);
    }

    /// Property: adding a critical-care keyword never lowers the score.
    #[test]
    fn critical_care_keyword_never_lowers_score(
        facility in facility_strategy(),
        keyword in proptest::sample::select(vec!["surgery", "emergency", "maternity", "radiology"]),
    ) {
        let before = desert_score(&facility);
        let specialties = format!("{} {keyword}", facility.specialties);
        let after = desert_score(&facility.clone().with_specialties(specialties));
        prop_assert!(after >= before);
    }
}
