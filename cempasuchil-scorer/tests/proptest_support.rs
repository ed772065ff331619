//! Proptest strategies for scorer property-based tests.
//!
//! Facilities are assembled from a small medical vocabulary so generated
//! queries regularly hit real rows, mixed with arbitrary text to exercise
//! malformed input.

use cempasuchil_core::{Dataset, FacilityRecord};
use proptest::prelude::*;

const VOCABULARY: [&str; 12] = [
    "surgery",
    "emergency",
    "maternity",
    "radiology",
    "x-ray",
    "mri",
    "ultrasound",
    "dialysis",
    "pharmacy",
    "paediatrics",
    "theatre",
    "laboratory",
];

/// Words the default configuration always discards.
pub const STOPWORD_QUERY_WORDS: [&str; 8] = [
    "where", "can", "i", "find", "the", "hospital", "to", "me",
];

/// Strategy for raw capacity text, valid or otherwise.
pub fn capacity_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-50_i32..500_i32).prop_map(|value| value.to_string()),
        (-50.0_f64..500.0_f64).prop_map(|value| format!("{value:.1}")),
        Just(String::new()),
        Just("None".to_owned()),
        "[a-z ]{0,8}",
    ]
}

/// Strategy for comma-separated text drawn mostly from the vocabulary.
pub fn listing_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => proptest::collection::vec(proptest::sample::select(VOCABULARY.to_vec()), 0..4)
            .prop_map(|words| words.join(", ")),
        1 => ".{0,24}",
    ]
}

/// Strategy for one facility.
pub fn facility_strategy() -> impl Strategy<Value = FacilityRecord> {
    (
        "[A-Za-z ]{1,12}",
        capacity_strategy(),
        listing_strategy(),
        listing_strategy(),
    )
        .prop_map(|(name, capacity, specialties, equipment)| {
            FacilityRecord::new(name)
                .with_city("Accra")
                .with_capacity(capacity)
                .with_specialties(specialties)
                .with_equipment(equipment)
        })
}

/// Strategy for a dataset of `min..=max` facilities.
pub fn dataset_strategy(min: usize, max: usize) -> impl Strategy<Value = Dataset> {
    proptest::collection::vec(facility_strategy(), min..=max).prop_map(Dataset::new)
}

/// Strategy for a question mixing vocabulary words and filler.
pub fn query_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::sample::select(VOCABULARY.to_vec()).prop_map(str::to_owned),
            proptest::sample::select(STOPWORD_QUERY_WORDS.to_vec()).prop_map(str::to_owned),
            "[a-z]{1,6}",
        ],
        1..5,
    )
    .prop_map(|words| format!("{}?", words.join(" ")))
}

/// Strategy for a question that reduces to no keywords.
pub fn stopword_query_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::sample::select(STOPWORD_QUERY_WORDS.to_vec()).prop_map(str::to_owned),
            "[a-z]{1,2}",
        ],
        1..6,
    )
    .prop_map(|words| words.join(" "))
}
