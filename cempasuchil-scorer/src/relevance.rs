//! Keyword relevance ranking over facility datasets.
//!
//! Each keyword contributes three points per occurrence in a row's
//! specialties, three per occurrence in its equipment and one per
//! occurrence anywhere in the row. Rows without any occurrence are dropped.
//! Queries that reduce to no keywords fall back to the largest facilities.

use std::cmp::Ordering;

use cempasuchil_core::{Dataset, FacilityFilter, FacilityRecord, Hit, Selection};
use log::debug;

use crate::{KeywordConfig, extract_keywords};

const SPECIALTY_WEIGHT: u32 = 3;
const EQUIPMENT_WEIGHT: u32 = 3;
const ROW_WEIGHT: u32 = 1;

/// Ranks facilities by keyword relevance to a free-text question.
///
/// # Examples
/// ```
/// use cempasuchil_core::{Dataset, FacilityFilter, FacilityRecord};
/// use cempasuchil_scorer::RelevanceFilter;
///
/// let dataset = Dataset::new(vec![
///     FacilityRecord::new("Ho Teaching").with_specialties("Maternity"),
///     FacilityRecord::new("Wa Regional").with_specialties("Surgery"),
/// ]);
/// let selection = RelevanceFilter::default().select(&dataset, "maternity wards");
/// let first = selection.hits().first().expect("one match");
/// assert_eq!(first.index, 0);
/// assert_eq!(first.relevance, Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelevanceFilter {
    config: KeywordConfig,
}

impl RelevanceFilter {
    /// Build a filter using custom vocabularies.
    #[must_use]
    pub const fn new(config: KeywordConfig) -> Self {
        Self { config }
    }

    /// The vocabularies in use.
    #[must_use]
    pub const fn config(&self) -> &KeywordConfig {
        &self.config
    }
}

impl FacilityFilter for RelevanceFilter {
    fn select<'a>(&self, dataset: &'a Dataset, query: &str) -> Selection<'a> {
        select(dataset, query, &self.config)
    }
}

pub(crate) fn select<'a>(dataset: &'a Dataset, query: &str, config: &KeywordConfig) -> Selection<'a> {
    if dataset.is_empty() || query.trim().is_empty() {
        return Selection::blank();
    }

    let keywords = extract_keywords(query, config);
    debug!("extracted keywords {keywords:?} from query");
    if keywords.is_empty() {
        return largest_facilities(dataset, config.fallback_limit());
    }

    let mut hits: Vec<Hit<'a>> = dataset
        .iter()
        .enumerate()
        .filter_map(|(index, facility)| {
            let relevance = relevance_score(facility, &keywords);
            (relevance > 0).then_some(Hit {
                index,
                facility,
                relevance: Some(relevance),
            })
        })
        .collect();
    if hits.is_empty() {
        return Selection::no_matches();
    }

    // `sort_by` is stable, so equal scores keep dataset order.
    hits.sort_by(|left, right| right.relevance.cmp(&left.relevance));
    hits.truncate(config.result_limit());
    Selection::ranked(hits)
}

/// Total keyword relevance of one facility.
///
/// `keywords` must already be lowercase; matching is literal and counts
/// non-overlapping occurrences.
///
/// # Examples
/// ```
/// use cempasuchil_core::FacilityRecord;
/// use cempasuchil_scorer::relevance_score;
///
/// let record = FacilityRecord::new("Tema").with_equipment("MRI, mri");
/// // Two equipment hits (3 each) plus two full-row hits (1 each).
/// assert_eq!(relevance_score(&record, &["mri".to_owned()]), 8);
/// ```
#[must_use]
pub fn relevance_score(facility: &FacilityRecord, keywords: &[String]) -> u32 {
    let specialties = facility.specialties.to_lowercase();
    let equipment = facility.equipment.to_lowercase();
    let row = facility.search_text();

    keywords.iter().fold(0_u32, |total, keyword| {
        total
            .saturating_add(SPECIALTY_WEIGHT.saturating_mul(occurrences(&specialties, keyword)))
            .saturating_add(EQUIPMENT_WEIGHT.saturating_mul(occurrences(&equipment, keyword)))
            .saturating_add(ROW_WEIGHT.saturating_mul(occurrences(&row, keyword)))
    })
}

fn occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    u32::try_from(haystack.matches(needle).count()).unwrap_or(u32::MAX)
}

fn largest_facilities(dataset: &Dataset, limit: usize) -> Selection<'_> {
    let mut hits: Vec<(Option<f64>, Hit<'_>)> = dataset
        .iter()
        .enumerate()
        .map(|(index, facility)| {
            (
                facility.capacity_value(),
                Hit {
                    index,
                    facility,
                    relevance: None,
                },
            )
        })
        .collect();
    hits.sort_by(|(left, _), (right, _)| descending_capacity(*left, *right));
    debug!("no keywords extracted; returning {limit} largest facilities");
    Selection::default_view(hits.into_iter().take(limit).map(|(_, hit)| hit).collect())
}

/// Order capacities largest first with unusable values last.
fn descending_capacity(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => r.partial_cmp(&l).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
