//! Scoring and ranking heuristics for Cempasuchil facility datasets.
//!
//! The crate provides two independent, pure capabilities:
//! - **Relevance filtering** tokenises a free-text question, drops stopwords
//!   and short tokens, and ranks rows by weighted keyword occurrences in
//!   their specialties, equipment and full text. It implements
//!   [`FacilityFilter`](cempasuchil_core::FacilityFilter) so a
//!   [`Session`](cempasuchil_core::Session) can drive it.
//! - **Desert scoring** accumulates points from capacity, specialties and
//!   equipment into a [`DesertScore`](cempasuchil_core::DesertScore) capped
//!   at ten. It implements
//!   [`FacilityScorer`](cempasuchil_core::FacilityScorer).
//!
//! Vocabularies live in [`KeywordConfig`] so they can be swapped without
//! touching either algorithm.
//!
//! # Examples
//!
//! ```
//! use cempasuchil_core::{Dataset, FacilityRecord, SelectionMode};
//! use cempasuchil_scorer::{desert_score, filter_facilities};
//!
//! let dataset = Dataset::new(vec![
//!     FacilityRecord::new("Tema General").with_equipment("Portable X-Ray Unit"),
//!     FacilityRecord::new("Wa Polyclinic").with_equipment("Stethoscopes"),
//! ]);
//! let selection = filter_facilities(&dataset, "Where can I find X-Ray facilities?");
//! assert_eq!(selection.mode(), SelectionMode::Ranked);
//! assert_eq!(selection.indices().collect::<Vec<_>>(), vec![0]);
//!
//! let score = desert_score(&dataset.records()[0]);
//! assert_eq!(score.value(), 3);
//! ```

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use cempasuchil_core::{Dataset, DesertScore, FacilityRecord, Selection};

mod desert;
mod error;
mod keywords;
mod query;
mod relevance;

pub use desert::DesertScorer;
pub use error::KeywordConfigError;
pub use keywords::{
    CRITICAL_CARE_KEYWORDS, DEFAULT_FALLBACK_LIMIT, DEFAULT_RESULT_LIMIT, DEFAULT_STOPWORDS,
    IMAGING_KEYWORDS, KeywordConfig,
};
pub use query::extract_keywords;
pub use relevance::{RelevanceFilter, relevance_score};

static DEFAULT_CONFIG: LazyLock<KeywordConfig> = LazyLock::new(KeywordConfig::default);

/// Rank `dataset` against `query` using the default vocabularies.
#[must_use]
pub fn filter_facilities<'a>(dataset: &'a Dataset, query: &str) -> Selection<'a> {
    relevance::select(dataset, query, &DEFAULT_CONFIG)
}

/// Score one facility using the default vocabularies.
#[must_use]
pub fn desert_score(facility: &FacilityRecord) -> DesertScore {
    desert::score(facility, &DEFAULT_CONFIG)
}
