//! Facade crate for the Cempasuchil facility audit engine.
//!
//! This crate re-exports the core domain types and exposes the keyword
//! scorer and dataset tooling behind feature flags.

#![forbid(unsafe_code)]

pub use cempasuchil_core::{
    AnswerError, AnswerRequest, AnswerService, COLUMNS, ChatMessage, Dataset, DesertScore,
    FacilityFilter, FacilityRecord, FacilityScorer, Hit, Role, Selection, SelectionMode, Session,
};

#[cfg(feature = "scorer")]
pub use cempasuchil_scorer::{
    DesertScorer, KeywordConfig, KeywordConfigError, RelevanceFilter, desert_score,
    filter_facilities,
};

#[cfg(feature = "data")]
pub use cempasuchil_data::{
    AnnotatedFacility, CityLocator, LoadError, annotate, load_dataset, parse_dataset,
};
