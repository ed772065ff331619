//! Core domain types for the Cempasuchil facility audit engine.
//!
//! The crate holds the facility schema, the dataset container and the two
//! seams the rest of the workspace plugs into:
//! - [`FacilityScorer`] assigns a bounded [`DesertScore`] to one record.
//! - [`FacilityFilter`] ranks a [`Dataset`] against a free-text query and
//!   returns a [`Selection`] that refers back to rows by index.
//!
//! Chat orchestration lives in [`session`]. It owns its state explicitly and
//! talks to the language model through the [`AnswerService`] trait.
//!
//! Invariants:
//! - Records never hold null text; absent values are empty strings.
//! - Selections never synthesise rows; every hit indexes the source dataset.
//! - No global mutable state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dataset;
mod facility;
mod filter;
mod score;
mod scorer;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dataset::Dataset;
pub use facility::{COLUMNS, FacilityRecord, coerce_numeric};
pub use filter::{FacilityFilter, Hit, Selection, SelectionMode};
pub use score::DesertScore;
pub use scorer::FacilityScorer;
pub use session::{AnswerError, AnswerRequest, AnswerService, ChatMessage, Role, Session};
