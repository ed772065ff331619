//! Data access for the Cempasuchil facility audit engine.
//!
//! Responsibilities:
//! - Load facility datasets from warehouse JSON exports.
//! - Place facilities on a map from their free-text city.
//! - Annotate datasets with desert scores and marker sizes for display.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `cempasuchil-scorer`).
//! - Keep randomness caller-seeded so annotated maps are reproducible.
//!
//! Invariants:
//! - Loading never reorders rows; row indices match the source export.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod annotate;
mod error;
pub mod fs;
mod load;
mod locate;

pub use annotate::{AnnotatedFacility, annotate};
pub use error::LoadError;
pub use load::{load_dataset, parse_dataset};
pub use locate::{CityLocator, GHANA_CITIES, NATIONAL_CENTRE, title_case};
