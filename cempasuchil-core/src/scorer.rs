//! Score facilities for map display.
//!
//! The `FacilityScorer` trait assigns a [`DesertScore`] to a
//! [`FacilityRecord`](crate::FacilityRecord).

use crate::{DesertScore, FacilityRecord};

/// Calculate a desert score for one facility.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and infallible:
/// malformed columns contribute nothing rather than failing.
///
/// # Examples
///
/// ```rust
/// use cempasuchil_core::{DesertScore, FacilityRecord, FacilityScorer};
///
/// struct FlatScorer;
///
/// impl FacilityScorer for FlatScorer {
///     fn score(&self, _facility: &FacilityRecord) -> DesertScore {
///         DesertScore::saturating(5)
///     }
/// }
///
/// let record = FacilityRecord::new("Clinic");
/// assert_eq!(FlatScorer.score(&record).value(), 5);
/// ```
pub trait FacilityScorer: Send + Sync {
    /// Return the score for `facility`.
    fn score(&self, facility: &FacilityRecord) -> DesertScore;
}
