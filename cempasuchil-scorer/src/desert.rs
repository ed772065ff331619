//! Medical desert scoring from capacity, specialties and equipment.
//!
//! Points accumulate in three independent steps and the total is capped at
//! ten:
//! - capacity above 20 earns 4, any positive capacity earns 2;
//! - a critical-care specialty earns 3, otherwise a specialty list longer
//!   than five characters earns 1;
//! - imaging equipment earns 1 and, separately, an equipment list longer
//!   than five characters earns 2.
//!
//! The specialty checks are exclusive while the equipment checks stack.

use cempasuchil_core::{DesertScore, FacilityRecord, FacilityScorer};

use crate::KeywordConfig;

const LARGE_CAPACITY: f64 = 20.0;
const LARGE_CAPACITY_POINTS: u32 = 4;
const SMALL_CAPACITY_POINTS: u32 = 2;
const CRITICAL_CARE_POINTS: u32 = 3;
const LISTED_SPECIALTY_POINTS: u32 = 1;
const IMAGING_POINTS: u32 = 1;
const LISTED_EQUIPMENT_POINTS: u32 = 2;
/// Text strictly longer than this many characters counts as a real list.
const LISTED_TEXT_CHARS: usize = 5;

/// Scores facilities with the desert heuristic.
///
/// # Examples
/// ```
/// use cempasuchil_core::{FacilityRecord, FacilityScorer};
/// use cempasuchil_scorer::DesertScorer;
///
/// let record = FacilityRecord::new("Korle Bu")
///     .with_capacity("50")
///     .with_specialties("Emergency Surgery")
///     .with_equipment("X-Ray, MRI, Ultrasound Machine");
/// assert_eq!(DesertScorer::default().score(&record).value(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesertScorer {
    config: KeywordConfig,
}

impl DesertScorer {
    /// Build a scorer using custom vocabularies.
    #[must_use]
    pub const fn new(config: KeywordConfig) -> Self {
        Self { config }
    }
}

impl FacilityScorer for DesertScorer {
    fn score(&self, facility: &FacilityRecord) -> DesertScore {
        score(facility, &self.config)
    }
}

pub(crate) fn score(facility: &FacilityRecord, config: &KeywordConfig) -> DesertScore {
    let points = capacity_points(facility.capacity_value())
        + specialty_points(&facility.specialties, config)
        + equipment_points(&facility.equipment, config);
    DesertScore::saturating(points)
}

fn capacity_points(capacity: Option<f64>) -> u32 {
    match capacity {
        Some(value) if value > LARGE_CAPACITY => LARGE_CAPACITY_POINTS,
        Some(value) if value > 0.0 => SMALL_CAPACITY_POINTS,
        _ => 0,
    }
}

fn specialty_points(specialties: &str, config: &KeywordConfig) -> u32 {
    let lowered = specialties.to_lowercase();
    if contains_any(&lowered, config.critical_care()) {
        CRITICAL_CARE_POINTS
    } else if is_listed(&lowered) {
        LISTED_SPECIALTY_POINTS
    } else {
        0
    }
}

fn equipment_points(equipment: &str, config: &KeywordConfig) -> u32 {
    let lowered = equipment.to_lowercase();
    let imaging = if contains_any(&lowered, config.imaging()) {
        IMAGING_POINTS
    } else {
        0
    };
    let listed = if is_listed(&lowered) {
        LISTED_EQUIPMENT_POINTS
    } else {
        0
    };
    imaging + listed
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}

fn is_listed(text: &str) -> bool {
    text.chars().count() > LISTED_TEXT_CHARS
}
