//! Dataset annotation for map display.

use cempasuchil_core::{Dataset, DesertScore, FacilityRecord, FacilityScorer};
use geo::Coord;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Serialize, Serializer};

use crate::CityLocator;

/// A facility with its map position and desert score.
///
/// Serialises as the record's columns followed by `lat`, `lon`,
/// `Desert Score` and `MapSize`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFacility {
    /// Row index in the source dataset.
    pub index: usize,
    /// The facility as loaded.
    pub record: FacilityRecord,
    /// Approximate position; `x` is longitude, `y` is latitude.
    pub location: Coord<f64>,
    /// Heuristic desert score.
    pub desert_score: DesertScore,
}

impl AnnotatedFacility {
    /// Marker size for the map.
    #[must_use]
    pub const fn map_size(&self) -> u8 {
        self.desert_score.map_size()
    }
}

#[derive(Serialize)]
struct AnnotatedRow<'a> {
    #[serde(flatten)]
    record: &'a FacilityRecord,
    lat: f64,
    lon: f64,
    #[serde(rename = "Desert Score")]
    desert_score: DesertScore,
    #[serde(rename = "MapSize")]
    map_size: u8,
}

impl Serialize for AnnotatedFacility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnnotatedRow {
            record: &self.record,
            lat: self.location.y,
            lon: self.location.x,
            desert_score: self.desert_score,
            map_size: self.map_size(),
        }
        .serialize(serializer)
    }
}

/// Score and place every facility, preserving dataset order.
///
/// The same `seed` always yields the same coordinates.
///
/// # Examples
/// ```
/// use cempasuchil_core::{Dataset, DesertScore, FacilityRecord, FacilityScorer};
/// use cempasuchil_data::{CityLocator, annotate};
///
/// struct Flat;
///
/// impl FacilityScorer for Flat {
///     fn score(&self, _: &FacilityRecord) -> DesertScore {
///         DesertScore::saturating(5)
///     }
/// }
///
/// let dataset = Dataset::new(vec![FacilityRecord::new("Korle Bu").with_city("Accra")]);
/// let rows = annotate(&dataset, &Flat, &CityLocator::default(), 42);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].map_size(), 10);
/// ```
pub fn annotate<S: FacilityScorer + ?Sized>(
    dataset: &Dataset,
    scorer: &S,
    locator: &CityLocator,
    seed: u64,
) -> Vec<AnnotatedFacility> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let annotated: Vec<AnnotatedFacility> = dataset
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if !record.capacity.trim().is_empty() && record.capacity_value().is_none() {
                warn!(
                    "facility {index} ({}) has non-numeric capacity {:?}",
                    record.name, record.capacity
                );
            }
            AnnotatedFacility {
                index,
                record: record.clone(),
                location: locator.locate(&record.city, &mut rng),
                desert_score: scorer.score(record),
            }
        })
        .collect();
    info!("annotated {} facilities", annotated.len());
    annotated
}
