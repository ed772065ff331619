//! Ordered, read-only collections of facility records.

use crate::FacilityRecord;

/// A snapshot of facility records sharing the fixed schema.
///
/// Datasets are replaced wholesale on reload and never edited in place.
///
/// # Examples
/// ```
/// use cempasuchil_core::{Dataset, FacilityRecord};
///
/// let dataset: Dataset = [FacilityRecord::new("A"), FacilityRecord::new("B")]
///     .into_iter()
///     .collect();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.get(1).map(|r| r.name.as_str()), Some("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<FacilityRecord>,
}

impl Dataset {
    /// Wrap an ordered list of records.
    #[must_use]
    pub const fn new(records: Vec<FacilityRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the dataset holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FacilityRecord> {
        self.records.get(index)
    }

    /// All rows in order.
    #[must_use]
    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FacilityRecord> {
        self.records.iter()
    }
}

impl FromIterator<FacilityRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = FacilityRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a FacilityRecord;
    type IntoIter = std::slice::Iter<'a, FacilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
