//! Facility records: one row of the health-facility dataset.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column names of the facility schema, in dataset order.
pub const COLUMNS: [&str; 6] = [
    "name",
    "city",
    "capacity",
    "specialties",
    "equipment",
    "numberDoctors",
];

/// A single health facility as delivered by the warehouse.
///
/// Every column is kept as text. Numeric columns are coerced on demand so a
/// malformed value never prevents the row from loading.
///
/// # Examples
/// ```
/// use cempasuchil_core::FacilityRecord;
///
/// let record = FacilityRecord::new("Korle Bu")
///     .with_city("Accra")
///     .with_capacity("120");
/// assert_eq!(record.capacity_value(), Some(120.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FacilityRecord {
    /// Display name; not guaranteed unique.
    pub name: String,
    /// Free-text city, used for display and coordinate lookup.
    pub city: String,
    /// Raw bed or patient capacity.
    pub capacity: String,
    /// Free-text list of specialties.
    pub specialties: String,
    /// Free-text list of equipment.
    pub equipment: String,
    /// Raw doctor head count.
    #[cfg_attr(feature = "serde", serde(rename = "numberDoctors"))]
    pub number_doctors: String,
}

impl FacilityRecord {
    /// Construct a record with the given name and empty remaining columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the raw capacity text.
    #[must_use]
    pub fn with_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = capacity.into();
        self
    }

    /// Set the specialties text.
    #[must_use]
    pub fn with_specialties(mut self, specialties: impl Into<String>) -> Self {
        self.specialties = specialties.into();
        self
    }

    /// Set the equipment text.
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = equipment.into();
        self
    }

    /// Set the raw doctor head count.
    #[must_use]
    pub fn with_number_doctors(mut self, number_doctors: impl Into<String>) -> Self {
        self.number_doctors = number_doctors.into();
        self
    }

    /// Capacity coerced to a number, or `None` when the text is not numeric.
    ///
    /// # Examples
    /// ```
    /// use cempasuchil_core::FacilityRecord;
    ///
    /// assert_eq!(FacilityRecord::new("a").with_capacity(" 30 ").capacity_value(), Some(30.0));
    /// assert_eq!(FacilityRecord::new("b").with_capacity("n/a").capacity_value(), None);
    /// ```
    #[must_use]
    pub fn capacity_value(&self) -> Option<f64> {
        coerce_numeric(&self.capacity)
    }

    /// Column values in [`COLUMNS`] order.
    #[must_use]
    pub fn column_values(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.city.as_str(),
            self.capacity.as_str(),
            self.specialties.as_str(),
            self.equipment.as_str(),
            self.number_doctors.as_str(),
        ]
    }

    /// Lowercased concatenation of every column, without separators.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.column_values().concat().to_lowercase()
    }
}

/// Coerce raw text into a number.
///
/// Surrounding whitespace is ignored. Text that does not parse, and `NaN`,
/// yield `None`.
#[must_use]
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case(" 7.5 ", Some(7.5))]
    #[case("-3", Some(-3.0))]
    #[case("", None)]
    #[case("None", None)]
    #[case("NaN", None)]
    #[case("twelve", None)]
    fn coerces_numeric_text(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(coerce_numeric(raw), expected);
    }

    #[rstest]
    fn search_text_concatenates_lowercased_columns() {
        let record = FacilityRecord::new("Ridge")
            .with_city("Accra")
            .with_capacity("10")
            .with_specialties("Surgery")
            .with_equipment("MRI")
            .with_number_doctors("4");
        assert_eq!(record.search_text(), "ridgeaccra10surgerymri4");
    }

    #[rstest]
    fn new_record_has_empty_columns() {
        let record = FacilityRecord::new("Clinic");
        assert_eq!(record.column_values(), ["Clinic", "", "", "", "", ""]);
    }
}
