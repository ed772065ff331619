//! Approximate facility placement from free-text city names.
//!
//! Exact addresses are not available, so each facility is dropped near the
//! first known city whose name appears in its city text. Unknown cities
//! scatter around the national centre. Jitter keeps co-located markers
//! apart on the map.

use geo::Coord;
use rand::Rng;

/// Known cities with their `(latitude, longitude)`, in lookup order.
pub const GHANA_CITIES: [(&str, f64, f64); 11] = [
    ("Accra", 5.6037, -0.1870),
    ("Kumasi", 6.6885, -1.6244),
    ("Tamale", 9.4075, -0.8534),
    ("Takoradi", 4.8845, -1.7554),
    ("Cape Coast", 5.1315, -1.2795),
    ("Sunyani", 7.3399, -2.3268),
    ("Ho", 6.6124, 0.4674),
    ("Wa", 10.0601, -2.5099),
    ("Bolgatanga", 10.7856, -0.8514),
    ("Koforidua", 6.0941, -0.2609),
    ("Tema", 5.6698, -0.0166),
];

/// Fallback position for unrecognised cities.
pub const NATIONAL_CENTRE: Coord<f64> = Coord {
    x: -1.0232,
    y: 7.9465,
};

/// Degrees of jitter applied around a recognised city.
const CITY_JITTER: f64 = 0.02;
/// Degrees of jitter applied around the national centre.
const FALLBACK_JITTER: f64 = 0.5;

/// Resolves city text to map coordinates.
///
/// Coordinates follow the `geo` convention: `x` is longitude and `y` is
/// latitude.
///
/// # Examples
/// ```
/// use cempasuchil_data::CityLocator;
///
/// let locator = CityLocator::default();
/// let accra = locator.lookup("  greater accra ").expect("known city");
/// assert_eq!((accra.y, accra.x), (5.6037, -0.1870));
/// assert!(locator.lookup("Nkawkaw").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityLocator {
    cities: Vec<(String, Coord<f64>)>,
    fallback: Coord<f64>,
}

impl Default for CityLocator {
    fn default() -> Self {
        Self::new(
            GHANA_CITIES
                .iter()
                .map(|&(name, lat, lon)| (name, Coord { x: lon, y: lat })),
            NATIONAL_CENTRE,
        )
    }
}

impl CityLocator {
    /// Build a locator from `(name, coordinate)` entries in lookup order.
    pub fn new<I, S>(cities: I, fallback: Coord<f64>) -> Self
    where
        I: IntoIterator<Item = (S, Coord<f64>)>,
        S: Into<String>,
    {
        Self {
            cities: cities
                .into_iter()
                .map(|(name, coord)| (name.into(), coord))
                .collect(),
            fallback,
        }
    }

    /// Centre of the first known city named within `city`, without jitter.
    #[must_use]
    pub fn lookup(&self, city: &str) -> Option<Coord<f64>> {
        let normalised = title_case(city.trim());
        self.cities
            .iter()
            .find(|(name, _)| normalised.contains(name.as_str()))
            .map(|&(_, coord)| coord)
    }

    /// Jittered position for `city`, falling back to the national centre.
    pub fn locate<R: Rng + ?Sized>(&self, city: &str, rng: &mut R) -> Coord<f64> {
        match self.lookup(city) {
            Some(centre) => jitter(centre, CITY_JITTER, rng),
            None => jitter(self.fallback, FALLBACK_JITTER, rng),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "jitter offsets a coordinate by a bounded random amount"
)]
fn jitter<R: Rng + ?Sized>(centre: Coord<f64>, spread: f64, rng: &mut R) -> Coord<f64> {
    Coord {
        x: centre.x + rng.gen_range(-spread..spread),
        y: centre.y + rng.gen_range(-spread..spread),
    }
}

/// Capitalise the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so `"cape coast"`
/// becomes `"Cape Coast"` and `"KUMASI-NORTH"` becomes `"Kumasi-North"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if in_word {
            titled.extend(ch.to_lowercase());
        } else {
            titled.extend(ch.to_uppercase());
        }
        in_word = ch.is_alphabetic();
    }
    titled
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
    #![expect(clippy::float_arithmetic, reason = "tests measure jitter distances")]

    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[rstest]
    #[case("cape coast", "Cape Coast")]
    #[case("KUMASI-NORTH", "Kumasi-North")]
    #[case("o'reilly", "O'Reilly")]
    #[case("", "")]
    fn title_cases_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[rstest]
    #[case("Accra", "Accra")]
    #[case("  tema  ", "Tema")]
    #[case("Cape Coast Metropolitan", "Cape Coast")]
    #[case("Ho Municipal", "Ho")]
    #[case("Wa", "Wa")]
    fn finds_known_cities(#[case] city: &str, #[case] expected: &str) {
        let locator = CityLocator::default();
        let (_, lat, lon) = GHANA_CITIES
            .iter()
            .find(|(name, _, _)| *name == expected)
            .copied()
            .expect("expected city in table");
        assert_eq!(locator.lookup(city), Some(Coord { x: lon, y: lat }));
    }

    #[rstest]
    fn earlier_table_entries_win() {
        // "Ho" appears inside "Hohoe" and precedes "Wa" in the table.
        let locator = CityLocator::default();
        let coord = locator.lookup("Hohoe Wa Road").expect("matched city");
        assert_eq!(coord.y, 6.6124);
    }

    #[rstest]
    #[case("Nkawkaw")]
    #[case("")]
    #[case("Kintampo")]
    fn unknown_cities_have_no_lookup(#[case] city: &str) {
        assert!(CityLocator::default().lookup(city).is_none());
    }

    #[rstest]
    fn matching_is_by_substring() {
        let locator = CityLocator::default();
        assert!(locator.lookup("accraville").is_some());
    }

    #[rstest]
    fn known_cities_jitter_within_two_hundredths() {
        let locator = CityLocator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let coord = locator.locate("Kumasi", &mut rng);
            assert!((coord.y - 6.6885).abs() <= CITY_JITTER);
            assert!((coord.x + 1.6244).abs() <= CITY_JITTER);
        }
    }

    #[rstest]
    fn unknown_cities_scatter_around_the_centre() {
        let locator = CityLocator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let coord = locator.locate("Nkawkaw", &mut rng);
            assert!((coord.y - NATIONAL_CENTRE.y).abs() <= FALLBACK_JITTER);
            assert!((coord.x - NATIONAL_CENTRE.x).abs() <= FALLBACK_JITTER);
        }
    }

    #[rstest]
    fn custom_tables_replace_the_defaults() {
        let locator = CityLocator::new([("Lomé", Coord { x: 1.2255, y: 6.1375 })], NATIONAL_CENTRE);
        assert!(locator.lookup("Accra").is_none());
        assert_eq!(locator.lookup("lomé"), Some(Coord { x: 1.2255, y: 6.1375 }));
    }
}
