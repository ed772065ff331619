//! Dataset loading from warehouse JSON exports.
//!
//! Three shapes are accepted:
//! - a statement result, `{"result": {"data_array": [[...], ...]}}`;
//! - the bare `{"data_array": [[...], ...]}` payload;
//! - an array of objects keyed by column name.
//!
//! Positional rows list the six schema columns in order. Cells are coerced
//! to text: `null` becomes empty, strings are kept verbatim and other
//! scalars keep their JSON spelling.

use std::io::{BufReader, Read};

use camino::Utf8Path;
use cempasuchil_core::{COLUMNS, Dataset, FacilityRecord};
use log::info;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::LoadError;
use crate::fs::open_utf8_file;

const WIDTH: usize = COLUMNS.len();

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDataset {
    // Tried first: struct variants also accept JSON arrays.
    Objects(Vec<Map<String, Value>>),
    Statement { result: StatementResult },
    Bare { data_array: Vec<Vec<Value>> },
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    // Empty statement results omit the array entirely.
    #[serde(default)]
    data_array: Vec<Vec<Value>>,
}

/// Load a dataset from a JSON file.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened, and the
/// errors of [`parse_dataset`] for its contents.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use cempasuchil_data::load_dataset;
///
/// # fn main() -> Result<(), cempasuchil_data::LoadError> {
/// let dataset = load_dataset(Utf8Path::new("facilities.json"))?;
/// println!("{} facilities", dataset.len());
/// # Ok(())
/// # }
/// ```
pub fn load_dataset(path: &Utf8Path) -> Result<Dataset, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    let dataset = parse_dataset(BufReader::new(file))?;
    info!("loaded {} facilities from {path}", dataset.len());
    Ok(dataset)
}

/// Parse a dataset from any JSON reader.
///
/// # Errors
/// Returns [`LoadError::Parse`] for malformed or unrecognised JSON and
/// [`LoadError::RowWidth`] when a positional row does not hold six cells.
///
/// # Examples
/// ```
/// use cempasuchil_data::parse_dataset;
///
/// let json = r#"{"data_array": [["Korle Bu", "Accra", 120, null, "MRI", "40"]]}"#;
/// let dataset = parse_dataset(json.as_bytes()).expect("valid payload");
/// let record = dataset.get(0).expect("one row");
/// assert_eq!(record.capacity, "120");
/// assert_eq!(record.specialties, "");
/// ```
pub fn parse_dataset<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let raw: RawDataset =
        serde_json::from_reader(reader).map_err(|source| LoadError::Parse { source })?;
    match raw {
        RawDataset::Objects(objects) => Ok(objects.iter().map(from_object).collect()),
        RawDataset::Statement { result } => from_rows(result.data_array),
        RawDataset::Bare { data_array } => from_rows(data_array),
    }
}

fn from_rows(rows: Vec<Vec<Value>>) -> Result<Dataset, LoadError> {
    rows.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let found = cells.len();
            let fixed: [Value; WIDTH] = cells.try_into().map_err(|_| LoadError::RowWidth {
                row,
                found,
                expected: WIDTH,
            })?;
            Ok(record_from(fixed.map(|cell| cell_text(&cell))))
        })
        .collect()
}

fn from_object(object: &Map<String, Value>) -> FacilityRecord {
    record_from(COLUMNS.map(|column| object.get(column).map(cell_text).unwrap_or_default()))
}

fn record_from(columns: [String; WIDTH]) -> FacilityRecord {
    let [name, city, capacity, specialties, equipment, number_doctors] = columns;
    FacilityRecord {
        name,
        city,
        capacity,
        specialties,
        equipment,
        number_doctors,
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
