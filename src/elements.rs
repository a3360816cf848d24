//! Orbital element records.
//!
//! Records come from CelesTrak-style GP CSV exports. Fields are addressed by
//! position; only the columns the scene needs are read:
//!
//! | index | column           |
//! |-------|------------------|
//! | 0     | OBJECT_NAME      |
//! | 1     | OBJECT_ID        |
//! | 3     | MEAN_MOTION      |
//! | 5     | INCLINATION      |
//! | 6     | RA_OF_ASC_NODE   |

use csv::StringRecord;
use std::io;
use std::num::ParseFloatError;
use std::str::FromStr;

const NAME_INDEX: usize = 0;
const ID_INDEX: usize = 1;
const ROTATIONS_INDEX: usize = 3;
const INCLINATION_INDEX: usize = 5;
const RIGHT_ASCENSION_INDEX: usize = 6;

/// Orbital elements of a single tracked object, as read from a record.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Object name (e.g. "ISS (ZARYA)").
    pub name: String,
    /// Catalog identifier (international designator).
    pub catalog_id: String,
    /// Orbital frequency in revolutions per day. Always positive and finite.
    pub rotations_per_day: f64,
    /// Orbit inclination in degrees; above 90 the orbit is retrograde.
    pub inclination_deg: f64,
    /// Right ascension of the ascending node in degrees.
    pub right_ascension_deg: f64,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing field `{field}` (column {index})")]
    MissingField { field: &'static str, index: usize },

    #[error("field `{field}` is not a number: {value:?} ({source})")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },

    #[error("field `{field}` is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("rotations per day must be positive, got {0}")]
    NonPositiveRotations(f64),

    #[error("malformed record: {0}")]
    Malformed(String),
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

/// CSV reader configured for element files.
///
/// Quoted fields follow RFC 4180, rows may have any number of columns and
/// every field is trimmed.
pub fn record_reader<R: io::Read>(has_headers: bool, source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

impl OrbitalElements {
    /// Build elements from one CSV record.
    ///
    /// Blank fields count as absent: a record with an empty required column
    /// is rejected rather than having its later columns shifted.
    pub fn from_record(record: &StringRecord) -> Result<Self, ParseError> {
        let name = required(record, NAME_INDEX, "name")?;
        let catalog_id = required(record, ID_INDEX, "catalog_id")?;
        let rotations_per_day = number(record, ROTATIONS_INDEX, "rotations_per_day")?;
        let inclination_deg = number(record, INCLINATION_INDEX, "inclination")?;
        let right_ascension_deg = number(record, RIGHT_ASCENSION_INDEX, "right_ascension")?;

        // Height and period are undefined for non-positive frequencies
        if rotations_per_day <= 0.0 {
            return Err(ParseError::NonPositiveRotations(rotations_per_day));
        }

        Ok(Self {
            name: name.to_string(),
            catalog_id: catalog_id.to_string(),
            rotations_per_day,
            inclination_deg,
            right_ascension_deg,
        })
    }

    /// Parse a single header-less CSV line.
    pub fn parse_record(line: &str) -> Result<Self, ParseError> {
        let mut reader = record_reader(false, line.as_bytes());
        let mut record = StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(ParseError::MissingField {
                field: "name",
                index: NAME_INDEX,
            });
        }
        Self::from_record(&record)
    }
}

impl FromStr for OrbitalElements {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_record(s)
    }
}

fn required<'a>(
    record: &'a StringRecord,
    index: usize,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    match record.get(index) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ParseError::MissingField { field, index }),
    }
}

fn number(record: &StringRecord, index: usize, field: &'static str) -> Result<f64, ParseError> {
    let token = required(record, index, field)?;
    let value: f64 = token.parse().map_err(|source| ParseError::InvalidNumber {
        field,
        value: token.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite { field, value });
    }
    Ok(value)
}
