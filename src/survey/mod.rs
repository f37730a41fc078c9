//! Collaborator contracts for the geotag → grid → registry pipeline, and the
//! per-input result types it produces.
//!
//! Reading images, HTTP lookups, geocoding and report formatting all live behind
//! these traits; this crate only orchestrates them around the grid conversion.

pub mod engine;

use serde::Serialize;

use crate::coord::{GeographicCoordinate, GridCoordinate};
use crate::error::{CollaboratorError, GridError};

pub use engine::Survey;

/// Yields the embedded location of an image, if any.
///
/// Hemisphere reference letters must already be applied to the signs.
pub trait GeotagSource: Send + Sync {
    fn geotag(&self, id: &str) -> Result<Option<GeographicCoordinate>, CollaboratorError>;
}

/// Cadastral registry lookup by national grid coordinate.
pub trait ParcelRegistry: Send + Sync {
    /// An empty [`ParcelRecord`] means the point is not in the registry;
    /// `Err` means the lookup itself failed.
    fn lookup(&self, grid: &GridCoordinate) -> Result<ParcelRecord, CollaboratorError>;
}

pub trait ReverseGeocoder: Send + Sync {
    fn reverse(&self, coord: &GeographicCoordinate) -> Result<Option<Address>, CollaboratorError>;
}

pub trait ReportWriter {
    fn write_rows(&mut self, rows: &[Row]) -> Result<(), CollaboratorError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParcelRecord {
    pub area_name: Option<String>,
    pub parcel_id: Option<String>,
}

impl ParcelRecord {
    pub fn is_empty(&self) -> bool {
        self.area_name.is_none() && self.parcel_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub address: String,
    pub low_accuracy: bool,
}

/// Registry result for one row: found, absent, or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParcelLookup {
    Found(ParcelRecord),
    NotFound,
    Failed(String),
}

impl From<Result<ParcelRecord, CollaboratorError>> for ParcelLookup {
    fn from(result: Result<ParcelRecord, CollaboratorError>) -> Self {
        match result {
            Ok(record) if record.is_empty() => ParcelLookup::NotFound,
            Ok(record) => ParcelLookup::Found(record),
            Err(e) => ParcelLookup::Failed(e.to_string()),
        }
    }
}

/// One converted input, ready for the report writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: String,
    pub address: Option<Address>,
    pub parcel: ParcelLookup,
    pub geographic: GeographicCoordinate,
    pub grid: GridCoordinate,
}

/// What happened to a single input.
#[derive(Debug)]
pub enum Outcome {
    Converted(Row),
    /// The image carries no location.
    NoGeotag,
    /// Southern hemisphere: outside the national grid.
    OutsideGrid(GeographicCoordinate),
    /// Conversion failed or did not survive the round-trip check.
    Rejected {
        coord: GeographicCoordinate,
        error: GridError,
    },
    /// The geotag source failed.
    Failed(CollaboratorError),
}

impl Outcome {
    pub fn row(&self) -> Option<&Row> {
        match self {
            Outcome::Converted(row) => Some(row),
            _ => None,
        }
    }
}
