//! Batch engine: geotag → national grid (round-trip gated) → registry and geocoder.
//!
//! Every input yields exactly one [`Outcome`]; a failing input never aborts the batch.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{GeotagSource, Outcome, ParcelLookup, ParcelRegistry, ReportWriter, ReverseGeocoder, Row};
use crate::config::Config;
use crate::coord::GeographicCoordinate;
use crate::error::{CollaboratorError, ConfigError};
use crate::grid::{NationalGrid, RoundTripValidator};

pub struct Survey {
    grid: NationalGrid,
    validator: RoundTripValidator,
    geotags: Box<dyn GeotagSource>,
    registry: Box<dyn ParcelRegistry>,
    geocoder: Option<Box<dyn ReverseGeocoder>>,
    pool: Option<rayon::ThreadPool>,
}

impl Survey {
    pub fn new(
        config: &Config,
        geotags: Box<dyn GeotagSource>,
        registry: Box<dyn ParcelRegistry>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = match config.threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        Ok(Self {
            grid: config.national_grid(),
            validator: config.validator(),
            geotags,
            registry,
            geocoder: None,
            pool,
        })
    }

    pub fn with_geocoder(mut self, geocoder: Box<dyn ReverseGeocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Process every id, in parallel, preserving input order.
    pub fn run(&self, ids: &[String]) -> Vec<(String, Outcome)> {
        let work = || {
            ids.par_iter()
                .map(|id| (id.clone(), self.process(id)))
                .collect::<Vec<_>>()
        };
        let outcomes = match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        };

        let converted = outcomes.iter().filter(|(_, o)| o.row().is_some()).count();
        info!(
            total = outcomes.len(),
            converted,
            skipped = outcomes.len() - converted,
            "survey batch finished"
        );
        outcomes
    }

    /// Process a single input.
    pub fn process(&self, id: &str) -> Outcome {
        let coord = match self.geotags.geotag(id) {
            Ok(Some(coord)) => coord,
            Ok(None) => {
                debug!(id, "no geotag");
                return Outcome::NoGeotag;
            }
            Err(e) => {
                warn!(id, error = %e, "geotag source failed");
                return Outcome::Failed(e);
            }
        };

        let grid = match self.grid.to_grid_checked(&coord, &self.validator) {
            Ok(Some(grid)) => grid,
            Ok(None) => {
                debug!(id, lat = coord.latitude(), "outside national grid");
                return Outcome::OutsideGrid(coord);
            }
            Err(error) => {
                warn!(id, error = %error, "grid conversion rejected");
                return Outcome::Rejected { coord, error };
            }
        };
        debug!(id, x = grid.x, y = grid.y, "converted");

        let parcel = ParcelLookup::from(self.registry.lookup(&grid));
        if let ParcelLookup::Failed(reason) = &parcel {
            warn!(id, reason = %reason, "parcel lookup failed");
        }

        Outcome::Converted(Row {
            id: id.to_string(),
            address: self.reverse_geocode(id, &coord),
            parcel,
            geographic: coord,
            grid,
        })
    }

    fn reverse_geocode(&self, id: &str, coord: &GeographicCoordinate) -> Option<super::Address> {
        let geocoder = self.geocoder.as_ref()?;
        match geocoder.reverse(coord) {
            Ok(address) => address,
            Err(e) => {
                warn!(id, error = %e, "reverse geocoding failed");
                None
            }
        }
    }

    /// Write the converted rows of `outcomes` and return how many were written.
    pub fn report<W: ReportWriter + ?Sized>(
        &self,
        outcomes: &[(String, Outcome)],
        writer: &mut W,
    ) -> Result<usize, CollaboratorError> {
        let rows: Vec<Row> = outcomes.iter().filter_map(|(_, o)| o.row().cloned()).collect();
        writer.write_rows(&rows)?;
        Ok(rows.len())
    }
}
