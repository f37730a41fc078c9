//! Round-trip accuracy gate for national grid conversions.

use tracing::warn;

use super::NationalGrid;
use crate::coord::{GeographicCoordinate, GridCoordinate};
use crate::error::GridError;

/// Default round-trip tolerance (metres).
pub const DEFAULT_TOLERANCE_M: f64 = 0.1;

/// Reprojects a grid coordinate back to geographic and compares it with the
/// original point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundTripValidator {
    /// Maximum allowed surface distance in metres.
    pub tolerance_m: f64,
}

impl Default for RoundTripValidator {
    fn default() -> Self {
        Self {
            tolerance_m: DEFAULT_TOLERANCE_M,
        }
    }
}

impl RoundTripValidator {
    pub fn new(tolerance_m: f64) -> Self {
        Self { tolerance_m }
    }

    /// Reproject `grid` and return the distance to `original`, or
    /// `ToleranceExceeded` when it is not within tolerance.
    pub fn check(
        &self,
        national_grid: &NationalGrid,
        original: &GeographicCoordinate,
        grid: &GridCoordinate,
    ) -> Result<f64, GridError> {
        let back = national_grid.to_geographic(grid)?;
        let distance_m = back.distance_m(original);
        // NaN fails the comparison and is rejected too.
        if distance_m <= self.tolerance_m {
            Ok(distance_m)
        } else {
            warn!(
                lat = original.latitude(),
                lon = original.longitude(),
                distance_m,
                tolerance_m = self.tolerance_m,
                "round-trip check failed"
            );
            Err(GridError::ToleranceExceeded {
                distance_m,
                tolerance_m: self.tolerance_m,
            })
        }
    }

    /// Project `original` into `national_grid`, reproject, and report whether the
    /// round trip stays within tolerance. Southern-hemisphere points have no grid
    /// coordinate and never validate.
    pub fn validate(&self, national_grid: &NationalGrid, original: &GeographicCoordinate) -> bool {
        match national_grid.to_grid(original) {
            Ok(Some(grid)) => self.check(national_grid, original, &grid).is_ok(),
            Ok(None) | Err(_) => false,
        }
    }
}
