//! Coordinate value types shared by the projection and grid layers.

use serde::{Deserialize, Serialize};

use crate::error::ProjError;
use crate::proj::common::surface_distance;

/// A point on the WGS84 ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeographicCoordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ProjError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ProjError::InvalidCoordinate(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ProjError::InvalidCoordinate(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Surface distance to `other` in metres.
    pub fn distance_m(&self, other: &GeographicCoordinate) -> f64 {
        surface_distance(
            self.latitude.to_radians(),
            self.longitude.to_radians(),
            other.latitude.to_radians(),
            other.longitude.to_radians(),
        )
    }
}

/// A 6° UTM longitude band, 1..=60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Zone(u8);

impl Zone {
    pub fn new(zone: u8) -> Result<Self, ProjError> {
        if (1..=60).contains(&zone) {
            Ok(Self(zone))
        } else {
            Err(ProjError::InvalidZone(zone))
        }
    }

    /// Callers guarantee `1..=60`.
    pub(crate) const fn new_unchecked(zone: u8) -> Self {
        Self(zone)
    }

    /// Zone containing `longitude` (degrees): `floor((lon + 180) / 6) + 1`.
    ///
    /// Longitude 180 belongs to zone 60; irregular zones (Norway, Svalbard) are
    /// not special-cased.
    pub fn from_longitude(longitude: f64) -> Result<Self, ProjError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ProjError::InvalidCoordinate(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        let zone = ((longitude + 180.0) / 6.0).floor() as u8 + 1;
        Ok(Self(zone.min(60)))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Central meridian in degrees.
    pub fn central_meridian(self) -> f64 {
        -183.0 + 6.0 * f64::from(self.0)
    }
}

impl TryFrom<u8> for Zone {
    type Error = ProjError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> u8 {
        zone.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere of a latitude in degrees; the equator counts as north.
    pub fn of_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    pub fn is_southern(self) -> bool {
        self == Self::South
    }

    /// False northing applied to coordinates in this hemisphere.
    pub fn false_northing(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::South => 10_000_000.0,
        }
    }
}

/// UTM easting/northing together with the zone and hemisphere they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarCoordinate {
    /// Easting (metres)
    pub x: f64,
    /// Northing (metres)
    pub y: f64,
    pub zone: Zone,
    pub hemisphere: Hemisphere,
}

/// National grid easting/northing; zone and hemisphere are fixed by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Easting (metres)
    pub x: f64,
    /// Northing (metres)
    pub y: f64,
}

impl GridCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coordinate_range() {
        assert!(GeographicCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeographicCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeographicCoordinate::new(90.5, 0.0).is_err());
        assert!(GeographicCoordinate::new(0.0, -180.1).is_err());
        assert!(GeographicCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeographicCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zone_bounds() {
        assert_eq!(Zone::new(0), Err(ProjError::InvalidZone(0)));
        assert_eq!(Zone::new(61), Err(ProjError::InvalidZone(61)));
        assert_eq!(Zone::new(1).unwrap().number(), 1);
        assert_eq!(Zone::new(60).unwrap().number(), 60);
    }

    #[test]
    fn test_zone_from_longitude_boundaries() {
        assert_eq!(Zone::from_longitude(-180.0).unwrap().number(), 1);
        assert_eq!(Zone::from_longitude(-174.0).unwrap().number(), 2);
        assert_eq!(Zone::from_longitude(-174.000_001).unwrap().number(), 1);
        assert_eq!(Zone::from_longitude(0.0).unwrap().number(), 31);
        assert_eq!(Zone::from_longitude(15.0).unwrap().number(), 33);
        assert_eq!(Zone::from_longitude(174.0).unwrap().number(), 60);
        assert_eq!(Zone::from_longitude(180.0).unwrap().number(), 60);
        assert!(Zone::from_longitude(181.0).is_err());
    }

    #[test]
    fn test_central_meridian() {
        assert_relative_eq!(Zone::new(1).unwrap().central_meridian(), -177.0);
        assert_relative_eq!(Zone::new(33).unwrap().central_meridian(), 15.0);
        assert_relative_eq!(Zone::new(35).unwrap().central_meridian(), 27.0);
        assert_relative_eq!(Zone::new(60).unwrap().central_meridian(), 177.0);
    }

    #[test]
    fn test_hemisphere_of_latitude() {
        assert_eq!(Hemisphere::of_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::of_latitude(-0.1), Hemisphere::South);
        assert!(Hemisphere::South.is_southern());
    }

    #[test]
    fn test_zone_deserialize_rejects_out_of_range() {
        let zone: Zone = serde_json::from_str("35").unwrap();
        assert_eq!(zone.number(), 35);
        assert!(serde_json::from_str::<Zone>("0").is_err());
        assert!(serde_json::from_str::<Zone>("61").is_err());
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let a = GeographicCoordinate::new(60.0, 25.0).unwrap();
        let b = GeographicCoordinate::new(61.0, 25.0).unwrap();
        let d = a.distance_m(&b);
        assert!(d > 111_000.0 && d < 111_400.0, "distance = {d}");
        assert_relative_eq!(a.distance_m(&a), 0.0);
    }
}
