//! Pipeline — CRS-to-CRS transform chain over the native projections,
//! addressed by EPSG code.

use crate::coord::{Hemisphere, Zone};
use crate::error::ProjError;
use crate::grid::NationalGrid;
use crate::proj::utm::Utm;
use crate::proj::Projection;

/// Describes a CRS endpoint in the pipeline.
enum CrsEndpoint {
    /// Geographic CRS — degrees externally, radians internally.
    Geographic,
    /// Projected CRS — coordinates are in metres.
    Projected(Box<dyn Projection>),
}

impl CrsEndpoint {
    /// Native coordinates -> (lon_rad, lat_rad).
    fn native_to_lonlat(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        match self {
            CrsEndpoint::Geographic => Ok((x.to_radians(), y.to_radians())),
            CrsEndpoint::Projected(proj) => proj.inverse(x, y),
        }
    }

    /// (lon_rad, lat_rad) -> native coordinates.
    fn lonlat_to_native(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        match self {
            CrsEndpoint::Geographic => Ok((lon.to_degrees(), lat.to_degrees())),
            CrsEndpoint::Projected(proj) => proj.forward(lon, lat),
        }
    }
}

/// A CRS-to-CRS transform pipeline: source → geographic → destination.
///
/// Geographic coordinates are (longitude, latitude) in degrees.
pub struct Pipeline {
    src: CrsEndpoint,
    dst: CrsEndpoint,
}

impl Pipeline {
    /// Create a Pipeline from source and destination CRS strings ("EPSG:xxxx").
    pub fn new(src_crs: &str, dst_crs: &str) -> Result<Self, ProjError> {
        let src = parse_epsg(src_crs).ok_or_else(|| ProjError::UnknownCrs(src_crs.to_string()))?;
        let dst = parse_epsg(dst_crs).ok_or_else(|| ProjError::UnknownCrs(dst_crs.to_string()))?;
        Ok(Self { src, dst })
    }

    /// Transform a single point from source CRS to destination CRS.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lon, lat) = self.src.native_to_lonlat(x, y)?;
        self.dst.lonlat_to_native(lon, lat)
    }

    /// Batch transform, in place. Stops at the first failing point.
    pub fn transform_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.transform(c.0, c.1)?;
        }
        Ok(())
    }
}

/// Try to parse an EPSG code and return a `CrsEndpoint`.
fn parse_epsg(crs: &str) -> Option<CrsEndpoint> {
    let code = crs
        .strip_prefix("EPSG:")
        .or_else(|| crs.strip_prefix("epsg:"))?
        .parse::<u32>()
        .ok()?;

    match code {
        4326 => Some(CrsEndpoint::Geographic),

        // ETRS89 / TM35FIN(E,N). Projected on WGS84 rather than GRS80: sub-millimetre.
        3067 => Some(CrsEndpoint::Projected(Box::new(NationalGrid::etrs_tm35fin()))),

        // UTM North: EPSG:326XX (zone 1–60)
        32601..=32660 => {
            let zone = Zone::new((code - 32600) as u8).ok()?;
            Some(CrsEndpoint::Projected(Box::new(Utm::new(zone, Hemisphere::North))))
        }

        // UTM South: EPSG:327XX (zone 1–60)
        32701..=32760 => {
            let zone = Zone::new((code - 32700) as u8).ok()?;
            Some(CrsEndpoint::Projected(Box::new(Utm::new(zone, Hemisphere::South))))
        }

        _ => None,
    }
}
