//! Universal Transverse Mercator: zone selection, scale factor and false origin
//! on top of the unscaled [`TransverseMercator`] series.

use crate::coord::{GeographicCoordinate, Hemisphere, PlanarCoordinate, Zone};
use crate::error::ProjError;
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::Projection;

/// UTM scale factor on the central meridian.
pub const SCALE_FACTOR: f64 = 0.9996;
pub const FALSE_EASTING: f64 = 500_000.0;
/// Added to northings south of the equator.
pub const SOUTHERN_FALSE_NORTHING: f64 = 10_000_000.0;

fn ensure_finite(x: f64, y: f64, what: &str) -> Result<(), ProjError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(ProjError::OutOfDomain(format!("{what} produced ({x}, {y})")))
    }
}

/// Project `coord` to UTM.
///
/// With no `zone`, the zone is derived from the longitude. The hemisphere follows
/// the sign of the input latitude; negative northings get the southern false northing.
pub fn geographic_to_utm(
    coord: &GeographicCoordinate,
    zone: Option<Zone>,
) -> Result<PlanarCoordinate, ProjError> {
    let zone = match zone {
        Some(z) => z,
        None => Zone::from_longitude(coord.longitude())?,
    };

    let tm = TransverseMercator::wgs84(zone.central_meridian().to_radians());
    let (x, y) = tm.project(coord.latitude().to_radians(), coord.longitude().to_radians());
    ensure_finite(x, y, "forward projection")?;

    let x = x * SCALE_FACTOR + FALSE_EASTING;
    let mut y = y * SCALE_FACTOR;
    if y < 0.0 {
        y += SOUTHERN_FALSE_NORTHING;
    }

    Ok(PlanarCoordinate {
        x,
        y,
        zone,
        hemisphere: Hemisphere::of_latitude(coord.latitude()),
    })
}

/// Invert [`geographic_to_utm`].
pub fn utm_to_geographic(planar: &PlanarCoordinate) -> Result<GeographicCoordinate, ProjError> {
    let x = (planar.x - FALSE_EASTING) / SCALE_FACTOR;
    let y = (planar.y - planar.hemisphere.false_northing()) / SCALE_FACTOR;

    let tm = TransverseMercator::wgs84(planar.zone.central_meridian().to_radians());
    let (lat, lon) = tm.unproject(x, y);
    ensure_finite(lat, lon, "inverse projection")?;

    GeographicCoordinate::new(lat.to_degrees(), lon.to_degrees())
        .map_err(|e| ProjError::OutOfDomain(e.to_string()))
}

/// A single UTM zone with a fixed hemisphere, as used by EPSG:326zz / EPSG:327zz.
///
/// Unlike [`geographic_to_utm`], the false northing is fixed by the hemisphere
/// rather than chosen per point.
#[derive(Clone, Copy, Debug)]
pub struct Utm {
    zone: Zone,
    hemisphere: Hemisphere,
    tm: TransverseMercator,
}

impl Utm {
    pub fn new(zone: Zone, hemisphere: Hemisphere) -> Self {
        Self {
            zone,
            hemisphere,
            tm: TransverseMercator::wgs84(zone.central_meridian().to_radians()),
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

impl Projection for Utm {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let (x, y) = self.tm.project(lat, lon);
        ensure_finite(x, y, "forward projection")?;
        Ok((
            x * SCALE_FACTOR + FALSE_EASTING,
            y * SCALE_FACTOR + self.hemisphere.false_northing(),
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lat, lon) = self.tm.unproject(
            (x - FALSE_EASTING) / SCALE_FACTOR,
            (y - self.hemisphere.false_northing()) / SCALE_FACTOR,
        );
        ensure_finite(lat, lon, "inverse projection")?;
        Ok((lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geo(lat: f64, lon: f64) -> GeographicCoordinate {
        GeographicCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_known_fixed_point_zone33() {
        let p = geographic_to_utm(&geo(0.0, 15.0), None).unwrap();
        assert_eq!(p.zone.number(), 33);
        assert_eq!(p.hemisphere, Hemisphere::North);
        assert_relative_eq!(p.x, 500_000.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_central_meridian_easting() {
        for lat in [-60.0, -10.0, 20.0, 45.0, 70.0] {
            let p = geographic_to_utm(&geo(lat, 27.0), None).unwrap();
            assert_eq!(p.zone.number(), 35);
            assert_relative_eq!(p.x, 500_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zone33_known_northing() {
        // (52°N, 15°E): northing 5 761 038.2 m
        let p = geographic_to_utm(&geo(52.0, 15.0), None).unwrap();
        assert_relative_eq!(p.x, 500_000.0, epsilon = 1e-6);
        assert!(p.y > 5_760_000.0 && p.y < 5_762_000.0, "northing = {}", p.y);
    }

    #[test]
    fn test_southern_hemisphere_wraps_northing() {
        let c = geo(-30.0, 15.0);
        let p = geographic_to_utm(&c, None).unwrap();
        assert_eq!(p.hemisphere, Hemisphere::South);
        assert!(p.y > 0.0 && p.y < SOUTHERN_FALSE_NORTHING, "northing = {}", p.y);
        let back = utm_to_geographic(&p).unwrap();
        assert!(back.distance_m(&c) < 1e-3);
    }

    #[test]
    fn test_roundtrip_across_zones() {
        for zone in [1u8, 10, 17, 30, 33, 45, 60] {
            let z = Zone::new(zone).unwrap();
            let cm = z.central_meridian();
            for (lat, dlon) in [(45.0, 2.0), (-33.0, -2.5), (5.0, 1.0), (78.0, -2.9)] {
                let c = geo(lat, cm + dlon);
                let p = geographic_to_utm(&c, Some(z)).unwrap();
                let back = utm_to_geographic(&p).unwrap();
                assert!(back.distance_m(&c) < 1e-3, "zone {zone} ({lat}, {dlon})");
            }
        }
    }

    #[test]
    fn test_explicit_zone_overrides_derived() {
        // 24°E is in zone 35 by formula, projected through zone 34 explicitly
        let c = geo(61.0, 24.0);
        let z34 = Zone::new(34).unwrap();
        let p = geographic_to_utm(&c, Some(z34)).unwrap();
        assert_eq!(p.zone, z34);
        assert!(p.x > 500_000.0);
        let derived = geographic_to_utm(&c, None).unwrap();
        assert_eq!(derived.zone.number(), 35);
        assert!(derived.x < 500_000.0);
    }

    #[test]
    fn test_monotonic_northing_in_latitude() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=80 {
            let lat = f64::from(i) - 0.5;
            let p = geographic_to_utm(&geo(lat, 26.0), Some(Zone::new(35).unwrap())).unwrap();
            // compare in the unwrapped frame
            let y = p.y - p.hemisphere.false_northing();
            assert!(y > prev, "northing not increasing at {lat}");
            prev = y;
        }
    }

    #[test]
    fn test_monotonic_easting_in_longitude() {
        let zone = Zone::new(35).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=60 {
            let lon = 24.0 + f64::from(i) * 0.1;
            let p = geographic_to_utm(&geo(62.0, lon), Some(zone)).unwrap();
            assert!(p.x > prev, "easting not increasing at {lon}");
            prev = p.x;
        }
    }

    #[test]
    fn test_projection_trait_matches_free_functions() {
        let utm = Utm::new(Zone::new(33).unwrap(), Hemisphere::North);
        let c = geo(59.91, 16.2);
        let (x, y) = utm
            .forward(c.longitude().to_radians(), c.latitude().to_radians())
            .unwrap();
        let p = geographic_to_utm(&c, Some(utm.zone())).unwrap();
        assert_relative_eq!(x, p.x, epsilon = 1e-9);
        assert_relative_eq!(y, p.y, epsilon = 1e-9);

        let (lon, lat) = utm.inverse(x, y).unwrap();
        assert_relative_eq!(lon.to_degrees(), c.longitude(), epsilon = 1e-8);
        assert_relative_eq!(lat.to_degrees(), c.latitude(), epsilon = 1e-8);
    }

    #[test]
    fn test_matches_proj4rs() {
        use proj4rs::Proj;

        let cases: &[(u8, f64, f64)] = &[
            (33, 52.0, 13.5),
            (35, 60.2, 24.9),
            (35, 68.0, 28.5),
            (17, 40.7, -79.0),
            (33, -30.0, 16.0),
        ];
        for &(zone, lat, lon) in cases {
            let south = if lat < 0.0 { " +south" } else { "" };
            let src = Proj::from_proj_string("+proj=longlat +ellps=WGS84").unwrap();
            let dst =
                Proj::from_proj_string(&format!("+proj=utm +zone={zone}{south} +ellps=WGS84"))
                    .unwrap();
            let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
            proj4rs::transform::transform(&src, &dst, &mut point).unwrap();

            let p = geographic_to_utm(&geo(lat, lon), Some(Zone::new(zone).unwrap())).unwrap();
            assert_relative_eq!(p.x, point.0, epsilon = 0.01);
            assert_relative_eq!(p.y, point.1, epsilon = 0.01);
        }
    }

    #[test]
    fn test_pole_projects_onto_central_meridian() {
        // cos(90°) is ~6e-17 in f64, so every longitude term vanishes
        let p = geographic_to_utm(&geo(90.0, 10.0), None).unwrap();
        assert_eq!(p.zone.number(), 32);
        assert_eq!(p.hemisphere, Hemisphere::North);
        assert_relative_eq!(p.x, 500_000.0, epsilon = 1e-3);
        // quarter meridian 10 001 965.729 m scaled by k0
        assert_relative_eq!(p.y, 9_997_964.943, epsilon = 1e-3);
    }

    #[test]
    fn test_inverse_outside_range_is_out_of_domain() {
        let planar = PlanarCoordinate {
            x: 1e200,
            y: 0.0,
            zone: Zone::new(35).unwrap(),
            hemisphere: Hemisphere::North,
        };
        assert!(matches!(
            utm_to_geographic(&planar),
            Err(ProjError::OutOfDomain(_))
        ));
    }
}
