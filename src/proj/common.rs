//! Common helpers for projection math: meridian arc, footpoint latitude, surface distance.

use super::ellipsoid::Ellipsoid;

/// Mean Earth radius (IUGG), metres.
const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Meridian arc length from the equator to latitude `phi` (radians), in metres.
///
/// Series in powers of the third flattening n, truncated at n⁵.
pub fn arc_length_of_meridian(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let n = ellipsoid.n();
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    let n5 = n4 * n;

    let alpha = ellipsoid.rectifying_scale();
    let beta = -3.0 * n / 2.0 + 9.0 * n3 / 16.0 - 3.0 * n5 / 32.0;
    let gamma = 15.0 * n2 / 16.0 - 15.0 * n4 / 32.0;
    let delta = -35.0 * n3 / 48.0 + 105.0 * n5 / 256.0;
    let epsilon = 315.0 * n4 / 512.0;

    alpha
        * (phi
            + beta * (2.0 * phi).sin()
            + gamma * (4.0 * phi).sin()
            + delta * (6.0 * phi).sin()
            + epsilon * (8.0 * phi).sin())
}

/// Footpoint latitude (radians): the latitude whose meridian arc length equals `y`.
///
/// Inverse of [`arc_length_of_meridian`]; meaningful away from the poles.
pub fn footpoint_latitude(ellipsoid: &Ellipsoid, y: f64) -> f64 {
    let n = ellipsoid.n();
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    let n5 = n4 * n;

    let y_ = y / ellipsoid.rectifying_scale();
    let beta = 3.0 * n / 2.0 - 27.0 * n3 / 32.0 + 269.0 * n5 / 512.0;
    let gamma = 21.0 * n2 / 16.0 - 55.0 * n4 / 32.0;
    let delta = 151.0 * n3 / 96.0 - 417.0 * n5 / 128.0;
    let epsilon = 1097.0 * n4 / 512.0;

    y_ + beta * (2.0 * y_).sin()
        + gamma * (4.0 * y_).sin()
        + delta * (6.0 * y_).sin()
        + epsilon * (8.0 * y_).sin()
}

/// Haversine distance in metres between two points given in radians.
///
/// Sub-millimetre resolution for the short distances the round-trip check measures.
pub fn surface_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    2.0 * MEAN_EARTH_RADIUS * h.sqrt().min(1.0).asin()
}
