//! Transverse Mercator mapping — 8th-order power series about a central meridian.
//!
//! Forward and inverse are both closed-form polynomial evaluations around the
//! auxiliary quantities N (prime-vertical radius), t = tan φ and the footpoint
//! latitude, so neither direction iterates. Results are in the unscaled TM plane;
//! scale factor and false origin are applied by [`crate::proj::utm`].

use crate::proj::common::{arc_length_of_meridian, footpoint_latitude};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};

#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
}

impl TransverseMercator {
    /// `lon0` is the central meridian in radians.
    pub fn new(ellipsoid: Ellipsoid, lon0: f64) -> Self {
        Self { ellipsoid, lon0 }
    }

    /// WGS84 Transverse Mercator about `lon0` (radians).
    pub fn wgs84(lon0: f64) -> Self {
        Self::new(WGS84, lon0)
    }

    pub fn central_meridian(&self) -> f64 {
        self.lon0
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// (lat_rad, lon_rad) -> unscaled (x, y) in metres.
    pub fn project(&self, phi: f64, lambda: f64) -> (f64, f64) {
        let a = self.ellipsoid.semi_major_axis();
        let b = self.ellipsoid.semi_minor_axis();
        let ep2 = self.ellipsoid.ep2();

        let cos_phi = phi.cos();
        let nu2 = ep2 * cos_phi * cos_phi;
        let big_n = a * a / (b * (1.0 + nu2).sqrt());

        let t = phi.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let l = lambda - self.lon0;

        let l3coef = 1.0 - t2 + nu2;
        let l4coef = 5.0 - t2 + 9.0 * nu2 + 4.0 * nu2 * nu2;
        let l5coef = 5.0 - 18.0 * t2 + t4 + 14.0 * nu2 - 58.0 * t2 * nu2;
        let l6coef = 61.0 - 58.0 * t2 + t4 + 270.0 * nu2 - 330.0 * t2 * nu2;
        let l7coef = 61.0 - 479.0 * t2 + 179.0 * t4 - t6;
        let l8coef = 1385.0 - 3111.0 * t2 + 543.0 * t4 - t6;

        let c = cos_phi;
        let x = big_n * c * l
            + big_n / 6.0 * c.powi(3) * l3coef * l.powi(3)
            + big_n / 120.0 * c.powi(5) * l5coef * l.powi(5)
            + big_n / 5040.0 * c.powi(7) * l7coef * l.powi(7);

        let y = arc_length_of_meridian(&self.ellipsoid, phi)
            + t / 2.0 * big_n * c.powi(2) * l.powi(2)
            + t / 24.0 * big_n * c.powi(4) * l4coef * l.powi(4)
            + t / 720.0 * big_n * c.powi(6) * l6coef * l.powi(6)
            + t / 40320.0 * big_n * c.powi(8) * l8coef * l.powi(8);

        (x, y)
    }

    /// Unscaled (x, y) in metres -> (lat_rad, lon_rad).
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let a = self.ellipsoid.semi_major_axis();
        let b = self.ellipsoid.semi_minor_axis();
        let ep2 = self.ellipsoid.ep2();

        let phif = footpoint_latitude(&self.ellipsoid, y);

        let cf = phif.cos();
        let nuf2 = ep2 * cf * cf;
        let nf = a * a / (b * (1.0 + nuf2).sqrt());

        let tf = phif.tan();
        let tf2 = tf * tf;
        let tf4 = tf2 * tf2;
        let tf6 = tf4 * tf2;

        // Reciprocal powers of Nf, alternating 1/cos and tan factors.
        let mut nf_pow = nf;
        let x1frac = 1.0 / (nf_pow * cf);
        nf_pow *= nf;
        let x2frac = tf / (2.0 * nf_pow);
        nf_pow *= nf;
        let x3frac = 1.0 / (6.0 * nf_pow * cf);
        nf_pow *= nf;
        let x4frac = tf / (24.0 * nf_pow);
        nf_pow *= nf;
        let x5frac = 1.0 / (120.0 * nf_pow * cf);
        nf_pow *= nf;
        let x6frac = tf / (720.0 * nf_pow);
        nf_pow *= nf;
        let x7frac = 1.0 / (5040.0 * nf_pow * cf);
        nf_pow *= nf;
        let x8frac = tf / (40320.0 * nf_pow);

        let x2poly = -1.0 - nuf2;
        let x3poly = -1.0 - 2.0 * tf2 - nuf2;
        let x4poly = 5.0 + 3.0 * tf2 + 6.0 * nuf2
            - 6.0 * tf2 * nuf2
            - 3.0 * nuf2 * nuf2
            - 9.0 * tf2 * nuf2 * nuf2;
        let x5poly = 5.0 + 28.0 * tf2 + 24.0 * tf4 + 6.0 * nuf2 + 8.0 * tf2 * nuf2;
        let x6poly = -61.0 - 90.0 * tf2 - 45.0 * tf4 - 107.0 * nuf2 + 162.0 * tf2 * nuf2;
        let x7poly = -61.0 - 662.0 * tf2 - 1320.0 * tf4 - 720.0 * tf6;
        let x8poly = 1385.0 + 3633.0 * tf2 + 4095.0 * tf4 + 1575.0 * tf6;

        let lat = phif
            + x2frac * x2poly * x.powi(2)
            + x4frac * x4poly * x.powi(4)
            + x6frac * x6poly * x.powi(6)
            + x8frac * x8poly * x.powi(8);

        let lon = self.lon0
            + x1frac * x
            + x3frac * x3poly * x.powi(3)
            + x5frac * x5poly * x.powi(5)
            + x7frac * x7poly * x.powi(7);

        (lat, lon)
    }
}
